//! Fixed-width unsigned numbers over an arbitrary digit base.
//!
//! Number types are stamped out by [`define_number!`], one concrete type per
//! `(digit type, digit count, digit maximum)` triple. [`FixedUnsigned`] is the
//! interface those types share, which is what [`Integer`](crate::Integer) builds on.

use core::fmt;
use core::hash::Hash;

use alloc::string::String;

use num_traits::{Bounded, Num, Unsigned};

use crate::codec::StringBase;
use crate::digit::FullOps;
use crate::error::{ArithmeticError, ParseNumberError};

mod convert;
mod fmt_impls;
mod ops;


/// A fixed-width unsigned integer made of `NUM_DIGITS` digits in base `DIGIT_MAX + 1`.
///
/// All of this is implemented by [`define_number!`]; the inherent methods of the
/// generated types carry the documentation.
pub trait FixedUnsigned:
    Copy
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::Octal
    + fmt::LowerHex
    + fmt::Binary
    + Bounded
    + Unsigned
    + Num<FromStrRadixErr = ParseNumberError>
    + Send
    + Sync
    + 'static
{
    type Digit: FullOps;

    const NUM_DIGITS: usize;
    const DIGIT_MAX: Self::Digit;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn digit(&self, power: usize) -> Self::Digit;
    fn set_digit(&mut self, power: usize, value: Self::Digit);
    fn most_significant_digit(&self) -> usize;
    fn digits(&self) -> &[Self::Digit];

    fn from_u128(value: u128) -> Self;
    fn checked_from_u128(value: u128) -> Option<Self>;
    fn wrapping_to_u128(&self) -> u128;
    fn checked_to_u128(&self) -> Option<u128>;

    fn try_add(&self, other: &Self) -> Result<Self, ArithmeticError>;
    fn try_sub(&self, other: &Self) -> Result<Self, ArithmeticError>;
    fn try_mul(&self, other: &Self) -> Result<Self, ArithmeticError>;
    fn try_div(&self, other: &Self) -> Result<Self, ArithmeticError>;
    fn try_rem(&self, other: &Self) -> Result<Self, ArithmeticError>;

    fn to_string_radix(&self, base: StringBase) -> String;
    fn from_string(text: &str, base: StringBase) -> Result<Self, ParseNumberError>;

    /// Converts into a type with at least as many digits of the same base,
    /// zero-extending the high end. Using a narrower target fails to compile.
    fn widen<T>(&self) -> T
    where
        T: FixedUnsigned<Digit = Self::Digit>,
    {
        const {
            assert!(T::NUM_DIGITS >= Self::NUM_DIGITS, "widen: target has fewer digits");
        }
        debug_assert!(T::DIGIT_MAX == Self::DIGIT_MAX, "widen: digit bases differ");
        self.truncate()
    }

    /// Converts into any width with the same base, keeping the low digits.
    /// The result is `self mod B^T::NUM_DIGITS`.
    fn truncate<T>(&self) -> T
    where
        T: FixedUnsigned<Digit = Self::Digit>,
    {
        debug_assert!(T::DIGIT_MAX == Self::DIGIT_MAX, "truncate: digit bases differ");
        let mut out = T::ZERO;
        for power in 0..T::NUM_DIGITS {
            out.set_digit(power, self.digit(power));
        }
        out
    }
}


/// Defines a fixed-width unsigned number type.
///
/// ```
/// radixnum::define_number!(
///     /// Four decimal digits.
///     pub Dec4: type=u8, n=4, max=9
/// );
///
/// let a = Dec4::from(1234u16);
/// assert_eq!(a.digit(0), 4);
/// assert_eq!((a + Dec4::from(9000u16)).to_string(), "234");
/// ```
///
/// `type` is the digit storage (`u8`, `u16` or `u32`), `n` the digit count and `max`
/// the largest digit value, so the base is `max + 1`. `max` defaults to the storage
/// maximum. `n` and `max` must be nonzero.
#[macro_export]
macro_rules! define_number {
    ($(#[$attr:meta])* $vis:vis $name:ident: type=$ty:ty, n=$n:expr) => (
        $crate::define_number!($(#[$attr])* $vis $name: type=$ty, n=$n, max=<$ty>::MAX);
    );
    ($(#[$attr:meta])* $vis:vis $name:ident: type=$ty:ty, n=$n:expr, max=$max:expr) => (
        $(#[$attr])*
        ///
        /// Digits are stored most significant first, so the derived ordering is the
        /// numeric one. Arithmetic wraps modulo `B^N` and never panics; the `try_*`
        /// methods report overflow and division by zero instead.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            digits: [$ty; $n],
        }

        const _: () = assert!($n > 0, "a number needs at least one digit");
        const _: () = assert!($name::DIGIT_MAX > 0, "the largest digit must be at least 1");

        impl $name {
            /// Number of digits.
            pub const NUM_DIGITS: usize = $n;
            /// Largest value of a single digit, one less than the base.
            pub const DIGIT_MAX: $ty = $max;
            pub const ZERO: $name = $name { digits: [0; $n] };
            pub const ONE: $name = {
                let mut digits = [0; $n];
                digits[$n - 1] = 1;
                $name { digits }
            };
            /// Every digit at its maximum, `B^N - 1`.
            pub const MAX: $name = $name { digits: [$max; $n] };

            /// Makes a number from its digits, most significant first.
            /// Each digit is reduced modulo the base.
            pub fn from_digits(digits: [$ty; $n]) -> $name {
                let mut out = $name::ZERO;
                for (slot, d) in out.digits.iter_mut().zip(digits.iter()) {
                    *slot = $crate::FullOps::reduce(*d, $name::DIGIT_MAX);
                }
                out
            }

            /// The digits, most significant first.
            pub fn digits(&self) -> &[$ty; $n] {
                &self.digits
            }

            /// Gets the digit of weight `B^power`. Powers past the width yield zero.
            #[inline]
            pub fn digit(&self, power: usize) -> $ty {
                $crate::algorithms::get(&self.digits, power)
            }

            /// Sets the digit of weight `B^power` to `value mod B`.
            /// Setting a power past the width is a no-op.
            #[inline]
            pub fn set_digit(&mut self, power: usize, value: $ty) {
                let value = $crate::FullOps::reduce(value, $name::DIGIT_MAX);
                $crate::algorithms::put(&mut self.digits, power, value)
            }

            /// The count of digits from the highest nonzero one down, i.e. the width
            /// minus the leading zero digits. Zero for zero.
            pub fn most_significant_digit(&self) -> usize {
                $crate::algorithms::significant_len(&self.digits)
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                $crate::algorithms::is_zero(&self.digits)
            }
        }

        $crate::__impl_engine_ops!($name, type=$ty, n=$n);
        $crate::__impl_codec_fmt!($name, type=$ty, n=$n);
        $crate::__impl_convert!($name, type=$ty, n=$n);
    );
}
