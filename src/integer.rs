//! Sign-magnitude signed integers over any [`FixedUnsigned`] magnitude.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use core::str::FromStr;

use alloc::string::String;

use num_traits::{AsPrimitive, FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::codec::StringBase;
use crate::error::{ArithmeticError, ParseNumberError};
use crate::number::FixedUnsigned;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A signed integer stored as a sign and an unsigned magnitude.
///
/// Zero is always positive. The magnitude arithmetic wraps the same way `T` does,
/// so `Integer<T>` covers `-(B^N - 1)..=B^N - 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Integer<T> {
    sign: Sign,
    magnitude: T,
}

impl<T: FixedUnsigned> Integer<T> {
    pub const ZERO: Integer<T> = Integer { sign: Sign::Positive, magnitude: T::ZERO };

    /// Builds a value from its parts. A zero magnitude always ends up positive.
    pub fn from_parts(sign: Sign, magnitude: T) -> Integer<T> {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
        Integer { sign, magnitude }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Unary plus. This forces the sign positive, so it equals the absolute value.
    pub fn unary_plus(&self) -> Integer<T> {
        Integer::from_parts(Sign::Positive, self.magnitude)
    }

    pub fn negate(&self) -> Integer<T> {
        Integer::from_parts(self.sign.flip(), self.magnitude)
    }

    /// Sum with the magnitude wrapping modulo `B^N`.
    pub fn wrapping_add(&self, other: &Integer<T>) -> Integer<T> {
        if self.sign == other.sign {
            return Integer::from_parts(self.sign, self.magnitude + other.magnitude);
        }
        match self.magnitude.cmp(&other.magnitude) {
            Ordering::Less => Integer::from_parts(other.sign, other.magnitude - self.magnitude),
            _ => Integer::from_parts(self.sign, self.magnitude - other.magnitude),
        }
    }

    pub fn wrapping_sub(&self, other: &Integer<T>) -> Integer<T> {
        self.wrapping_add(&other.negate())
    }

    pub fn wrapping_mul(&self, other: &Integer<T>) -> Integer<T> {
        Integer::from_parts(self.product_sign(other), self.magnitude * other.magnitude)
    }

    /// Quotient truncated toward zero. Division by zero yields zero.
    pub fn divide(&self, other: &Integer<T>) -> Integer<T> {
        Integer::from_parts(self.product_sign(other), self.magnitude / other.magnitude)
    }

    /// Remainder with the sign of `self`. Division by zero yields zero.
    pub fn modulus(&self, other: &Integer<T>) -> Integer<T> {
        Integer::from_parts(self.sign, self.magnitude % other.magnitude)
    }

    pub fn compare(&self, other: &Integer<T>) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }

    pub fn try_add(&self, other: &Integer<T>) -> Result<Integer<T>, ArithmeticError> {
        if self.sign == other.sign {
            return Ok(Integer::from_parts(self.sign, self.magnitude.try_add(&other.magnitude)?));
        }
        Ok(self.wrapping_add(other))
    }

    pub fn try_sub(&self, other: &Integer<T>) -> Result<Integer<T>, ArithmeticError> {
        self.try_add(&other.negate())
    }

    pub fn try_mul(&self, other: &Integer<T>) -> Result<Integer<T>, ArithmeticError> {
        let magnitude = self.magnitude.try_mul(&other.magnitude)?;
        Ok(Integer::from_parts(self.product_sign(other), magnitude))
    }

    pub fn try_div(&self, other: &Integer<T>) -> Result<Integer<T>, ArithmeticError> {
        let magnitude = self.magnitude.try_div(&other.magnitude)?;
        Ok(Integer::from_parts(self.product_sign(other), magnitude))
    }

    pub fn try_rem(&self, other: &Integer<T>) -> Result<Integer<T>, ArithmeticError> {
        let magnitude = self.magnitude.try_rem(&other.magnitude)?;
        Ok(Integer::from_parts(self.sign, magnitude))
    }

    /// Renders the magnitude in `base` behind a `-` for negatives. Zero renders as `""`.
    pub fn to_string_radix(&self, base: StringBase) -> String {
        let digits = self.magnitude.to_string_radix(base);
        if self.is_negative() {
            let mut out = String::with_capacity(digits.len() + 1);
            out.push('-');
            out.push_str(&digits);
            out
        } else {
            digits
        }
    }

    /// Parses an optional `+` or `-` followed by digits in `base`.
    /// `"-"` and `"-0"` both give positive zero.
    pub fn from_string(text: &str, base: StringBase) -> Result<Integer<T>, ParseNumberError> {
        let (sign, digits) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &text[1..]),
            Some(b'+') => (Sign::Positive, &text[1..]),
            _ => (Sign::Positive, text),
        };
        Ok(Integer::from_parts(sign, T::from_string(digits, base)?))
    }

    fn product_sign(&self, other: &Integer<T>) -> Sign {
        if self.sign == other.sign { Sign::Positive } else { Sign::Negative }
    }

    // The two's complement value modulo 2^128.
    fn wrapping_to_u128(&self) -> u128 {
        let m = self.magnitude.wrapping_to_u128();
        if self.is_negative() { m.wrapping_neg() } else { m }
    }
}

impl<T: FixedUnsigned> PartialOrd for Integer<T> {
    fn partial_cmp(&self, other: &Integer<T>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<T: FixedUnsigned> Ord for Integer<T> {
    fn cmp(&self, other: &Integer<T>) -> Ordering {
        self.compare(other)
    }
}

impl<T: FixedUnsigned> Neg for Integer<T> {
    type Output = Integer<T>;

    fn neg(self) -> Integer<T> {
        self.negate()
    }
}

macro_rules! impl_binary_op {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident => $forward:ident;)*) => {
        $(
            impl<T: FixedUnsigned> $trait for Integer<T> {
                type Output = Integer<T>;

                fn $method(self, other: Integer<T>) -> Integer<T> {
                    self.$forward(&other)
                }
            }

            impl<T: FixedUnsigned> $assign_trait for Integer<T> {
                fn $assign_method(&mut self, other: Integer<T>) {
                    *self = self.$forward(&other);
                }
            }
        )*
    }
}

impl_binary_op! {
    Add, add, AddAssign, add_assign => wrapping_add;
    Sub, sub, SubAssign, sub_assign => wrapping_sub;
    Mul, mul, MulAssign, mul_assign => wrapping_mul;
    Div, div, DivAssign, div_assign => divide;
    Rem, rem, RemAssign, rem_assign => modulus;
}

macro_rules! impl_from_signed {
    ($($prim:ty),*) => {
        $(
            impl<T: FixedUnsigned> From<$prim> for Integer<T> {
                fn from(v: $prim) -> Integer<T> {
                    let sign = if v < 0 { Sign::Negative } else { Sign::Positive };
                    Integer::from_parts(sign, T::from_u128(v.unsigned_abs() as u128))
                }
            }
        )*
    }
}

macro_rules! impl_from_unsigned {
    ($($prim:ty),*) => {
        $(
            impl<T: FixedUnsigned> From<$prim> for Integer<T> {
                fn from(v: $prim) -> Integer<T> {
                    Integer::from_parts(Sign::Positive, T::from_u128(v as u128))
                }
            }
        )*
    }
}

macro_rules! impl_as_primitive {
    ($($prim:ty),*) => {
        $(
            impl<T: FixedUnsigned> AsPrimitive<$prim> for Integer<T> {
                #[inline]
                fn as_(self) -> $prim {
                    self.wrapping_to_u128() as $prim
                }
            }
        )*
    }
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_as_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: FixedUnsigned> ToPrimitive for Integer<T> {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let m = self.magnitude.checked_to_u128()?;
        if self.is_negative() {
            // i128::MIN has no positive counterpart
            if m == 1 << 127 {
                Some(i128::MIN)
            } else {
                i128::try_from(m).ok().map(|v| -v)
            }
        } else {
            i128::try_from(m).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            None
        } else {
            self.magnitude.checked_to_u128()
        }
    }
}

impl<T: FixedUnsigned> FromPrimitive for Integer<T> {
    fn from_i64(n: i64) -> Option<Integer<T>> {
        Integer::from_i128(n as i128)
    }

    fn from_u64(n: u64) -> Option<Integer<T>> {
        Integer::from_u128(n as u128)
    }

    fn from_i128(n: i128) -> Option<Integer<T>> {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        T::checked_from_u128(n.unsigned_abs()).map(|m| Integer::from_parts(sign, m))
    }

    fn from_u128(n: u128) -> Option<Integer<T>> {
        T::checked_from_u128(n).map(|m| Integer::from_parts(Sign::Positive, m))
    }
}

impl<T: FixedUnsigned> Zero for Integer<T> {
    fn zero() -> Integer<T> {
        Integer::ZERO
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl<T: FixedUnsigned> One for Integer<T> {
    fn one() -> Integer<T> {
        Integer::from_parts(Sign::Positive, T::ONE)
    }
}

impl<T: FixedUnsigned> Num for Integer<T> {
    type FromStrRadixErr = ParseNumberError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Integer<T>, ParseNumberError> {
        Integer::from_string(src, StringBase::try_from(radix)?)
    }
}

impl<T: FixedUnsigned> Signed for Integer<T> {
    fn abs(&self) -> Integer<T> {
        self.unary_plus()
    }

    fn abs_sub(&self, other: &Integer<T>) -> Integer<T> {
        if self <= other {
            Integer::ZERO
        } else {
            self.wrapping_sub(other)
        }
    }

    fn signum(&self) -> Integer<T> {
        if self.is_zero() {
            Integer::ZERO
        } else {
            Integer::from_parts(self.sign, T::ONE)
        }
    }

    fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.magnitude.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }
}

impl<T: FixedUnsigned> FromStr for Integer<T> {
    type Err = ParseNumberError;

    fn from_str(src: &str) -> Result<Integer<T>, ParseNumberError> {
        Integer::from_string(src, StringBase::Decimal)
    }
}

macro_rules! impl_fmt {
    ($($trait:ident => $base:ident, $prefix:expr;)*) => {
        $(
            impl<T: FixedUnsigned> fmt::$trait for Integer<T> {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    let digits = self.magnitude.to_string_radix(StringBase::$base);
                    f.pad_integral(!self.is_negative(), $prefix, &digits)
                }
            }
        )*
    }
}

impl_fmt! {
    Display => Decimal, "";
    Octal => Octal, "0o";
    LowerHex => Hexadecimal, "0x";
    Binary => Binary, "0b";
}

impl<T: FixedUnsigned> fmt::UpperHex for Integer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.magnitude.to_string_radix(StringBase::Hexadecimal).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}
