//! Native integer conversions and `num_traits` support for the types made by `define_number!`.

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_convert {
    ($name:ident, type=$ty:ty, n=$n:expr) => (
        impl $name {
            /// Base-`B` decomposition of `value`, dropping whatever does not fit.
            pub fn from_u128(value: u128) -> $name {
                $name::overflowing_from_u128(value).0
            }

            /// `None` when `value` does not fit in the width.
            pub fn checked_from_u128(value: u128) -> Option<$name> {
                match $name::overflowing_from_u128(value) {
                    (v, false) => Some(v),
                    (_, true) => None,
                }
            }

            fn overflowing_from_u128(mut value: u128) -> ($name, bool) {
                let base = $crate::FullOps::to_u128($name::DIGIT_MAX) + 1;
                let mut out = $name::ZERO;
                for power in 0..$n {
                    if value == 0 {
                        break;
                    }
                    let d = <$ty as $crate::FullOps>::truncate_from_u128(value % base);
                    $crate::algorithms::put(&mut out.digits, power, d);
                    value /= base;
                }
                (out, value != 0)
            }

            /// The value modulo `2^128`.
            pub fn wrapping_to_u128(&self) -> u128 {
                let base = $crate::FullOps::to_u128($name::DIGIT_MAX) + 1;
                self.digits.iter().fold(0u128, |acc, &d| {
                    acc.wrapping_mul(base).wrapping_add($crate::FullOps::to_u128(d))
                })
            }

            /// `None` when the value exceeds `u128::MAX`.
            pub fn checked_to_u128(&self) -> Option<u128> {
                let base = $crate::FullOps::to_u128($name::DIGIT_MAX) + 1;
                self.digits.iter().try_fold(0u128, |acc, &d| {
                    acc.checked_mul(base)?.checked_add($crate::FullOps::to_u128(d))
                })
            }
        }

        $crate::__impl_from_primitive!($name: u8, u16, u32, u64, u128, usize);
        $crate::__impl_as_primitive!($name: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

        impl $crate::num_traits::ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                self.checked_to_u128().and_then(|v| <i64 as ::core::convert::TryFrom<u128>>::try_from(v).ok())
            }

            fn to_u64(&self) -> Option<u64> {
                self.checked_to_u128().and_then(|v| <u64 as ::core::convert::TryFrom<u128>>::try_from(v).ok())
            }

            fn to_i128(&self) -> Option<i128> {
                self.checked_to_u128().and_then(|v| <i128 as ::core::convert::TryFrom<u128>>::try_from(v).ok())
            }

            fn to_u128(&self) -> Option<u128> {
                self.checked_to_u128()
            }
        }

        impl $crate::num_traits::FromPrimitive for $name {
            fn from_i64(n: i64) -> Option<$name> {
                <u128 as ::core::convert::TryFrom<i64>>::try_from(n).ok().and_then($name::checked_from_u128)
            }

            fn from_u64(n: u64) -> Option<$name> {
                $name::checked_from_u128(n as u128)
            }

            fn from_u128(n: u128) -> Option<$name> {
                $name::checked_from_u128(n)
            }
        }

        impl $crate::num_traits::Zero for $name {
            fn zero() -> $name {
                $name::ZERO
            }

            fn is_zero(&self) -> bool {
                $name::is_zero(self)
            }
        }

        impl $crate::num_traits::One for $name {
            fn one() -> $name {
                $name::ONE
            }
        }

        impl $crate::num_traits::Bounded for $name {
            fn min_value() -> $name {
                $name::ZERO
            }

            fn max_value() -> $name {
                $name::MAX
            }
        }

        impl $crate::num_traits::Num for $name {
            type FromStrRadixErr = $crate::ParseNumberError;

            fn from_str_radix(src: &str, radix: u32) -> Result<$name, $crate::ParseNumberError> {
                let base = <$crate::StringBase as ::core::convert::TryFrom<u32>>::try_from(radix)?;
                $name::from_string(src, base)
            }
        }

        impl $crate::num_traits::Unsigned for $name {}

        impl $crate::num_traits::CheckedAdd for $name {
            fn checked_add(&self, v: &$name) -> Option<$name> {
                self.try_add(v).ok()
            }
        }

        impl $crate::num_traits::CheckedSub for $name {
            fn checked_sub(&self, v: &$name) -> Option<$name> {
                self.try_sub(v).ok()
            }
        }

        impl $crate::num_traits::CheckedMul for $name {
            fn checked_mul(&self, v: &$name) -> Option<$name> {
                self.try_mul(v).ok()
            }
        }

        impl $crate::num_traits::CheckedDiv for $name {
            fn checked_div(&self, v: &$name) -> Option<$name> {
                self.try_div(v).ok()
            }
        }

        impl $crate::num_traits::CheckedRem for $name {
            fn checked_rem(&self, v: &$name) -> Option<$name> {
                self.try_rem(v).ok()
            }
        }

        impl $crate::num_traits::WrappingAdd for $name {
            fn wrapping_add(&self, v: &$name) -> $name {
                $name::wrapping_add(self, v)
            }
        }

        impl $crate::num_traits::WrappingSub for $name {
            fn wrapping_sub(&self, v: &$name) -> $name {
                $name::wrapping_sub(self, v)
            }
        }

        impl $crate::num_traits::WrappingMul for $name {
            fn wrapping_mul(&self, v: &$name) -> $name {
                $name::wrapping_mul(self, v)
            }
        }

        impl $crate::FixedUnsigned for $name {
            type Digit = $ty;

            const NUM_DIGITS: usize = $n;
            const DIGIT_MAX: $ty = $name::DIGIT_MAX;
            const ZERO: $name = $name::ZERO;
            const ONE: $name = $name::ONE;
            const MAX: $name = $name::MAX;

            fn digit(&self, power: usize) -> $ty {
                $name::digit(self, power)
            }

            fn set_digit(&mut self, power: usize, value: $ty) {
                $name::set_digit(self, power, value)
            }

            fn most_significant_digit(&self) -> usize {
                $name::most_significant_digit(self)
            }

            fn digits(&self) -> &[$ty] {
                &self.digits
            }

            fn from_u128(value: u128) -> $name {
                $name::from_u128(value)
            }

            fn checked_from_u128(value: u128) -> Option<$name> {
                $name::checked_from_u128(value)
            }

            fn wrapping_to_u128(&self) -> u128 {
                $name::wrapping_to_u128(self)
            }

            fn checked_to_u128(&self) -> Option<u128> {
                $name::checked_to_u128(self)
            }

            fn try_add(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                $name::try_add(self, other)
            }

            fn try_sub(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                $name::try_sub(self, other)
            }

            fn try_mul(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                $name::try_mul(self, other)
            }

            fn try_div(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                $name::try_div(self, other)
            }

            fn try_rem(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                $name::try_rem(self, other)
            }

            fn to_string_radix(&self, base: $crate::StringBase) -> $crate::__private::String {
                $name::to_string_radix(self, base)
            }

            fn from_string(text: &str, base: $crate::StringBase) -> Result<$name, $crate::ParseNumberError> {
                $name::from_string(text, base)
            }
        }
    )
}

// Conversions from primitive unsigned types, decomposing into base-B digits.
// Anything above B^N is dropped, the same wraparound as the arithmetic.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_from_primitive {
    ($name:ident: $($small:ty),*) => {
        $(
            impl ::core::convert::From<$small> for $name {
                #[inline]
                fn from(small: $small) -> $name {
                    $name::from_u128(small as u128)
                }
            }
        )*
    }
}

// Truncating conversions back to primitives, like an `as` cast.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_as_primitive {
    ($name:ident: $($prim:ty),*) => {
        $(
            impl $crate::num_traits::AsPrimitive<$prim> for $name {
                #[inline]
                fn as_(self) -> $prim {
                    self.wrapping_to_u128() as $prim
                }
            }
        )*
    }
}


#[cfg(test)]
mod tests {
    use num_traits::{AsPrimitive, Bounded, CheckedAdd, CheckedDiv, FromPrimitive, Num, ToPrimitive};

    use crate::{FixedUnsigned, ParseNumberError};

    crate::define_number!(Byte2: type=u8, n=2);
    crate::define_number!(Byte4: type=u8, n=4);
    crate::define_number!(Dec5: type=u32, n=5, max=9);
    crate::define_number!(Dec2: type=u32, n=2, max=9);
    crate::define_number!(Hept40: type=u16, n=40, max=6);

    #[test]
    fn test_from_native() {
        assert_eq!(Dec5::from(12345u16).digits(), &[1, 2, 3, 4, 5]);
        assert_eq!(Dec5::from(7u8).digits(), &[0, 0, 0, 0, 7]);
        // high digits are dropped
        assert_eq!(Dec5::from(1_234_567u32).digits(), &[3, 4, 5, 6, 7]);
        assert_eq!(Byte2::from(0x1_2345u32), Byte2::from(0x2345u16));
    }

    #[test]
    fn test_from_digits_reduces() {
        assert_eq!(Dec2::from_digits([12, 3]).digits(), &[2, 3]);
    }

    #[test]
    fn test_digit_access() {
        let mut v = Dec5::from(12345u16);
        assert_eq!(v.digit(0), 5);
        assert_eq!(v.digit(4), 1);
        assert_eq!(v.digit(5), 0);
        assert_eq!(v.digit(1000), 0);

        v.set_digit(0, 13);
        assert_eq!(v.digit(0), 3);
        v.set_digit(5, 9);
        assert_eq!(v, Dec5::from(12343u16));
    }

    #[test]
    fn test_most_significant_digit() {
        assert_eq!(Dec5::ZERO.most_significant_digit(), 0);
        assert_eq!(Dec5::from(7u8).most_significant_digit(), 1);
        assert_eq!(Dec5::from(305u16).most_significant_digit(), 3);
        assert_eq!(Dec5::MAX.most_significant_digit(), 5);
    }

    #[test]
    fn test_as_primitive_wraps() {
        let v = Byte4::from(0x1234_5678u32);
        let low: u16 = v.as_();
        assert_eq!(low, 0x5678);
        let signed: i8 = Byte2::from(0xffu8).as_();
        assert_eq!(signed, -1);
        // 7^40 exceeds u64, the conversion keeps the value modulo 2^64
        let big = Hept40::MAX;
        let expected = (0..40).fold(1u128, |acc, _| acc.wrapping_mul(7)).wrapping_sub(1);
        let truncated: u64 = big.as_();
        assert_eq!(truncated, expected as u64);
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(Dec5::from(99999u32).to_u64(), Some(99999));
        assert_eq!(Dec5::from(99999u32).to_u8(), None);
        assert_eq!(Hept40::MAX.to_u64(), None);
        assert_eq!(Hept40::MAX.to_u128(), Some(7u128.pow(40) - 1));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(Dec2::from_i64(-1), None);
        assert_eq!(Dec2::from_u64(100), None);
        assert_eq!(Dec2::from_u64(99), Some(Dec2::from(99u8)));
    }

    #[test]
    fn test_num_traits() {
        assert_eq!(Byte2::max_value(), Byte2::from(u16::MAX));
        assert_eq!(Byte2::from_str_radix("ffff", 16), Ok(Byte2::from(u16::MAX)));
        assert_eq!(Byte2::from_str_radix("12", 3), Err(ParseNumberError::UnsupportedRadix(3)));
        assert_eq!(Byte2::from(u16::MAX).checked_add(&Byte2::from(1u8)), None);
        assert_eq!(Byte2::from(9u8).checked_div(&Byte2::ZERO), None);
    }

    #[test]
    fn test_widen_and_truncate() {
        let narrow = Byte2::from(0xbeefu16);
        let wide: Byte4 = narrow.widen();
        assert_eq!(wide, Byte4::from(0xbeefu16));

        let wide = Byte4::from(0xdead_beefu32);
        let narrow: Byte2 = wide.truncate();
        assert_eq!(narrow, Byte2::from(0xbeefu16));
        let same: Byte4 = wide.truncate();
        assert_eq!(same, wide);
    }
}
