//! Text conversion and `core::fmt` support for the types made by `define_number!`.

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_codec_fmt {
    ($name:ident, type=$ty:ty, n=$n:expr) => (
        impl $name {
            /// Renders the number in `base`, lowercase, without prefix.
            ///
            /// Zero renders as the empty string.
            pub fn to_string_radix(&self, base: $crate::StringBase) -> $crate::__private::String {
                let radix = <$ty as $crate::FullOps>::truncate_from_u128(base.radix() as u128);
                let mut rest = *self;
                let mut reversed = $crate::__private::String::new();

                while !rest.is_zero() {
                    let d = $crate::algorithms::div_rem_small(&mut rest.digits, radix, $name::DIGIT_MAX);
                    reversed.push($crate::codec::encode_digit($crate::FullOps::to_u128(d) as u8));
                }

                reversed.chars().rev().collect()
            }

            /// Parses `text` in `base`. The whole string must be made of valid digits;
            /// there is no sign and no whitespace trimming. The empty string is zero.
            /// Values beyond the width wrap modulo `B^N`.
            pub fn from_string(text: &str, base: $crate::StringBase) -> Result<$name, $crate::ParseNumberError> {
                let radix = <$ty as $crate::FullOps>::truncate_from_u128(base.radix() as u128);
                let mut result = $name::ZERO;

                for c in text.chars() {
                    let value = $crate::codec::decode_digit(c, base)?;
                    $crate::algorithms::mul_small(&mut result.digits, radix, $name::DIGIT_MAX);
                    result = result.wrapping_add(&$name::from(value));
                }

                Ok(result)
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> $name {
                $name::ZERO
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseNumberError;

            fn from_str(src: &str) -> Result<$name, $crate::ParseNumberError> {
                $name::from_string(src, $crate::StringBase::Decimal)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                write!(f, "{} {{ digits: {:?} }}", stringify!($name), &self.digits[..])
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.pad_integral(true, "", &self.to_string_radix($crate::StringBase::Decimal))
            }
        }

        impl ::core::fmt::Octal for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.pad_integral(true, "0o", &self.to_string_radix($crate::StringBase::Octal))
            }
        }

        impl ::core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.pad_integral(true, "0x", &self.to_string_radix($crate::StringBase::Hexadecimal))
            }
        }

        impl ::core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                let s = self.to_string_radix($crate::StringBase::Hexadecimal).to_ascii_uppercase();
                f.pad_integral(true, "0x", &s)
            }
        }

        impl ::core::fmt::Binary for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                f.pad_integral(true, "0b", &self.to_string_radix($crate::StringBase::Binary))
            }
        }

        impl $crate::stream::StreamValue for $name {
            const SIGNED: bool = false;
        }
    )
}
