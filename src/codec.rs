//! Character-level pieces of the text conversions.
//!
//! The conversions themselves live on the number types (`to_string_radix`,
//! `from_string`); this module only maps between characters and digit values.

use log::debug;

use crate::error::ParseNumberError;


/// The base of a string representing a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringBase {
    Binary = 2,
    Octal = 8,
    #[default]
    Decimal = 10,
    Hexadecimal = 16,
}

impl StringBase {
    #[inline]
    pub const fn radix(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for StringBase {
    type Error = ParseNumberError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(StringBase::Binary),
            8 => Ok(StringBase::Octal),
            10 => Ok(StringBase::Decimal),
            16 => Ok(StringBase::Hexadecimal),
            _ => Err(ParseNumberError::UnsupportedRadix(radix)),
        }
    }
}

/// Decodes one character, case-insensitively, into a value below `base`.
pub fn decode_digit(c: char, base: StringBase) -> Result<u8, ParseNumberError> {
    let value = match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(10 + (c as u8 - b'a')),
        'A'..='F' => Some(10 + (c as u8 - b'A')),
        _ => None,
    };
    match value {
        Some(v) if u32::from(v) < base.radix() => Ok(v),
        _ => {
            debug!("rejecting {:?} as a base {} digit", c, base.radix());
            Err(ParseNumberError::InvalidDigit { digit: c, base: base.radix() })
        }
    }
}

/// Maps a value in `0..16` to its lowercase character.
#[inline]
pub fn encode_digit(value: u8) -> char {
    debug_assert!(value < 16);
    if value <= 9 {
        (b'0' + value) as char
    } else {
        (b'a' + (value - 10)) as char
    }
}
