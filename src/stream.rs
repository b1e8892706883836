//! Stream-style token input and formatted output.
//!
//! A thin layer over the text codec for callers that read whitespace separated
//! numbers and write them back under a sticky format, the way an I/O stream
//! with `hex`/`oct`/`showpos` manipulators would.

use core::fmt;

use num_traits::Num;

use crate::codec::StringBase;
use crate::error::ParseNumberError;
use crate::integer::Integer;
use crate::number::FixedUnsigned;


/// Which base the stream reads and writes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseField {
    Oct,
    Dec,
    Hex,
    /// No base selected, treated as decimal.
    #[default]
    Unset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StreamFormat {
    pub basefield: BaseField,
    /// Prefix non-negative values with `+`.
    pub show_pos: bool,
}

impl StreamFormat {
    pub fn string_base(&self) -> StringBase {
        match self.basefield {
            BaseField::Oct => StringBase::Octal,
            BaseField::Hex => StringBase::Hexadecimal,
            BaseField::Dec | BaseField::Unset => StringBase::Decimal,
        }
    }
}

/// Splits text into whitespace separated tokens and parses them as numbers.
///
/// ```
/// use radixnum::stream::{BaseField, StreamFormat, TokenReader};
/// use radixnum::{I128, U128};
///
/// let mut reader = TokenReader::new("ff -10");
/// reader.set_format(StreamFormat { basefield: BaseField::Hex, show_pos: false });
/// assert_eq!(reader.read::<U128>(), Some(Ok(U128::from(255u8))));
/// assert_eq!(reader.read::<I128>(), Some(Ok(I128::from(-16))));
/// assert_eq!(reader.read::<U128>(), None);
/// ```
#[derive(Debug, Clone)]
pub struct TokenReader<'a> {
    rest: &'a str,
    format: StreamFormat,
}

impl<'a> TokenReader<'a> {
    pub fn new(text: &'a str) -> TokenReader<'a> {
        TokenReader { rest: text, format: StreamFormat::default() }
    }

    pub fn format(&self) -> StreamFormat {
        self.format
    }

    pub fn set_format(&mut self, format: StreamFormat) {
        self.format = format;
    }

    /// The unread remainder of the input.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Parses the next token in the current base.
    ///
    /// `None` once the input holds nothing but whitespace. A malformed token is
    /// still consumed, so reading can carry on after an error.
    pub fn read<T>(&mut self) -> Option<Result<T, ParseNumberError>>
    where
        T: Num<FromStrRadixErr = ParseNumberError>,
    {
        let text = self.rest.trim_start();
        if text.is_empty() {
            self.rest = text;
            return None;
        }

        let end = text.find(char::is_whitespace).unwrap_or(text.len());
        let (token, rest) = text.split_at(end);
        self.rest = rest;

        Some(T::from_str_radix(token, self.format.string_base().radix()))
    }
}

/// A value that [`write_value`] can emit.
///
/// Only signed values honour `show_pos`. Unsigned values are written as plain
/// digit strings, which a `+` flag does not touch.
pub trait StreamValue: fmt::Display + fmt::Octal + fmt::LowerHex {
    const SIGNED: bool;
}

impl<T: FixedUnsigned> StreamValue for Integer<T> {
    const SIGNED: bool = true;
}

/// Writes `value` in the base selected by `format`. Non-negative signed values
/// get a leading `+` when `show_pos` is set.
pub fn write_value<W, T>(out: &mut W, value: &T, format: StreamFormat) -> fmt::Result
where
    W: fmt::Write,
    T: StreamValue,
{
    match (format.string_base(), format.show_pos && T::SIGNED) {
        (StringBase::Octal, false) => write!(out, "{:o}", value),
        (StringBase::Octal, true) => write!(out, "{:+o}", value),
        (StringBase::Hexadecimal, false) => write!(out, "{:x}", value),
        (StringBase::Hexadecimal, true) => write!(out, "{:+x}", value),
        (_, false) => write!(out, "{}", value),
        (_, true) => write!(out, "{:+}", value),
    }
}


#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    crate::define_number!(Byte2: type=u8, n=2);
    crate::define_number!(Dec4: type=u16, n=4, max=9);

    type Int = Integer<Dec4>;

    #[test]
    fn test_read_tokens() {
        let mut reader = TokenReader::new("  12 \n 300\t7  ");
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(12u8))));
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(300u16))));
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(7u8))));
        assert_eq!(reader.read::<Byte2>(), None);
        assert_eq!(reader.remaining(), "");
    }

    #[test]
    fn test_read_in_base() {
        let mut reader = TokenReader::new("17 ff");
        reader.set_format(StreamFormat { basefield: BaseField::Oct, show_pos: false });
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(15u8))));
        reader.set_format(StreamFormat { basefield: BaseField::Hex, show_pos: false });
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(255u8))));
    }

    #[test]
    fn test_read_signed() {
        let mut reader = TokenReader::new("-42 +7 -0");
        assert_eq!(reader.read::<Int>(), Some(Ok(Int::from(-42))));
        assert_eq!(reader.read::<Int>(), Some(Ok(Int::from(7))));
        assert_eq!(reader.read::<Int>(), Some(Ok(Int::ZERO)));
    }

    #[test]
    fn test_read_error_consumes_token() {
        let mut reader = TokenReader::new("10g 5");
        reader.set_format(StreamFormat { basefield: BaseField::Hex, show_pos: false });
        assert_eq!(
            reader.read::<Byte2>(),
            Some(Err(ParseNumberError::InvalidDigit { digit: 'g', base: 16 }))
        );
        assert_eq!(reader.read::<Byte2>(), Some(Ok(Byte2::from(5u8))));
    }

    #[test]
    fn test_write_value() {
        let formats = [
            (StreamFormat::default(), "1000"),
            (StreamFormat { basefield: BaseField::Dec, show_pos: true }, "1000"),
            (StreamFormat { basefield: BaseField::Hex, show_pos: false }, "3e8"),
            (StreamFormat { basefield: BaseField::Oct, show_pos: true }, "1750"),
        ];
        for (format, expected) in formats.iter() {
            let mut out = String::new();
            write_value(&mut out, &Byte2::from(1000u16), *format).unwrap();
            assert_eq!(out, *expected);
        }
    }

    #[test]
    fn test_show_pos_skips_unsigned() {
        let format = StreamFormat { basefield: BaseField::Dec, show_pos: true };
        let mut out = String::new();
        write_value(&mut out, &crate::U128::from(1000u32), format).unwrap();
        out.push(' ');
        write_value(&mut out, &Int::from(1000), format).unwrap();
        out.push(' ');
        write_value(&mut out, &Int::from(-1000), format).unwrap();
        assert_eq!(out, "1000 +1000 -1000");
    }

    #[test]
    fn test_write_signed() {
        let mut out = String::new();
        let format = StreamFormat { basefield: BaseField::Hex, show_pos: true };
        write_value(&mut out, &Int::from(-255), format).unwrap();
        out.push(' ');
        write_value(&mut out, &Int::from(255), format).unwrap();
        assert_eq!(out, "-ff +ff");
    }
}
