use log::debug;
use thiserror::Error;


/// Failures reported by the checked (`try_*`) arithmetic.
///
/// The plain operators never produce these. They wrap, or return zero on division by zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    #[error("overflow: result does not fit in the fixed width")]
    Overflow,

    #[error("underflow: result is negative")]
    Underflow,

    #[error("division by zero")]
    DivisionByZero,
}

impl ArithmeticError {
    /// Logs the failed operation and passes the error through.
    #[doc(hidden)]
    pub fn report(self, operation: &str, type_name: &str) -> Self {
        debug!("{} on {} failed: {}", operation, type_name, self);
        self
    }
}

/// Failures reported when parsing a number from text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseNumberError {
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("unsupported radix {0}, expected 2, 8, 10 or 16")]
    UnsupportedRadix(u32),
}
