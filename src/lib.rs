//! Fixed-width big integers over an arbitrary digit base.
//!
//! A number is `N` digits in base `B = M + 1`, where each digit is stored in a
//! `u8`, `u16` or `u32`. The base does not have to be a power of two. Types are
//! defined at compile time with [`define_number!`], live on the stack and wrap
//! modulo `B^N` like the native integers do in release builds. Division uses
//! Knuth's Algorithm D.
//!
//! ```
//! use radixnum::U128;
//!
//! let a = U128::from(u64::MAX);
//! let b = a * a;
//! assert_eq!(b.to_string(), "340282366920938463426481119284349108225");
//! assert_eq!(b / a, a);
//! ```
//!
//! [`Integer`] adds a sign on top of any of these types.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[doc(hidden)]
pub mod algorithms;
pub mod codec;
mod digit;
pub mod error;
pub mod integer;
#[macro_use]
mod number;
pub mod stream;

pub use crate::codec::StringBase;
pub use crate::digit::FullOps;
pub use crate::error::{ArithmeticError, ParseNumberError};
pub use crate::integer::{Integer, Sign};
pub use crate::number::FixedUnsigned;

pub use num_traits;

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}


define_number!(
    /// 128-bit unsigned integer, four base-2^32 digits.
    pub U128: type=u32, n=4
);
define_number!(
    /// 256-bit unsigned integer, eight base-2^32 digits.
    pub U256: type=u32, n=8
);
define_number!(
    /// 512-bit unsigned integer, sixteen base-2^32 digits.
    pub U512: type=u32, n=16
);
define_number!(
    /// 1024-bit unsigned integer, thirty-two base-2^32 digits.
    pub U1024: type=u32, n=32
);

pub type I128 = Integer<U128>;
pub type I256 = Integer<U256>;
pub type I512 = Integer<U512>;
pub type I1024 = Integer<U1024>;


#[cfg(test)]
use alloc::string::ToString;

#[test]
fn test_add() {
    let a = U128::from(1u32);
    let b = U128::from(2u32);
    let c = U128::from(3u32);
    assert_eq!(a + b, c);
    assert_eq!(U128::MAX + a, U128::ZERO);
}

#[test]
fn test_sub() {
    let a = U128::from(10u32);
    let b = U128::from(2u32);
    let c = U128::from(8u32);
    assert_eq!(a - b, c);
    assert_eq!(U128::ZERO - U128::ONE, U128::MAX);
}

#[test]
fn test_mul() {
    let a = U128::from(10u32);
    let b = U128::from(2u32);
    let c = U128::from(20u32);
    assert_eq!(a * b, c);

    let big = U128::from(0xffff_ffff_ffffu64);
    assert_eq!(big * big, U128::from(0xffff_ffff_ffffu128 * 0xffff_ffff_ffffu128));
}

#[test]
fn test_div_rem() {
    let a = U128::from(10u32);
    let b = U128::from(2u32);
    let c = U128::from(5u32);
    assert_eq!(a / b, c);
    assert_eq!(a % b, U128::from(0u32));

    let n = 0x1234_5678_9abc_def0_0fed_cba9_8765_4321u128;
    let d = 0x1_0000_0003u128;
    assert_eq!(U128::from(n) / U128::from(d), U128::from(n / d));
    assert_eq!(U128::from(n) % U128::from(d), U128::from(n % d));
}

#[test]
fn test_widths() {
    let x = U128::MAX;
    let wide: U256 = x.widen();
    assert_eq!(wide * wide + wide + wide, U256::MAX);
    assert_eq!(wide.truncate::<U128>(), x);
    assert_eq!(U1024::MAX.most_significant_digit(), 32);
    assert_eq!(U512::NUM_DIGITS, 16);
}

#[test]
fn test_signed_aliases() {
    let a = I256::from(-3i32);
    let b = I256::from(i128::MAX);
    assert_eq!((a * b).to_string(), "-510423550381407695195061911147652317181");
    assert_eq!(I128::from(-1i8).to_string_radix(StringBase::Hexadecimal), "-1");
}
