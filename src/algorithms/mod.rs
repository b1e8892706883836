//! Digit-slice algorithms shared by every number type.
//!
//! Slices hold digits most significant first, exactly like the arrays inside the
//! number types. The helpers address digits by *power* instead (`B^power`), which
//! lets operands of different widths be combined: reading past the end yields zero
//! and writing past the end is dropped.

use core::cmp::Ordering;

use crate::digit::FullOps;

mod add;
mod div;
mod mul;

pub use self::add::{add, sub, sub_assign};
pub use self::div::{div_rem, div_rem_small, Scratch};
pub use self::mul::{mul, mul_small};

/// The digit of weight `B^power`, or zero past the end.
#[inline]
pub fn get<D: FullOps>(digits: &[D], power: usize) -> D {
    let len = digits.len();
    if power < len { digits[len - 1 - power] } else { D::ZERO }
}

/// Stores `value` at weight `B^power`. Out of range powers are ignored.
#[inline]
pub fn put<D: FullOps>(digits: &mut [D], power: usize, value: D) {
    let len = digits.len();
    if power < len {
        digits[len - 1 - power] = value;
    }
}

/// Number of digits up to and including the highest nonzero one.
pub fn significant_len<D: FullOps>(digits: &[D]) -> usize {
    digits.len() - digits.iter().take_while(|&&d| d == D::ZERO).count()
}

pub fn is_zero<D: FullOps>(digits: &[D]) -> bool {
    digits.iter().all(|&d| d == D::ZERO)
}

pub fn is_one<D: FullOps>(digits: &[D]) -> bool {
    significant_len(digits) == 1 && get(digits, 0) == D::ONE
}

/// Numeric comparison of two digit strings, which may differ in width.
pub fn cmp<D: FullOps>(a: &[D], b: &[D]) -> Ordering {
    let width = a.len().max(b.len());
    (0..width)
        .rev()
        .map(|power| get(a, power).cmp(&get(b, power)))
        .find(|&o| o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Copies `src` into `dst` by power, zero-extending or dropping high digits as needed.
pub fn resize_into<D: FullOps>(src: &[D], dst: &mut [D]) {
    for power in 0..dst.len() {
        put(dst, power, get(src, power));
    }
}
