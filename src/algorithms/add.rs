use crate::digit::FullOps;

use super::{get, put};

/// `out = a + b` over `out.len()` digits. Returns the carry out of the top digit.
pub fn add<D: FullOps>(a: &[D], b: &[D], out: &mut [D], max: D) -> bool {
    let mut carry = false;
    for power in 0..out.len() {
        let (c, v) = get(a, power).full_add(get(b, power), carry, max);
        put(out, power, v);
        carry = c;
    }
    carry
}

/// `out = a - b` over `out.len()` digits. Returns the borrow out of the top digit,
/// which is set exactly when `b > a`.
pub fn sub<D: FullOps>(a: &[D], b: &[D], out: &mut [D], max: D) -> bool {
    let mut borrow = false;
    for power in 0..out.len() {
        let (c, v) = get(a, power).full_sub(get(b, power), borrow, max);
        put(out, power, v);
        borrow = c;
    }
    borrow
}

/// `a -= b` in place.
pub fn sub_assign<D: FullOps>(a: &mut [D], b: &[D], max: D) -> bool {
    let mut borrow = false;
    for power in 0..a.len() {
        let (c, v) = get(a, power).full_sub(get(b, power), borrow, max);
        put(a, power, v);
        borrow = c;
    }
    borrow
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_carry_chain() {
        let mut out = [0u8; 3];
        assert!(!add(&[0u8, 9, 9], &[0u8, 0, 1], &mut out, 9));
        assert_eq!(out, [1, 0, 0]);
    }

    #[test]
    fn test_add_wraps() {
        let mut out = [0u8; 2];
        assert!(add(&[9u8, 9], &[0u8, 2], &mut out, 9));
        assert_eq!(out, [0, 1]);
    }

    #[test]
    fn test_sub_borrow_chain() {
        let mut out = [0u8; 3];
        assert!(!sub(&[1u8, 0, 0], &[0u8, 0, 1], &mut out, 9));
        assert_eq!(out, [0, 9, 9]);
    }

    #[test]
    fn test_sub_wraps() {
        // 3 - 5 in base 3 over two digits: 9 - 2 = 7 = 21_3
        let mut out = [0u8; 2];
        assert!(sub(&[1u8, 0], &[1u8, 2], &mut out, 2));
        assert_eq!(out, [2, 1]);
    }
}
