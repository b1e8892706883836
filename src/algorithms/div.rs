use core::cmp::Ordering;

use log::trace;

use crate::digit::FullOps;
use crate::error::ArithmeticError;

use super::{cmp, get, is_one, is_zero, mul_small, put, resize_into, significant_len, sub_assign};

/// Working space for [`div_rem`]. Every slice must be one digit wider than the operands,
/// so that normalization can never overflow.
pub struct Scratch<'a, D> {
    pub num: &'a mut [D],
    pub den: &'a mut [D],
    pub window: &'a mut [D],
    pub trial: &'a mut [D],
}

/// Divides `a` in place by a small value and returns the remainder.
///
/// `k` must be nonzero but need not be a valid digit (see [`FullOps::full_div_rem`]).
pub fn div_rem_small<D: FullOps>(a: &mut [D], k: D, max: D) -> D {
    debug_assert!(k != D::ZERO);
    let mut borrow = D::ZERO;
    for power in (0..a.len()).rev() {
        let (q, r) = get(a, power).full_div_rem(k, borrow, max);
        put(a, power, q);
        borrow = r;
    }
    borrow
}

/// Long division `u = q * v + r`, Knuth's Algorithm D.
///
/// `u`, `v`, `q` and `r` share one width `N`, every scratch slice is `N + 1` digits.
/// `q` and `r` are zeroed when `v` is zero and the error is returned.
pub fn div_rem<D: FullOps>(
    u: &[D],
    v: &[D],
    q: &mut [D],
    r: &mut [D],
    scratch: Scratch<'_, D>,
    max: D,
) -> Result<(), ArithmeticError> {
    let Scratch { num, den, window, trial } = scratch;
    debug_assert!(num.len() > u.len() && den.len() == num.len());
    debug_assert!(window.len() == num.len() && trial.len() == num.len());

    for d in q.iter_mut().chain(r.iter_mut()) {
        *d = D::ZERO;
    }

    if is_zero(v) {
        return Err(ArithmeticError::DivisionByZero);
    }
    if is_zero(u) {
        return Ok(());
    }
    match cmp(v, u) {
        Ordering::Greater => {
            resize_into(u, r);
            return Ok(());
        }
        Ordering::Equal => {
            put(q, 0, D::ONE);
            return Ok(());
        }
        Ordering::Less => {}
    }
    if is_one(v) {
        resize_into(u, q);
        return Ok(());
    }
    // From here on 1 < v < u.

    // Scale both operands so the leading divisor digit is at least B / 2.
    let norm = get(v, significant_len(v) - 1).normalizer(max);
    resize_into(u, num);
    resize_into(v, den);
    mul_small(num, norm, max);
    mul_small(den, norm, max);
    trace!("div_rem: normalization factor {:?}", norm);

    let n = significant_len(den);
    let m = significant_len(num) - n;
    let v1 = get(den, n - 1);
    let v0 = if n >= 2 { get(den, n - 2) } else { D::ZERO };

    for j in (0..=m).rev() {
        let u0 = if j + n >= 2 { get(num, j + n - 2) } else { D::ZERO };
        let top = [get(num, j + n), get(num, j + n - 1), u0];
        let mut qh = D::trial_quotient(top, [v1, v0], max);

        // The n + 1 digits of the dividend currently being divided.
        for d in window.iter_mut() {
            *d = D::ZERO;
        }
        for i in 0..=n {
            put(window, i, get(num, i + j));
        }

        loop {
            resize_into(den, trial);
            mul_small(trial, qh, max);
            if cmp(window, trial) != Ordering::Less {
                break;
            }
            qh = qh.full_sub(D::ONE, false, max).1;
        }

        sub_assign(window, trial, max);
        put(q, j, qh);
        for i in 0..=n {
            put(num, i + j, get(window, i));
        }
        trace!("div_rem: quotient digit {:?} at power {}", qh, j);
    }

    // What is left of the dividend is the remainder, still scaled by `norm`.
    let rest = div_rem_small(num, norm, max);
    debug_assert!(rest == D::ZERO);
    resize_into(num, r);

    Ok(())
}
