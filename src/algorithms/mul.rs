use crate::digit::FullOps;

use super::{get, put, significant_len};

/// Schoolbook multiplication, `out = a * b` truncated to `out.len()` digits.
///
/// Returns `true` when a nonzero digit of the full product had to be dropped.
pub fn mul<D: FullOps>(a: &[D], b: &[D], out: &mut [D], max: D) -> bool {
    for d in out.iter_mut() {
        *d = D::ZERO;
    }

    let width = out.len();
    let m = significant_len(a);
    let n = significant_len(b);
    let mut overflow = false;

    for j in 0..n {
        let bj = get(b, j);
        if bj == D::ZERO {
            continue;
        }
        let mut k = D::ZERO;
        for i in 0..m {
            let (c, v) = get(a, i).full_mul_add(bj, get(out, i + j), k, max);
            if i + j < width {
                put(out, i + j, v);
            } else {
                overflow |= v != D::ZERO;
            }
            k = c;
        }
        if j + m < width {
            put(out, j + m, k);
        } else {
            overflow |= k != D::ZERO;
        }
    }

    overflow
}

/// Multiplies `a` in place by a small factor and returns the carry out of the top digit.
///
/// `k` need not be a valid digit; see [`FullOps::full_mul_add`].
pub fn mul_small<D: FullOps>(a: &mut [D], k: D, max: D) -> D {
    let mut carry = D::ZERO;
    for power in 0..a.len() {
        let (c, v) = get(a, power).full_mul_add(k, D::ZERO, carry, max);
        put(a, power, v);
        carry = c;
    }
    carry
}
