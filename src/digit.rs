use core::fmt;


/// Arithmetic operations required on a single digit.
///
/// Every method takes the per-digit maximum `max`, so the base is `B = max + 1`.
/// `B` itself may not fit in `Self` (a `u8` digit with `max = 255` has `B = 256`),
/// which is why the intermediate results live in a wider type.
///
/// Implemented for `u8`, `u16` and `u32`. There is no wider native type to hold
/// the products of two `u64` digits.
pub trait FullOps: Copy + Ord + Default + fmt::Debug + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// Returns `(carry', v')` such that `carry' * B + v' = self + other + carry`.
    fn full_add(self, other: Self, carry: bool, max: Self) -> (bool /* carry */, Self);

    /// Returns `(borrow', v')` such that `v' - borrow' * B = self - other - borrow`.
    fn full_sub(self, other: Self, borrow: bool, max: Self) -> (bool /* borrow */, Self);

    /// Returns `(carry', v')` such that `carry' * B + v' = self * other + other2 + carry`.
    ///
    /// `other` may exceed `max` (it is used as a small scalar factor) as long as
    /// `carry <= other`; the returned carry then never exceeds `other`.
    fn full_mul_add(self, other: Self, other2: Self, carry: Self, max: Self) -> (Self /* carry */, Self);

    /// Returns `(quo, rem)` such that `borrow * B + self = quo * other + rem`
    /// and `0 <= rem < other`.
    fn full_div_rem(self, other: Self, borrow: Self, max: Self) -> (Self /* quotient */, Self /* remainder */);

    /// Estimates one quotient digit of long division.
    ///
    /// `top` holds the three most significant digits of the current dividend window and
    /// `lead` the two leading digits of the normalized divisor. The estimate never falls
    /// below the true digit and overshoots it by at most two.
    fn trial_quotient(top: [Self; 3], lead: [Self; 2], max: Self) -> Self;

    /// The scale factor `B / (self + 1)` that lifts a leading divisor digit `self`
    /// to at least `B / 2`.
    fn normalizer(self, max: Self) -> Self;

    /// `self mod B`.
    fn reduce(self, max: Self) -> Self;

    fn to_u128(self) -> u128;

    /// Keeps the low bits of `v`, like an `as` cast.
    fn truncate_from_u128(v: u128) -> Self;
}

macro_rules! impl_full_ops {
    ($($ty:ty: mul/div($bigty:ident);)*) => (
        $(
            impl FullOps for $ty {
                const ZERO: $ty = 0;
                const ONE: $ty = 1;

                #[inline]
                fn full_add(self, other: $ty, carry: bool, max: $ty) -> (bool, $ty) {
                    // this cannot overflow, the output is between 0 and 2*B - 1
                    let base = max as $bigty + 1;
                    let v = self as $bigty + other as $bigty + carry as $bigty;
                    if v >= base {
                        (true, (v - base) as $ty)
                    } else {
                        (false, v as $ty)
                    }
                }

                #[inline]
                fn full_sub(self, other: $ty, borrow: bool, max: $ty) -> (bool, $ty) {
                    let base = max as $bigty + 1;
                    let v = (base + self as $bigty) - (other as $bigty + borrow as $bigty);
                    if v < base {
                        (true, v as $ty)
                    } else {
                        (false, (v - base) as $ty)
                    }
                }

                #[inline]
                fn full_mul_add(self, other: $ty, other2: $ty, carry: $ty, max: $ty) -> ($ty, $ty) {
                    // this cannot overflow, the output is at most B^2 - 1
                    // (or B * other when other is a scalar above max)
                    let base = max as $bigty + 1;
                    let v = (self as $bigty) * (other as $bigty) + (other2 as $bigty) +
                            (carry as $bigty);
                    ((v / base) as $ty, (v % base) as $ty)
                }

                #[inline]
                fn full_div_rem(self, other: $ty, borrow: $ty, max: $ty) -> ($ty, $ty) {
                    debug_assert!(borrow < other);
                    // this cannot overflow, the dividend is between 0 and other * B - 1
                    let base = max as $bigty + 1;
                    let lhs = (borrow as $bigty) * base + (self as $bigty);
                    let rhs = other as $bigty;
                    ((lhs / rhs) as $ty, (lhs % rhs) as $ty)
                }

                fn trial_quotient(top: [$ty; 3], lead: [$ty; 2], max: $ty) -> $ty {
                    let base = max as $bigty + 1;
                    let [u2, u1, u0] = top;
                    let [v1, v0] = lead;
                    let numerator = (u2 as $bigty) * base + (u1 as $bigty);
                    let mut qh = numerator / (v1 as $bigty);
                    let mut rh = numerator % (v1 as $bigty);

                    // qh is below B whenever the product is evaluated, so it fits.
                    while qh >= base || qh * (v0 as $bigty) > base * rh + (u0 as $bigty) {
                        qh -= 1;
                        rh += v1 as $bigty;
                        if rh >= base {
                            break;
                        }
                    }

                    if qh > max as $bigty { max } else { qh as $ty }
                }

                #[inline]
                fn normalizer(self, max: $ty) -> $ty {
                    let base = max as $bigty + 1;
                    (base / (self as $bigty + 1)) as $ty
                }

                #[inline]
                fn reduce(self, max: $ty) -> $ty {
                    if self > max {
                        ((self as $bigty) % (max as $bigty + 1)) as $ty
                    } else {
                        self
                    }
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn truncate_from_u128(v: u128) -> $ty {
                    v as $ty
                }
            }
        )*
    )
}

impl_full_ops! {
    u8:  mul/div(u16);
    u16: mul/div(u32);
    u32: mul/div(u64);
//  u64: mul/div(u128); // the division estimate would need a u256 intermediate.
}
