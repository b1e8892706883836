//! Property tests: every number type must agree with native integer arithmetic
//! reduced modulo its capacity `B^N`.

use num_traits::{AsPrimitive, Num};
use quickcheck::{quickcheck, TestResult};

use radixnum::{define_number, FixedUnsigned, Integer, StringBase, U128};

define_number!(Bin8: type=u8, n=8, max=1);
define_number!(Byte4: type=u8, n=4);
define_number!(Dec6: type=u8, n=6, max=9);
define_number!(Tern10: type=u16, n=10, max=2);
define_number!(Hept5: type=u32, n=5, max=6);
define_number!(Near3: type=u16, n=3, max=65534);
define_number!(Near32x1: type=u32, n=1, max=4294967294);
define_number!(Near32: type=u32, n=3, max=4294967280);
define_number!(Dec9: type=u8, n=9, max=9);
define_number!(Dec12: type=u32, n=12, max=9);

// Capacities are kept below 2^50 so products of two reduced values fit in u128.
macro_rules! parity_tests {
    ($($module:ident: $ty:ident, capacity=$cap:expr;)*) => {
        $(
            mod $module {
                use super::*;

                const CAP: u128 = $cap;

                fn num(v: u128) -> $ty {
                    $ty::from_u128(v % CAP)
                }

                quickcheck! {
                    fn add(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        num(a) + num(b) == num((a + b) % CAP)
                    }

                    fn sub(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        num(a) - num(b) == num((a + CAP - b) % CAP)
                    }

                    fn mul(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        num(a) * num(b) == num(a * b % CAP)
                    }

                    fn div_rem(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        if b == 0 {
                            return num(a) / num(b) == $ty::ZERO && num(a) % num(b) == $ty::ZERO;
                        }
                        num(a) / num(b) == num(a / b) && num(a) % num(b) == num(a % b)
                    }

                    fn small_divisor(a: u64, b: u8) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        if b == 0 {
                            return true;
                        }
                        num(a).div_rem(&num(b)) == (num(a / b), num(a % b))
                    }

                    fn division_identity(a: u64, b: u64) -> bool {
                        let (x, y) = (num(a as u128), num(b as u128));
                        y.is_zero() || (x / y) * y + x % y == x
                    }

                    fn commutative(a: u64, b: u64) -> bool {
                        let (x, y) = (num(a as u128), num(b as u128));
                        x + y == y + x && x * y == y * x
                    }

                    fn ordering(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        num(a).cmp(&num(b)) == a.cmp(&b)
                    }

                    fn checked(a: u64, b: u64) -> bool {
                        let (a, b) = (a as u128 % CAP, b as u128 % CAP);
                        num(a).try_add(&num(b)).is_ok() == (a + b < CAP)
                            && num(a).try_sub(&num(b)).is_ok() == (a >= b)
                            && num(a).try_mul(&num(b)).is_ok() == (a * b < CAP)
                    }

                    fn native_round_trip(a: u64) -> bool {
                        let a = a as u128 % CAP;
                        let n = num(a);
                        let low: u64 = n.as_();
                        n.checked_to_u128() == Some(a) && low == a as u64
                    }

                    fn string_round_trip(a: u64) -> TestResult {
                        let a = a as u128 % CAP;
                        if a == 0 {
                            return TestResult::discard();
                        }
                        let n = num(a);
                        let ok = n.to_string_radix(StringBase::Decimal) == a.to_string()
                            && n.to_string_radix(StringBase::Hexadecimal) == format!("{:x}", a)
                            && n.to_string_radix(StringBase::Octal) == format!("{:o}", a)
                            && n.to_string_radix(StringBase::Binary) == format!("{:b}", a)
                            && $ty::from_string(&format!("{:X}", a), StringBase::Hexadecimal) == Ok(n)
                            && $ty::from_str_radix(&format!("{:b}", a), 2) == Ok(n);
                        TestResult::from_bool(ok)
                    }
                }
            }
        )*
    }
}

parity_tests! {
    binary_counter: Bin8, capacity=1 << 8;
    byte4: Byte4, capacity=1 << 32;
    decimal: Dec6, capacity=1_000_000;
    ternary: Tern10, capacity=59_049;
    septenary: Hept5, capacity=16_807;
    near_storage_max: Near3, capacity=65_535 * 65_535 * 65_535;
    near_u32_max: Near32x1, capacity=4_294_967_295;
}

quickcheck! {
    fn u128_parity(a: u128, b: u128) -> bool {
        let (x, y) = (U128::from(a), U128::from(b));
        let division = if b == 0 {
            x / y == U128::ZERO && x % y == U128::ZERO
        } else {
            x / y == U128::from(a / b) && x % y == U128::from(a % b)
        };
        x + y == U128::from(a.wrapping_add(b))
            && x - y == U128::from(a.wrapping_sub(b))
            && x * y == U128::from(a.wrapping_mul(b))
            && x.cmp(&y) == a.cmp(&b)
            && division
    }

    fn near_u32_max_three_digits(a: u128, b: u128, k: u32) -> bool {
        const BASE: u128 = 4_294_967_281;
        const CAP: u128 = BASE * BASE * BASE;
        let (a, b) = (a % CAP, b % CAP);
        let (x, y) = (Near32::from(a), Near32::from(b));

        let low = a % (1 << 64);
        let product = Near32::from(low) * Near32::from(k) == Near32::from(low * k as u128 % CAP);
        let sum = x + y == Near32::from((a + b) % CAP) && x - y == Near32::from((a + CAP - b) % CAP);
        let digits = x.digit(0) as u128 == a % BASE && x.digit(2) as u128 == a / (BASE * BASE);

        let narrow = b % (BASE * BASE);
        let division = [b, narrow, k as u128].iter().all(|&d| {
            d == 0 || x.div_rem(&Near32::from(d)) == (Near32::from(a / d), Near32::from(a % d))
        });
        product && sum && digits && division && x.cmp(&y) == a.cmp(&b)
    }

    fn u128_divide_by_narrow(a: u128, b: u32) -> bool {
        let b = b as u128 | 1;
        let (x, y) = (U128::from(a), U128::from(b));
        x / y == U128::from(a / b) && x % y == U128::from(a % b)
    }

    fn widen_preserves_value(a: u64) -> bool {
        let narrow = Dec6::from(a);
        let wide: Dec9 = narrow.widen();
        wide == Dec9::from(a % 1_000_000) && wide.truncate::<Dec6>() == narrow
    }

    fn signed_parity(a: i32, b: i32) -> bool {
        type Int = Integer<Dec12>;
        let (x, y) = (Int::from(a), Int::from(b));
        let (a, b) = (a as i64, b as i64);
        let division = if b == 0 {
            x / y == Int::ZERO && x % y == Int::ZERO
        } else {
            x / y == Int::from(a / b) && x % y == Int::from(a % b)
        };
        x + y == Int::from(a + b)
            && x - y == Int::from(a - b)
            && x.cmp(&y) == a.cmp(&b)
            && division
    }

    fn signed_mul(a: i16, b: i16) -> bool {
        type Int = Integer<Dec12>;
        Int::from(a) * Int::from(b) == Int::from(a as i64 * b as i64)
    }

    fn signed_remainder_sign(a: i32, b: i32) -> TestResult {
        type Int = Integer<Dec12>;
        if b == 0 {
            return TestResult::discard();
        }
        let r = Int::from(a) % Int::from(b);
        TestResult::from_bool(r.is_zero() || r.is_negative() == (a < 0))
    }

    fn signed_round_trip(a: i32) -> TestResult {
        type Int = Integer<Dec12>;
        if a == 0 {
            return TestResult::discard();
        }
        let text = a.to_string();
        let x = Int::from(a);
        TestResult::from_bool(x.to_string() == text && text.parse::<Int>() == Ok(x))
    }
}

#[test]
fn binary_counter_wraps() {
    let one = Bin8::ONE;
    let mut counter = Bin8::ZERO;
    for expected in 1..=255u32 {
        counter += one;
        assert_eq!(counter.to_string_radix(StringBase::Binary), format!("{:b}", expected));
        assert_eq!(counter.to_string(), expected.to_string());
    }
    assert_eq!(counter, Bin8::MAX);
    counter += one;
    assert_eq!(counter, Bin8::ZERO);
    assert_eq!(counter.to_string(), "");
}

#[test]
fn two_digit_base_256() {
    define_number!(Base256: type=u8, n=2);

    let thousand = Base256::from(1000u16);
    assert_eq!(thousand.digits(), &[3, 232]);
    assert_eq!(thousand.digit(0), 232);
    assert_eq!(thousand.digit(1), 3);
    assert_eq!(thousand.most_significant_digit(), 2);
    assert_eq!(thousand.to_string(), "1000");
    assert_eq!(thousand / Base256::from(7u8), Base256::from(142u8));
    assert_eq!(thousand % Base256::from(7u8), Base256::from(6u8));
}

#[test]
fn parse_edge_cases() {
    assert!(Byte4::from_string("10g", StringBase::Hexadecimal).is_err());
    assert_eq!(Byte4::from_string("", StringBase::Decimal), Ok(Byte4::ZERO));
    assert_eq!(Byte4::from_string("", StringBase::Binary), Ok(Byte4::ZERO));
}

#[test]
fn division_by_zero_is_zero() {
    let x = Hept5::from(1234u16);
    assert_eq!(x / Hept5::ZERO, Hept5::ZERO);
    assert_eq!(x % Hept5::ZERO, Hept5::ZERO);
    assert_eq!(Hept5::ZERO / Hept5::ZERO, Hept5::ZERO);
}
