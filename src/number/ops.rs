//! Arithmetic for the types made by `define_number!`.

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_engine_ops {
    ($name:ident, type=$ty:ty, n=$n:expr) => (
        impl $name {
            /// Digit-wise sum, wrapping modulo `B^N`.
            pub fn wrapping_add(&self, other: &$name) -> $name {
                self.overflowing_add(other).0
            }

            /// Digit-wise difference, wrapping modulo `B^N` when `other > self`.
            pub fn wrapping_sub(&self, other: &$name) -> $name {
                self.overflowing_sub(other).0
            }

            /// Schoolbook product, keeping the low `N` digits.
            pub fn wrapping_mul(&self, other: &$name) -> $name {
                self.overflowing_mul(other).0
            }

            /// Quotient of long division. Division by zero yields zero.
            pub fn divide(&self, other: &$name) -> $name {
                self.div_rem(other).0
            }

            /// Remainder of long division. Division by zero yields zero.
            pub fn modulus(&self, other: &$name) -> $name {
                self.div_rem(other).1
            }

            /// Quotient and remainder together. Division by zero yields `(0, 0)`.
            pub fn div_rem(&self, other: &$name) -> ($name, $name) {
                self.long_division(other).unwrap_or(($name::ZERO, $name::ZERO))
            }

            /// Numeric comparison, the same as [`Ord::cmp`].
            #[inline]
            pub fn compare(&self, other: &$name) -> ::core::cmp::Ordering {
                self.digits.cmp(&other.digits)
            }

            pub fn overflowing_add(&self, other: &$name) -> ($name, bool) {
                let mut out = $name::ZERO;
                let carry = $crate::algorithms::add(
                    &self.digits, &other.digits, &mut out.digits, $name::DIGIT_MAX,
                );
                (out, carry)
            }

            pub fn overflowing_sub(&self, other: &$name) -> ($name, bool) {
                let mut out = $name::ZERO;
                let borrow = $crate::algorithms::sub(
                    &self.digits, &other.digits, &mut out.digits, $name::DIGIT_MAX,
                );
                (out, borrow)
            }

            pub fn overflowing_mul(&self, other: &$name) -> ($name, bool) {
                let mut out = $name::ZERO;
                let overflow = $crate::algorithms::mul(
                    &self.digits, &other.digits, &mut out.digits, $name::DIGIT_MAX,
                );
                (out, overflow)
            }

            pub fn try_add(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                match self.overflowing_add(other) {
                    (_, true) => Err($crate::ArithmeticError::Overflow.report("try_add", stringify!($name))),
                    (sum, false) => Ok(sum),
                }
            }

            pub fn try_sub(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                match self.overflowing_sub(other) {
                    (_, true) => Err($crate::ArithmeticError::Underflow.report("try_sub", stringify!($name))),
                    (difference, false) => Ok(difference),
                }
            }

            pub fn try_mul(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                match self.overflowing_mul(other) {
                    (_, true) => Err($crate::ArithmeticError::Overflow.report("try_mul", stringify!($name))),
                    (product, false) => Ok(product),
                }
            }

            pub fn try_div(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                self.try_div_rem(other).map(|(q, _)| q)
            }

            pub fn try_rem(&self, other: &$name) -> Result<$name, $crate::ArithmeticError> {
                self.try_div_rem(other).map(|(_, r)| r)
            }

            /// Long division (Knuth's Algorithm D) that reports a zero divisor.
            pub fn try_div_rem(&self, other: &$name) -> Result<($name, $name), $crate::ArithmeticError> {
                self.long_division(other)
                    .map_err(|e| e.report("try_div_rem", stringify!($name)))
            }

            // Logs nothing; try_div_rem does the reporting.
            fn long_division(&self, other: &$name) -> Result<($name, $name), $crate::ArithmeticError> {
                // Normalization may need one more digit than the operands have.
                let mut num: [$ty; $n + 1] = [0; $n + 1];
                let mut den: [$ty; $n + 1] = [0; $n + 1];
                let mut window: [$ty; $n + 1] = [0; $n + 1];
                let mut trial: [$ty; $n + 1] = [0; $n + 1];
                let scratch = $crate::algorithms::Scratch {
                    num: &mut num,
                    den: &mut den,
                    window: &mut window,
                    trial: &mut trial,
                };

                let mut q = $name::ZERO;
                let mut r = $name::ZERO;
                $crate::algorithms::div_rem(
                    &self.digits, &other.digits, &mut q.digits, &mut r.digits, scratch, $name::DIGIT_MAX,
                )?;
                Ok((q, r))
            }

            /// `self^exponent` by square-and-multiply, wrapping modulo `B^N`.
            ///
            /// The exponent is halved with this type's own division, so every step
            /// costs a long division.
            pub fn pow(&self, exponent: $name) -> $name {
                let two = $name::from(2u8);
                if two.is_zero() {
                    // B^N == 2, so the exponent is either 0 or 1.
                    return if exponent.is_zero() { $name::ONE } else { *self };
                }

                let mut result = $name::ONE;
                let mut base = *self;
                let mut exponent = exponent;
                while !exponent.is_zero() {
                    if !exponent.modulus(&two).is_zero() {
                        result = result.wrapping_mul(&base);
                    }
                    exponent = exponent.divide(&two);
                    base = base.wrapping_mul(&base);
                }
                result
            }

            /// Like [`pow`](Self::pow), but reports overflow.
            pub fn try_pow(&self, exponent: $name) -> Result<$name, $crate::ArithmeticError> {
                let two = $name::from(2u8);
                if two.is_zero() {
                    return Ok(if exponent.is_zero() { $name::ONE } else { *self });
                }

                let mut result = $name::ONE;
                let mut base = *self;
                let mut exponent = exponent;
                while !exponent.is_zero() {
                    if !exponent.modulus(&two).is_zero() {
                        result = result.try_mul(&base)?;
                    }
                    exponent = exponent.divide(&two);
                    if !exponent.is_zero() {
                        base = base.try_mul(&base)?;
                    }
                }
                Ok(result)
            }
        }

        impl ::core::ops::Add<$name> for $name {
            type Output = $name;

            fn add(self, other: $name) -> $name {
                self.wrapping_add(&other)
            }
        }

        impl ::core::ops::AddAssign<$name> for $name {
            fn add_assign(&mut self, other: $name) {
                *self = self.wrapping_add(&other);
            }
        }

        impl ::core::ops::Sub<$name> for $name {
            type Output = $name;

            fn sub(self, other: $name) -> $name {
                self.wrapping_sub(&other)
            }
        }

        impl ::core::ops::SubAssign<$name> for $name {
            fn sub_assign(&mut self, other: $name) {
                *self = self.wrapping_sub(&other);
            }
        }

        impl ::core::ops::Mul<$name> for $name {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                self.wrapping_mul(&rhs)
            }
        }

        impl ::core::ops::MulAssign<$name> for $name {
            fn mul_assign(&mut self, rhs: $name) {
                *self = self.wrapping_mul(&rhs);
            }
        }

        impl ::core::ops::Div<$name> for $name {
            type Output = $name;

            fn div(self, other: $name) -> $name {
                self.divide(&other)
            }
        }

        impl ::core::ops::DivAssign<$name> for $name {
            fn div_assign(&mut self, other: $name) {
                *self = self.divide(&other);
            }
        }

        impl ::core::ops::Rem<$name> for $name {
            type Output = $name;

            fn rem(self, other: $name) -> $name {
                self.modulus(&other)
            }
        }

        impl ::core::ops::RemAssign<$name> for $name {
            fn rem_assign(&mut self, other: $name) {
                *self = self.modulus(&other);
            }
        }
    )
}
