//! Truncating division.
//!
//! The quotient rounds toward zero and the remainder takes the sign of the
//! dividend, so `(a / b) * b + a % b == a` for every non-zero `b`.

use crate::error::{BigIntError, Result};
use crate::limb::Limb;
use crate::ops::{add, bitwise};
use crate::BigInt;

/// Restoring binary long division of two non-negative values, `b != 0`.
fn restoring_div<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> (BigInt<W>, BigInt<W>) {
    if a < b {
        return (BigInt::zero(), a.clone());
    }
    // a >= b here, so a has at least as many limbs as b
    let shift_limbs = a.len() - b.len() + 1;
    let diff = shift_limbs * W::BITS;
    let divisor = bitwise::shl(b, diff);

    let mut quotient = BigInt::zero();
    let mut rem = a.clone();
    for _ in 0..diff {
        quotient = bitwise::shl(&quotient, 1);
        rem = bitwise::shl(&rem, 1);
        if rem >= divisor {
            rem = add::sub(&rem, &divisor);
            quotient.increment();
        }
    }
    // drop the low `shift_limbs` limbs
    (quotient, bitwise::shr(&rem, diff))
}

impl<W: Limb> BigInt<W> {
    /// Quotient and remainder in one pass.
    ///
    /// ```
    /// use limbint::{BigInt, BigIntError};
    ///
    /// let (q, r) = BigInt::<u32>::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    ///
    /// let err = BigInt::<u32>::one().div_rem(&BigInt::zero()).unwrap_err();
    /// assert_eq!(err, BigIntError::DivisionByZero);
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let _span = tracing::trace_span!("div_rem", lhs = self.len(), rhs = divisor.len()).entered();
        if divisor.is_one() {
            return Ok((self.clone(), Self::zero()));
        }
        if divisor.is_minus_one() {
            return Ok((-self, Self::zero()));
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }

        let (lhs_neg, rhs_neg) = (self.is_negative(), divisor.is_negative());
        if !lhs_neg && !rhs_neg {
            return Ok(restoring_div(self, divisor));
        }

        let (q, r) = restoring_div(&self.abs(), &divisor.abs());
        let q = if lhs_neg != rhs_neg { -q } else { q };
        let r = if lhs_neg { -r } else { r };
        Ok((q, r))
    }

    /// Replace `self` with the quotient and return the remainder.
    ///
    /// On error `self` is left untouched.
    pub fn div_rem_assign(&mut self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        *self = q;
        Ok(r)
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

fn div<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    match a.div_rem(b) {
        Ok((q, _)) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    match a.div_rem(b) {
        Ok((_, r)) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

forward_binop!(Div, div, DivAssign, div_assign, div);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem);

#[cfg(test)]
mod tests {
    use super::*;

    fn check_identity<W: Limb>(x: i128, y: i128) {
        let (a, b) = (BigInt::<W>::from(x), BigInt::<W>::from(y));
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from(x / y), "{x} / {y}");
        assert_eq!(r, BigInt::from(x % y), "{x} % {y}");
        assert_eq!(&(&q * &b) + &r, a);
    }

    // --- Restoring core ---

    #[test]
    fn test_restoring_small() {
        let (q, r) = restoring_div(&BigInt::<u8>::from(100), &BigInt::from(7));
        assert_eq!(q, BigInt::from(14));
        assert_eq!(r, BigInt::from(2));
    }

    #[test]
    fn test_restoring_dividend_smaller() {
        let (q, r) = restoring_div(&BigInt::<u32>::from(3), &BigInt::from(1u64 << 40));
        assert!(q.is_zero());
        assert_eq!(r, BigInt::from(3));
    }

    #[test]
    fn test_restoring_exact() {
        let b = BigInt::<u16>::from(0xffff_ffffu64);
        let a = &b * &BigInt::from(0x1234_5678u32);
        let (q, r) = restoring_div(&a, &b);
        assert_eq!(q, BigInt::from(0x1234_5678u32));
        assert!(r.is_zero());
    }

    #[test]
    fn test_restoring_top_bit_divisor() {
        // divisor with a zero pad limb
        let (q, r) = restoring_div(&BigInt::<u8>::from(1000), &BigInt::from(200));
        assert_eq!((q, r), (BigInt::from(5), BigInt::zero()));
    }

    // --- Signs ---

    #[test]
    fn test_truncating_signs() {
        for (x, y) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (6, -3), (-1, 5), (0, -5)] {
            check_identity::<u8>(x, y);
            check_identity::<u32>(x, y);
        }
    }

    #[test]
    fn test_wide_operands() {
        let cases = [
            (i128::MAX, 3),
            (i128::MIN, 7),
            (i128::MIN + 1, -(1i128 << 70)),
            (123_456_789_012_345_678_901_234, -987_654_321),
            (-(1i128 << 100), 1i128 << 50),
        ];
        for (x, y) in cases {
            check_identity::<u8>(x, y);
            check_identity::<u16>(x, y);
            check_identity::<u64>(x, y);
        }
    }

    #[test]
    fn test_divide_by_one() {
        let a = BigInt::<u32>::from(-123456789);
        assert_eq!(a.div_rem(&BigInt::one()).unwrap(), (a.clone(), BigInt::zero()));
        assert_eq!(
            a.div_rem(&BigInt::minus_one()).unwrap(),
            (-&a, BigInt::zero())
        );
    }

    // --- Division by zero ---

    #[test]
    fn test_checked_by_zero() {
        let a = BigInt::<u32>::from(5);
        assert_eq!(a.checked_div(&BigInt::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.checked_rem(&BigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_rem_assign_by_zero_keeps_value() {
        let mut a = BigInt::<u32>::from(5);
        assert!(a.div_rem_assign(&BigInt::zero()).is_err());
        assert_eq!(a, BigInt::from(5));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_by_zero_panics() {
        let _ = BigInt::<u8>::from(1) / BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "divisor of zero")]
    fn test_rem_operator_by_zero_panics() {
        let _ = BigInt::<u8>::from(1) % BigInt::zero();
    }

    // --- Operators ---

    #[test]
    fn test_div_rem_assign_by_ten() {
        let mut a = BigInt::<u16>::from(12345);
        let r = a.div_rem_assign(&BigInt::from(10)).unwrap();
        assert_eq!(a, BigInt::from(1234));
        assert_eq!(r, BigInt::from(5));
    }

    #[test]
    fn test_operators() {
        let a = BigInt::<u32>::from(-100);
        let b = BigInt::<u32>::from(7);
        assert_eq!(&a / &b, BigInt::from(-14));
        assert_eq!(&a % &b, BigInt::from(-2));
        let mut c = a.clone();
        c /= &b;
        assert_eq!(c, BigInt::from(-14));
        c %= BigInt::from(4);
        assert_eq!(c, BigInt::from(-2));
    }
}
