//! Increment, decrement, negation, addition and subtraction.

use std::ops::Neg;

use crate::bigint::normalize;
use crate::kernel::{self, Pending};
use crate::limb::Limb;
use crate::ops::bitwise;
use crate::BigInt;

impl<W: Limb> BigInt<W> {
    /// Add one in place.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// let mut x = BigInt::<u8>::from(255);
    /// x.increment().increment();
    /// assert_eq!(x, BigInt::from(257));
    /// ```
    pub fn increment(&mut self) -> &mut Self {
        let sign = self.sign();
        let limbs = self.limbs_mut();
        limbs.push(sign);
        for limb in limbs.iter_mut() {
            *limb = limb.wrapping_add(&W::ONE);
            if *limb != W::ZERO {
                break;
            }
        }
        normalize(limbs);
        self
    }

    /// Subtract one in place.
    pub fn decrement(&mut self) -> &mut Self {
        let sign = self.sign();
        let limbs = self.limbs_mut();
        limbs.push(sign);
        for limb in limbs.iter_mut() {
            *limb = limb.wrapping_sub(&W::ONE);
            if *limb != W::MAX {
                break;
            }
        }
        normalize(limbs);
        self
    }
}

/// Two's-complement negation: `!a + 1`.
pub(crate) fn neg<W: Limb>(a: &BigInt<W>) -> BigInt<W> {
    let mut r = bitwise::not(a);
    r.increment();
    r
}

pub(crate) fn add<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    // one spare limb holds any carry out of the longer operand
    let count = a.len().max(b.len()) + 1;
    let sums = kernel::map_range(count, |i| {
        let (x, y) = (a.digit(i), b.digit(i));
        match x.checked_add(&y) {
            Some(z) => (z, false),
            None => (x.wrapping_add(&y), true),
        }
    });

    let mut result = Vec::with_capacity(count);
    let mut carries: Vec<Pending<W>> = Vec::new();
    for (i, (z, carry)) in sums.into_iter().enumerate() {
        result.push(z);
        if carry {
            carries.push((i + 1, W::ONE));
        }
    }
    kernel::resolve_carries(&mut result, carries);
    BigInt::from_limbs(result)
}

pub(crate) fn sub<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return neg(b);
    }
    add(a, &neg(b))
}

impl<W: Limb> Neg for &BigInt<W> {
    type Output = BigInt<W>;

    fn neg(self) -> BigInt<W> {
        neg(self)
    }
}

impl<W: Limb> Neg for BigInt<W> {
    type Output = BigInt<W>;

    fn neg(self) -> BigInt<W> {
        neg(&self)
    }
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub);
