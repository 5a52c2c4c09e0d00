//! NOT, AND, OR, XOR and the two shifts.
//!
//! All of them read past-the-end positions as the sign word, so they act on
//! the infinite two's-complement extension of each operand.

use std::ops::Not;

use crate::kernel;
use crate::limb::Limb;
use crate::BigInt;

/// One's complement: flip every stored limb and the implicit sign word.
pub(crate) fn not<W: Limb>(a: &BigInt<W>) -> BigInt<W> {
    let mut limbs = kernel::map_range(a.len(), |i| !a.limbs()[i]);
    limbs.push(!a.sign());
    BigInt::from_limbs(limbs)
}

fn zip_limbs<W, F>(a: &BigInt<W>, b: &BigInt<W>, op: F) -> BigInt<W>
where
    W: Limb,
    F: Fn(W, W) -> W + Sync + Send,
{
    if a.is_zero() && b.is_zero() {
        return BigInt::zero();
    }
    let count = a.len().max(b.len());
    BigInt::from_limbs(kernel::map_range(count, |i| op(a.digit(i), b.digit(i))))
}

pub(crate) fn bitand<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    zip_limbs(a, b, |x, y| x & y)
}

pub(crate) fn bitor<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    zip_limbs(a, b, |x, y| x | y)
}

pub(crate) fn bitxor<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    zip_limbs(a, b, |x, y| x ^ y)
}

/// `a * 2^n`.
pub(crate) fn shl<W: Limb>(a: &BigInt<W>, n: usize) -> BigInt<W> {
    if a.is_zero() {
        return BigInt::zero();
    }
    let (n0, n1) = (n / W::BITS, n % W::BITS);
    let count = a.len() + n0 + usize::from(n1 != 0);
    let limbs = kernel::map_range(count, |i| {
        if i < n0 {
            return W::ZERO;
        }
        let j = i - n0;
        if n1 == 0 {
            return a.digit(j);
        }
        let carried_in = if j == 0 {
            W::ZERO
        } else {
            a.digit(j - 1) >> (W::BITS - n1)
        };
        carried_in | (a.digit(j) << n1)
    });
    BigInt::from_limbs(limbs)
}

/// `floor(a / 2^n)` while any stored limb survives the shift; zero once the
/// whole stored length is shifted out, whatever the sign.
pub(crate) fn shr<W: Limb>(a: &BigInt<W>, n: usize) -> BigInt<W> {
    if a.is_zero() {
        return BigInt::zero();
    }
    let (n0, n1) = (n / W::BITS, n % W::BITS);
    if n0 >= a.len() {
        return BigInt::zero();
    }
    let count = a.len() - n0;
    let limbs = kernel::map_range(count, |i| {
        let low = a.digit(n0 + i);
        if n1 == 0 {
            return low;
        }
        (low >> n1) | (a.digit(n0 + i + 1) << (W::BITS - n1))
    });
    BigInt::from_limbs(limbs)
}

impl<W: Limb> Not for &BigInt<W> {
    type Output = BigInt<W>;

    fn not(self) -> BigInt<W> {
        not(self)
    }
}

impl<W: Limb> Not for BigInt<W> {
    type Output = BigInt<W>;

    fn not(self) -> BigInt<W> {
        not(&self)
    }
}

forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, bitor);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);
forward_shift!(Shl, shl, ShlAssign, shl_assign, shl);
forward_shift!(Shr, shr, ShrAssign, shr_assign, shr);
