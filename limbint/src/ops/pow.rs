//! Squaring and exponentiation.

use crate::config::{self, KernelConfig};
use crate::limb::Limb;
use crate::ops::{add, bitwise, mul};
use crate::BigInt;

/// Stored limbs of a non-negative value, minus the zero limb that only
/// keeps a set top bit from reading as a sign.
fn magnitude_len<W: Limb>(a: &BigInt<W>) -> usize {
    match a.limbs().last() {
        Some(&top) if top == W::ZERO => a.len() - 1,
        _ => a.len(),
    }
}

/// Square a non-negative value by splitting it into a low and a high half:
/// `(h*2^k + l)^2 = l^2 + (l*h << (k+1)) + (h^2 << 2k)`.
fn square_magnitude<W: Limb>(a: &BigInt<W>, cfg: &KernelConfig) -> BigInt<W> {
    let mlen = magnitude_len(a);
    // a zero cutoff would split a single limb into itself forever
    if mlen <= cfg.square_cutoff.max(1) {
        return mul::mul(a, a);
    }

    let count1 = mlen / 2;
    let low = BigInt::from_unsigned_limbs(&a.limbs()[..count1]);
    let high = BigInt::from_limbs(a.limbs()[count1..].to_vec());
    let k = count1 * W::BITS;

    let ((low_sq, high_sq), cross) = if mlen >= cfg.min_parallel_len {
        rayon::join(
            || {
                rayon::join(
                    || square_magnitude(&low, cfg),
                    || square_magnitude(&high, cfg),
                )
            },
            || mul::mul(&low, &high),
        )
    } else {
        (
            (square_magnitude(&low, cfg), square_magnitude(&high, cfg)),
            mul::mul(&low, &high),
        )
    };

    let sum = add::add(&low_sq, &bitwise::shl(&cross, k + 1));
    add::add(&sum, &bitwise::shl(&high_sq, 2 * k))
}

impl<W: Limb> BigInt<W> {
    /// `self * self`, computed by recursive halving.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// let x = BigInt::<u8>::from(-300);
    /// assert_eq!(x.square(), BigInt::from(90000));
    /// ```
    pub fn square(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let _span = tracing::trace_span!("square", len = self.len()).entered();
        let cfg = config::current();
        square_magnitude(&self.abs(), &cfg)
    }

    /// `self` raised to `exp`. `x.pow(0)` is one for every `x`, zero included.
    ///
    /// The exponent is split as `m * 2^k1` with `m` odd. The odd part is
    /// handled by square-and-multiply, the power of two by `k1` plain
    /// squarings at the end.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// assert_eq!(BigInt::<u32>::from(11).pow(2).to_string(), "121");
    /// assert_eq!(BigInt::<u16>::from(-2).pow(7), BigInt::from(-128));
    /// ```
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        if self.is_zero() {
            return Self::zero();
        }
        let _span = tracing::trace_span!("pow", len = self.len(), exp).entered();

        let k1 = exp.trailing_zeros();
        let odd = exp >> k1;
        let k2 = u32::BITS - odd.leading_zeros();

        let mut result = self.clone();
        let mut power = self.clone();
        for i in 1..k2 {
            power = power.square();
            if (odd >> i) & 1 == 1 {
                result = &result * &power;
            }
        }
        for _ in 0..k1 {
            result = result.square();
        }
        result
    }
}
