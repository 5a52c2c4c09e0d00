//! Multiplication.
//!
//! Every limb pair `(i, j)` contributes an independent partial product at
//! position `i + j`. A pair whose native product overflows the word is
//! broken into half-limb sub-products that always fit. All partial products
//! are then folded into the result by the shared carry-fixup rounds.

use smallvec::SmallVec;

use crate::kernel::{self, Pending};
use crate::limb::Limb;
use crate::BigInt;

/// At most one full product, or four half products of which two may straddle
/// a limb boundary.
type Partials<W> = SmallVec<[Pending<W>; 6]>;

/// Partial products of `x * y` landing at limb position `k` and above.
fn partial_products<W: Limb>(k: usize, x: W, y: W) -> Partials<W> {
    let mut out = Partials::new();
    if let Some(z) = x.checked_mul(&y) {
        if z != W::ZERO {
            out.push((k, z));
        }
        return out;
    }

    for i0 in 0..2 {
        for j0 in 0..2 {
            let x0 = (x >> (i0 * W::HALF_BITS)) & W::HALF_MASK;
            let y0 = (y >> (j0 * W::HALF_BITS)) & W::HALF_MASK;
            // half x half never overflows a full word
            let z0 = x0 * y0;
            if z0 == W::ZERO {
                continue;
            }
            // position counted in half limbs
            let k0 = 2 * k + i0 + j0;
            if k0 % 2 == 0 {
                out.push((k0 / 2, z0));
            } else {
                let low = (z0 & W::HALF_MASK) << W::HALF_BITS;
                let high = z0 >> W::HALF_BITS;
                if low != W::ZERO {
                    out.push((k0 / 2, low));
                }
                if high != W::ZERO {
                    out.push((k0 / 2 + 1, high));
                }
            }
        }
    }
    out
}

pub(crate) fn mul<W: Limb>(a: &BigInt<W>, b: &BigInt<W>) -> BigInt<W> {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let _span = tracing::trace_span!("mul", lhs = a.len(), rhs = b.len()).entered();

    // the signed product always fits len(a) + len(b) limbs; everything
    // at or past `count` is two's-complement wrap and is never generated
    let count = a.len() + b.len();
    let partials = kernel::flat_map_range(count, |i| {
        let x = a.digit(i);
        (0..count - i).flat_map(move |j| partial_products(i + j, x, b.digit(j)))
    });
    tracing::trace!(partials = partials.len(), "partial products");

    let mut result = vec![W::ZERO; count];
    kernel::resolve_carries(&mut result, partials);
    BigInt::from_limbs(result)
}

forward_binop!(Mul, mul, MulAssign, mul_assign, mul);
