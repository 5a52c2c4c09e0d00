use std::cmp::Ordering;

use crate::limb::Limb;
use crate::BigInt;

/// Same-sign comparison of normalized values. For two non-negatives a longer
/// sequence is larger; for two negatives it is smaller. Equal lengths compare
/// limb patterns from the top, which orders two's-complement values of the
/// same width correctly whatever their common sign.
fn cmp_same_sign<W: Limb>(a: &BigInt<W>, b: &BigInt<W>, negative: bool) -> Ordering {
    let by_len = if negative {
        b.len().cmp(&a.len())
    } else {
        a.len().cmp(&b.len())
    };
    by_len.then_with(|| a.limbs().iter().rev().cmp(b.limbs().iter().rev()))
}

impl<W: Limb> Ord for BigInt<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => cmp_same_sign(self, other, negative),
        }
    }
}

impl<W: Limb> PartialOrd for BigInt<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
