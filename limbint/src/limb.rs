//! Limb word capabilities.
//!
//! Every kernel in this crate is generic over the machine word it stores.
//! The [`Limb`] trait pins down exactly what a kernel may ask of that word:
//! checked add/mul for overflow detection, wrapping arithmetic for the value
//! kept after an overflow, bit operations, and a handful of compile-time
//! constants. It is implemented for `u8`, `u16`, `u32` and `u64` only.

use std::fmt;
use std::hash::Hash;

use num_traits::{CheckedAdd, CheckedMul, PrimInt, Unsigned, WrappingAdd, WrappingMul, WrappingSub};

/// Unsigned machine word used as one digit of a [`BigInt`](crate::BigInt).
pub trait Limb:
    PrimInt
    + Unsigned
    + CheckedAdd
    + CheckedMul
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + From<u8>
    + Default
    + Hash
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + Send
    + Sync
    + 'static
{
    /// Width of the word in bits.
    const BITS: usize;
    /// Width of a half word in bits.
    const HALF_BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    /// All bits set; also the word-wise reading of `-1`.
    const MAX: Self;
    /// Low half of the word set.
    const HALF_MASK: Self;
    /// Only the most significant bit set.
    const SIGN_BIT: Self;
    /// Short type name used by `Debug`.
    const NAME: &'static str;

    /// Truncating conversion keeping the low `BITS` bits of `value`.
    fn wrapping_from_u128(value: u128) -> Self;

    /// Zero-extending conversion.
    fn widen(self) -> u128;

    #[inline]
    fn sign_bit_set(self) -> bool {
        self & Self::SIGN_BIT != Self::ZERO
    }
}

macro_rules! impl_limb {
    ($($t:ty),*) => {
        $(
            impl Limb for $t {
                const BITS: usize = <$t>::BITS as usize;
                const HALF_BITS: usize = <$t>::BITS as usize / 2;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
                const HALF_MASK: Self = (1 << (<$t>::BITS / 2)) - 1;
                const SIGN_BIT: Self = 1 << (<$t>::BITS - 1);
                const NAME: &'static str = stringify!($t);

                #[inline(always)]
                fn wrapping_from_u128(value: u128) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_limb!(u8, u16, u32, u64);

/// Split a carry count into limb-sized words, least significant first.
///
/// Carry counts can exceed one word when many partial products land on the
/// same position (narrow limbs, long operands).
pub(crate) fn carry_words<W: Limb>(mut count: u128) -> impl Iterator<Item = W> {
    std::iter::from_fn(move || {
        if count == 0 {
            return None;
        }
        let word = W::wrapping_from_u128(count);
        count = count.checked_shr(W::BITS as u32).unwrap_or(0);
        Some(word)
    })
}
