//! Variable-length two's-complement integers.
//!
//! A [`BigInt`] stores the minimal little-endian limb sequence of its value.
//! Positions past the stored length read as the sign word: all zeros for a
//! non-negative value, all ones for a negative one. Zero is the empty
//! sequence.

use crate::limb::Limb;

/// Arbitrary-precision signed integer over limbs of type `W`.
///
/// ```
/// use limbint::BigInt;
///
/// let a: BigInt = "-12345678901234567890".parse().unwrap();
/// let b = BigInt::from(10);
/// assert_eq!((&a * &b).to_string(), "-123456789012345678900");
/// assert!(a.is_negative());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt<W: Limb = u32> {
    limbs: Vec<W>,
}

/// Strip redundant most significant limbs.
///
/// A top limb is redundant when it only repeats the sign already carried by
/// the sign bit of the limb below it. A lone zero limb collapses to the
/// empty sequence.
pub(crate) fn normalize<W: Limb>(limbs: &mut Vec<W>) {
    while limbs.len() > 1 {
        let top = limbs[limbs.len() - 1];
        let below_negative = limbs[limbs.len() - 2].sign_bit_set();
        let redundant =
            (top == W::ZERO && !below_negative) || (top == W::MAX && below_negative);
        if !redundant {
            break;
        }
        limbs.pop();
    }
    if limbs.len() == 1 && limbs[0] == W::ZERO {
        limbs.clear();
    }
}

impl<W: Limb> BigInt<W> {
    #[inline]
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        Self {
            limbs: vec![W::ONE],
        }
    }

    pub fn minus_one() -> Self {
        Self {
            limbs: vec![W::MAX],
        }
    }

    /// A single raw word read as a two's-complement value.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// assert_eq!(BigInt::<u8>::from_word(0x7f).to_string(), "127");
    /// assert_eq!(BigInt::<u8>::from_word(0xff).to_string(), "-1");
    /// ```
    pub fn from_word(word: W) -> Self {
        Self::from_limbs(vec![word])
    }

    /// Raw two's-complement limbs (least significant first), renormalized.
    pub fn from_limbs(mut limbs: Vec<W>) -> Self {
        normalize(&mut limbs);
        Self { limbs }
    }

    /// Raw limbs of a non-negative magnitude (least significant first).
    ///
    /// Unlike [`from_limbs`](Self::from_limbs), a set top bit is not read as a
    /// sign.
    pub fn from_unsigned_limbs(limbs: &[W]) -> Self {
        let mut limbs = limbs.to_vec();
        limbs.push(W::ZERO);
        Self::from_limbs(limbs)
    }

    pub(crate) fn from_u128(value: u128) -> Self {
        let count = 128usize.div_ceil(W::BITS);
        let mut limbs: Vec<W> = (0..count)
            .map(|i| W::wrapping_from_u128(value >> (i * W::BITS)))
            .collect();
        limbs.push(W::ZERO);
        Self::from_limbs(limbs)
    }

    pub(crate) fn from_i128(value: i128) -> Self {
        let bits = value as u128;
        let count = 128usize.div_ceil(W::BITS);
        let limbs = (0..count)
            .map(|i| W::wrapping_from_u128(bits >> (i * W::BITS)))
            .collect();
        Self::from_limbs(limbs)
    }

    /// The value as an `i128`, if it fits.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// assert_eq!(BigInt::<u16>::from(-70000i64).to_i128(), Some(-70000));
    /// assert_eq!((BigInt::<u64>::from(1) << 200).to_i128(), None);
    /// ```
    pub fn to_i128(&self) -> Option<i128> {
        if self.limbs.len() * W::BITS > 128 {
            return None;
        }
        let mut bits = 0u128;
        for i in 0..128usize.div_ceil(W::BITS) {
            bits |= self.digit(i).widen() << (i * W::BITS);
        }
        Some(bits as i128)
    }

    // ========================================================================
    // Limb access
    // ========================================================================

    /// Stored limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[W] {
        &self.limbs
    }

    /// Number of stored limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub(crate) fn limbs_mut(&mut self) -> &mut Vec<W> {
        &mut self.limbs
    }

    /// The word every position past the stored length reads as.
    #[inline]
    pub fn sign(&self) -> W {
        match self.limbs.last() {
            Some(top) if top.sign_bit_set() => W::MAX,
            _ => W::ZERO,
        }
    }

    /// Limb `i`, or the sign word past the stored length.
    #[inline]
    pub fn digit(&self, i: usize) -> W {
        match self.limbs.get(i) {
            Some(&w) => w,
            None => self.sign(),
        }
    }

    // ========================================================================
    // Classification
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// True for every value `>= 0`, zero included.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() == W::ZERO
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() == W::MAX
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == W::ONE
    }

    #[inline]
    pub fn is_minus_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == W::MAX
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.is_negative() {
            Self::minus_one()
        } else {
            Self::one()
        }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Number of bits needed for `|self|` as an unsigned magnitude.
    ///
    /// ```
    /// use limbint::BigInt;
    ///
    /// assert_eq!(BigInt::<u8>::from(255).bits(), 8);
    /// assert_eq!(BigInt::<u8>::from(-256).bits(), 9);
    /// assert_eq!(BigInt::<u8>::zero().bits(), 0);
    /// ```
    pub fn bits(&self) -> usize {
        let magnitude = self.abs();
        match magnitude.limbs.iter().rposition(|&w| w != W::ZERO) {
            Some(top) => {
                top * W::BITS + W::BITS - magnitude.limbs[top].leading_zeros() as usize
            }
            None => 0,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl<W: Limb> From<$t> for BigInt<W> {
                fn from(value: $t) -> Self {
                    Self::from_i128(value as i128)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<W: Limb> From<$t> for BigInt<W> {
                fn from(value: $t) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
