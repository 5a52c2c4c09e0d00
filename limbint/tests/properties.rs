//! Property-based tests against `num-bigint` as a reference.
//!
//! Operands are drawn as random two's-complement byte strings, so every
//! width sees values with and without a set top bit, zero, and long runs of
//! 0x00 / 0xff that exercise normalization and multi-round carries.

use limbint::{BigInt, Limb};
use num_bigint::BigInt as Oracle;
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Little-endian two's-complement bytes into a `BigInt<W>`.
fn from_bytes<W: Limb>(bytes: &[u8]) -> BigInt<W> {
    let step = W::BITS / 8;
    let sign = match bytes.last() {
        Some(&b) if b & 0x80 != 0 => 0xff,
        _ => 0x00,
    };
    let mut padded = bytes.to_vec();
    while padded.len() % step != 0 {
        padded.push(sign);
    }
    let limbs = padded
        .chunks(step)
        .map(|chunk| {
            let word = chunk
                .iter()
                .rev()
                .fold(0u128, |acc, &b| (acc << 8) | b as u128);
            W::wrapping_from_u128(word)
        })
        .collect();
    BigInt::from_limbs(limbs)
}

fn to_oracle<W: Limb>(x: &BigInt<W>) -> Oracle {
    let step = W::BITS / 8;
    let bytes: Vec<u8> = x
        .limbs()
        .iter()
        .flat_map(|w| {
            let wide = w.widen();
            (0..step).map(move |i| (wide >> (8 * i)) as u8)
        })
        .collect();
    Oracle::from_signed_bytes_le(&bytes)
}

fn from_oracle<W: Limb>(x: &Oracle) -> BigInt<W> {
    from_bytes(&x.to_signed_bytes_le())
}

fn operand(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..max_len),
        // runs of sign bytes stress normalization and carry chains
        prop::collection::vec(
            prop_oneof![Just(0x00u8), Just(0xff), Just(0x80), Just(0x7f)],
            0..max_len
        ),
    ]
}

/// Run `check` for every supported limb width.
macro_rules! for_each_width {
    ($check:ident, $($arg:expr),*) => {{
        $check::<u8>($($arg),*);
        $check::<u16>($($arg),*);
        $check::<u32>($($arg),*);
        $check::<u64>($($arg),*);
    }};
}

// ============================================================================
// Checks
// ============================================================================

fn check_conversion<W: Limb>(a: &[u8]) {
    let x = from_bytes::<W>(a);
    let expected = Oracle::from_signed_bytes_le(a);
    assert_eq!(to_oracle(&x), expected);
    assert_eq!(from_oracle::<W>(&expected), x);
}

fn check_add_sub<W: Limb>(a: &[u8], b: &[u8]) {
    let (x, y) = (from_bytes::<W>(a), from_bytes::<W>(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    assert_eq!(to_oracle(&(&x + &y)), &ox + &oy);
    assert_eq!(to_oracle(&(&x - &y)), &ox - &oy);
    assert!((&x + &(-&x)).is_zero());
    assert_eq!(-(-&x), x);
}

fn check_mul<W: Limb>(a: &[u8], b: &[u8]) {
    let (x, y) = (from_bytes::<W>(a), from_bytes::<W>(b));
    assert_eq!(to_oracle(&(&x * &y)), to_oracle(&x) * to_oracle(&y));
}

fn check_square<W: Limb>(a: &[u8]) {
    let x = from_bytes::<W>(a);
    let sq = x.square();
    assert_eq!(sq, &x * &x);
    assert_eq!(sq, (-&x).square());
    assert_eq!(to_oracle(&sq), to_oracle(&x).pow(2u32));
}

fn check_pow<W: Limb>(a: &[u8], p1: u32, p2: u32) {
    let x = from_bytes::<W>(a);
    assert_eq!(x.pow(p1 + p2), &x.pow(p1) * &x.pow(p2));
    assert_eq!(to_oracle(&x.pow(p1)), to_oracle(&x).pow(p1));
}

fn check_div<W: Limb>(a: &[u8], b: &[u8]) {
    let (x, y) = (from_bytes::<W>(a), from_bytes::<W>(b));
    if y.is_zero() {
        assert!(x.div_rem(&y).is_err());
        return;
    }
    let (q, r) = x.div_rem(&y).unwrap();
    assert_eq!(&(&q * &y) + &r, x);
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    assert_eq!(to_oracle(&q), &ox / &oy);
    assert_eq!(to_oracle(&r), &ox % &oy);
}

fn check_bitwise<W: Limb>(a: &[u8], b: &[u8]) {
    let (x, y) = (from_bytes::<W>(a), from_bytes::<W>(b));
    let (ox, oy) = (to_oracle(&x), to_oracle(&y));
    assert_eq!(to_oracle(&(&x & &y)), &ox & &oy);
    assert_eq!(to_oracle(&(&x | &y)), &ox | &oy);
    assert_eq!(to_oracle(&(&x ^ &y)), &ox ^ &oy);
    assert_eq!(to_oracle(&!&x), -ox - 1);
}

fn check_shifts<W: Limb>(a: &[u8], m: usize) {
    let x = from_bytes::<W>(a);
    let up = &x << m;
    assert_eq!(to_oracle(&up), to_oracle(&x) << m);
    assert_eq!(&up >> m, x);

    let down = &x >> m;
    if m / W::BITS >= x.len() {
        // every stored limb shifted out
        assert!(down.is_zero());
    } else {
        // floor(x / 2^m) brackets x
        assert!(&down << m <= x);
        assert!(x < &(&down + &BigInt::one()) << m);
    }
}

fn check_cmp<W: Limb>(a: &[u8], b: &[u8]) {
    let (x, y) = (from_bytes::<W>(a), from_bytes::<W>(b));
    assert_eq!(x.cmp(&y), to_oracle(&x).cmp(&to_oracle(&y)));
    assert_eq!(x == y, to_oracle(&x) == to_oracle(&y));
}

fn check_decimal<W: Limb>(a: &[u8]) {
    let x = from_bytes::<W>(a);
    let s = x.to_string();
    assert_eq!(s, to_oracle(&x).to_string());
    assert_eq!(s.parse::<BigInt<W>>().unwrap(), x);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_conversion(a in operand(40)) {
        for_each_width!(check_conversion, &a);
    }

    #[test]
    fn prop_add_sub(a in operand(40), b in operand(40)) {
        for_each_width!(check_add_sub, &a, &b);
    }

    #[test]
    fn prop_mul(a in operand(32), b in operand(32)) {
        for_each_width!(check_mul, &a, &b);
    }

    #[test]
    fn prop_square(a in operand(32)) {
        for_each_width!(check_square, &a);
    }

    #[test]
    fn prop_pow(a in operand(6), p1 in 0u32..12, p2 in 0u32..12) {
        for_each_width!(check_pow, &a, p1, p2);
    }

    #[test]
    fn prop_div(a in operand(32), b in operand(16)) {
        for_each_width!(check_div, &a, &b);
    }

    #[test]
    fn prop_bitwise(a in operand(24), b in operand(24)) {
        for_each_width!(check_bitwise, &a, &b);
    }

    #[test]
    fn prop_shifts(a in operand(24), m in 0usize..300) {
        for_each_width!(check_shifts, &a, m);
    }

    #[test]
    fn prop_cmp(a in operand(16), b in operand(16)) {
        for_each_width!(check_cmp, &a, &b);
    }

    #[test]
    fn prop_decimal(a in operand(16)) {
        for_each_width!(check_decimal, &a);
    }

    #[test]
    fn prop_pow_zero_is_one(a in operand(16)) {
        prop_assert!(from_bytes::<u32>(&a).pow(0).is_one());
    }
}
