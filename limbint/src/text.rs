//! Decimal text I/O, formatting traits and serde support.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BigIntError, Result};
use crate::limb::Limb;
use crate::BigInt;

impl<W: Limb> BigInt<W> {
    /// Parse `'-'?[0-9]+`. No leading `+`, no whitespace.
    ///
    /// ```
    /// use limbint::{BigInt, BigIntError};
    ///
    /// let x = BigInt::<u16>::from_decimal_str("-1000000").unwrap();
    /// assert_eq!(x, BigInt::from(-1_000_000));
    ///
    /// let err = BigInt::<u16>::from_decimal_str("12a").unwrap_err();
    /// assert_eq!(err, BigIntError::InvalidDigit { found: 'a', index: 2 });
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let (negative, digits, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };
        if digits.is_empty() {
            return Err(BigIntError::Empty);
        }

        let ten = Self::from(10u8);
        let mut value = Self::zero();
        for (i, ch) in digits.char_indices() {
            let digit = ch.to_digit(10).ok_or(BigIntError::InvalidDigit {
                found: ch,
                index: offset + i,
            })?;
            value = &(&value * &ten) + &Self::from(digit);
        }
        Ok(if negative { -value } else { value })
    }
}

impl<W: Limb> FromStr for BigInt<W> {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Decimal digits of `|value|`, most significant first.
fn decimal_digits<W: Limb>(value: &BigInt<W>) -> Result<String> {
    if value.is_zero() {
        return Ok("0".to_string());
    }
    let ten = BigInt::<W>::from(10u8);
    let mut rest = value.abs();
    let mut digits = Vec::new();
    while !rest.is_zero() {
        let digit = rest.div_rem_assign(&ten)?;
        digits.push(b'0' + digit.digit(0).widen() as u8);
    }
    digits.reverse();
    Ok(digits.into_iter().map(char::from).collect())
}

impl<W: Limb> fmt::Display for BigInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = decimal_digits(self).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl<W: Limb> fmt::Debug for BigInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt<{}>({})", W::NAME, self)
    }
}

/// Raw two's-complement limbs, most significant first, each padded to the
/// full word width. Zero prints as `0`.
impl<W: Limb> fmt::LowerHex for BigInt<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = W::BITS / 4;
        let mut hex = String::with_capacity(self.len() * width);
        for (i, limb) in self.limbs().iter().rev().enumerate() {
            if i == 0 {
                hex.push_str(&format!("{limb:x}"));
            } else {
                hex.push_str(&format!("{limb:0width$x}"));
            }
        }
        if hex.is_empty() {
            hex.push('0');
        }
        f.pad_integral(true, "0x", &hex)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl<W: Limb> Serialize for BigInt<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor<W>(std::marker::PhantomData<W>);

impl<'de, W: Limb> Visitor<'de> for BigIntVisitor<W> {
    type Value = BigInt<W>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        BigInt::from_decimal_str(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> std::result::Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Self::Value, E> {
        Ok(BigInt::from(v))
    }
}

impl<'de, W: Limb> Deserialize<'de> for BigInt<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(BigIntVisitor(std::marker::PhantomData))
    }
}
