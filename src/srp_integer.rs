/*!
[`SrpInteger`] is a nonnegative big integer that carries its own hex
width alongside its value.

SRP repeatedly concatenates values by their zero-padded byte
representation (`PAD(A)`, `PAD(B)`, `PAD(g)`, ...) before hashing. A
plain big-integer type forces every call site to remember which width
to pad to; encoding the width on the value itself removes that whole
class of bug. Two `SrpInteger`s with the same numeric value but
different widths still compare equal — width only affects
serialization, not identity.
*/
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Mul, Rem, Sub};

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::thread_rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// A nonnegative integer together with the hex width its wire form is
/// padded to. The width is always even (a whole number of bytes).
#[derive(Clone)]
pub struct SrpInteger {
    value: BigUint,
    hex_width: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SrpIntegerError {
    #[error("invalid hex string")]
    InvalidHex,
    #[error("invalid decimal string")]
    InvalidDecimal,
    #[error("modulus must be positive")]
    NonPositiveModulus,
}

impl SrpInteger {
    /// Parses a hex string, remembering its (even-padded) input width.
    /// Leniently lowercases and left-pads odd-length input, per the
    /// source library's behaviour, but only ever emits lowercase hex.
    pub fn from_hex(s: &str) -> Result<Self, SrpIntegerError> {
        let padded = if s.len() % 2 != 0 {
            format!("0{s}")
        } else {
            s.to_owned()
        };
        let bytes = hex::decode(&padded).map_err(|_| SrpIntegerError::InvalidHex)?;
        Ok(Self {
            value: BigUint::from_bytes_be(&bytes),
            hex_width: padded.len(),
        })
    }

    /// Parses a decimal string. Width is the minimal hex width needed
    /// to represent the value.
    pub fn from_decimal(s: &str) -> Result<Self, SrpIntegerError> {
        let value = s.parse::<BigUint>().map_err(|_| SrpIntegerError::InvalidDecimal)?;
        let hex_width = Self::minimal_hex_width(&value);
        Ok(Self { value, hex_width })
    }

    /// Wraps raw big-endian bytes; width is exactly `2 * bytes.len()`.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self {
            value: BigUint::from_bytes_be(bytes),
            hex_width: bytes.len() * 2,
        }
    }

    /// Uniformly samples `n_bytes` random octets from a cryptographically
    /// strong RNG and returns them as an `SrpInteger` of width `2 * n_bytes`.
    pub fn random(n_bytes: usize) -> Self {
        let mut rng = thread_rng();
        let value = rng.gen_biguint((n_bytes * 8) as u64);
        Self {
            value,
            hex_width: n_bytes * 2,
        }
    }

    fn minimal_hex_width(value: &BigUint) -> usize {
        let digits = value.to_str_radix(16).len();
        if digits % 2 == 0 {
            digits
        } else {
            digits + 1
        }
    }

    /// Returns a fresh `SrpInteger` with the same value but a forced
    /// hex width. Used at call sites that need to pad a value (`A`,
    /// `B`, `v`, ...) to the negotiated parameter width before hashing
    /// or sending it over the wire.
    pub fn pad(&self, hex_width: usize) -> Self {
        Self {
            value: self.value.clone(),
            hex_width,
        }
    }

    pub fn hex_width(&self) -> usize {
        self.hex_width
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// `self ^ exponent mod modulus`. `modulus` must be positive.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, SrpIntegerError> {
        if modulus.value.is_zero() {
            return Err(SrpIntegerError::NonPositiveModulus);
        }
        Ok(Self {
            value: self.value.modpow(&exponent.value, &modulus.value),
            hex_width: self.hex_width.max(exponent.hex_width).max(modulus.hex_width),
        })
    }

    pub fn mod_rem(&self, modulus: &Self) -> Self {
        Self {
            value: &self.value % &modulus.value,
            hex_width: self.hex_width.max(modulus.hex_width),
        }
    }

    /// `(self - other) mod modulus`, wrapping around rather than
    /// underflowing. `BigUint` has no negative values, so the premaster
    /// secret's `B - k*g^x` step needs this instead of plain `Sub`.
    pub fn mod_sub(&self, other: &Self, modulus: &Self) -> Self {
        let a = &self.value % &modulus.value;
        let b = &other.value % &modulus.value;
        let value = if a >= b {
            a - b
        } else {
            &modulus.value + a - b
        };
        Self {
            value,
            hex_width: self.hex_width.max(other.hex_width).max(modulus.hex_width),
        }
    }

    /// Bitwise XOR, used for `H(N) xor H(g)` in the proof hash.
    pub fn bitxor(&self, other: &Self) -> Self {
        Self {
            value: &self.value ^ &other.value,
            hex_width: self.hex_width.max(other.hex_width),
        }
    }

    /// The zero-padded, lowercase hex representation at the carried width.
    pub fn to_padded_hex(&self) -> String {
        let raw = self.value.to_str_radix(16);
        format!("{:0>width$}", raw, width = self.hex_width)
    }

    /// The big-endian byte representation, zero-padded on the left to
    /// `hex_width / 2` bytes (or left as-is if the value needs more).
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        let width = self.hex_width / 2;
        let raw = self.value.to_bytes_be();
        if raw.len() >= width {
            return raw;
        }
        let mut out = vec![0_u8; width - raw.len()];
        out.extend_from_slice(&raw);
        out
    }
}

impl Default for SrpInteger {
    fn default() -> Self {
        Self {
            value: BigUint::zero(),
            hex_width: 0,
        }
    }
}

impl Debug for SrpInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SrpInteger(\"{}\")", self.to_padded_hex())
    }
}

impl Display for SrpInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_padded_hex())
    }
}

/// Equality is value equality; width is ignored, matching the spec's
/// requirement that padding affects serialization only.
impl PartialEq for SrpInteger {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for SrpInteger {}

/// Constant-time-style equality used where a timing side channel on a
/// proof comparison would matter (`M1`/`M2`). Compares the minimal
/// big-endian byte forms; still value equality, not width equality.
impl SrpInteger {
    pub fn ct_eq(&self, other: &Self) -> bool {
        let a = self.value.to_bytes_be();
        let b = other.value.to_bytes_be();
        if a.len() != b.len() {
            return false;
        }
        a.ct_eq(&b).into()
    }
}

impl Add for &SrpInteger {
    type Output = SrpInteger;
    fn add(self, rhs: Self) -> SrpInteger {
        SrpInteger {
            value: &self.value + &rhs.value,
            hex_width: self.hex_width.max(rhs.hex_width),
        }
    }
}

impl Sub for &SrpInteger {
    type Output = SrpInteger;
    fn sub(self, rhs: Self) -> SrpInteger {
        SrpInteger {
            value: &self.value - &rhs.value,
            hex_width: self.hex_width.max(rhs.hex_width),
        }
    }
}

impl Mul for &SrpInteger {
    type Output = SrpInteger;
    fn mul(self, rhs: Self) -> SrpInteger {
        SrpInteger {
            value: &self.value * &rhs.value,
            hex_width: self.hex_width.max(rhs.hex_width),
        }
    }
}

impl Rem for &SrpInteger {
    type Output = SrpInteger;
    fn rem(self, rhs: Self) -> SrpInteger {
        self.mod_rem(rhs)
    }
}

impl PartialOrd for SrpInteger {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.value.cmp(&other.value))
    }
}

/// Serializes as the carried-width, lowercase, zero-padded hex string
/// — the same representation spec §6 puts on the wire.
impl Serialize for SrpInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_padded_hex())
    }
}

impl<'de> Deserialize<'de> for SrpInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_pads_hex() {
        let x = SrpInteger::from_hex("ab11cd").unwrap();
        assert_eq!(x.to_padded_hex(), "ab11cd");
        assert_eq!(x.pad(8).to_padded_hex(), "00ab11cd");
    }

    #[test]
    fn odd_length_hex_is_left_padded() {
        let x = SrpInteger::from_hex("6").unwrap();
        assert_eq!(x.to_padded_hex(), "06");
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(SrpInteger::from_hex("zz").unwrap_err(), SrpIntegerError::InvalidHex);
    }

    #[test]
    fn equality_ignores_width() {
        let a = SrpInteger::from_hex("ab").unwrap();
        let b = a.pad(10);
        assert_eq!(a, b);
        assert_ne!(a.to_padded_hex(), b.to_padded_hex());
    }

    #[test]
    fn mod_pow_matches_known_value() {
        let a = SrpInteger::from_decimal("6").unwrap();
        let p = SrpInteger::from_decimal("3").unwrap();
        let m = SrpInteger::from_decimal("7").unwrap();
        assert_eq!(a.mod_pow(&p, &m).unwrap(), SrpInteger::from_decimal("6").unwrap());
    }

    #[test]
    fn mod_pow_rejects_zero_modulus() {
        let a = SrpInteger::from_decimal("6").unwrap();
        let p = SrpInteger::from_decimal("3").unwrap();
        let zero = SrpInteger::from_decimal("0").unwrap();
        assert_eq!(
            a.mod_pow(&p, &zero).unwrap_err(),
            SrpIntegerError::NonPositiveModulus
        );
    }

    #[test]
    fn padded_bytes_round_trip() {
        let x = SrpInteger::from_bytes_be(&[0x11, 0xcd]).pad(6);
        assert_eq!(x.to_padded_bytes(), vec![0x00, 0x11, 0xcd]);
    }

    #[test]
    fn mod_sub_wraps_instead_of_underflowing() {
        let a = SrpInteger::from_decimal("3").unwrap();
        let b = SrpInteger::from_decimal("5").unwrap();
        let m = SrpInteger::from_decimal("7").unwrap();
        assert_eq!(a.mod_sub(&b, &m), SrpInteger::from_decimal("5").unwrap());
    }

    #[test]
    fn bitxor_matches_known_value() {
        let a = SrpInteger::from_hex("0f").unwrap();
        let b = SrpInteger::from_hex("f0").unwrap();
        assert_eq!(a.bitxor(&b), SrpInteger::from_hex("ff").unwrap());
    }

    #[test]
    fn random_is_not_reliably_zero() {
        let x = SrpInteger::random(16);
        assert_eq!(x.hex_width(), 32);
        assert_ne!(x, SrpInteger::default());
    }

    #[test]
    fn serde_round_trip_preserves_value_and_width() {
        let x = SrpInteger::from_hex("ab").unwrap().pad(8);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"000000ab\"");
        let back: SrpInteger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
        assert_eq!(back.hex_width(), x.hex_width());
    }
}
