/*!
[`SrpHash`] adapts a selectable digest algorithm to SRP's
"hash a concatenation of mixed-typed values, interpret the digest as an
integer" idiom: `H(N | PAD(g))`, `H(PAD(A) | PAD(B))`,
`H(H(N) xor H(g) | H(I) | s | PAD(A) | PAD(B) | K)`, and so on all
reduce to the same `compute_hash` call with a list of [`HashInput`]s.
*/
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::srp_integer::SrpInteger;

/// One argument to [`SrpHash::compute_hash`]. A hex string is taken to
/// be the padded hex of an `SrpInteger` and converted via its byte
/// representation; an `SrpInteger` contributes its own padded bytes;
/// raw bytes are hashed as-is.
pub enum HashInput<'a> {
    Hex(&'a str),
    Int(&'a SrpInteger),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(s: &'a str) -> Self {
        HashInput::Hex(s)
    }
}
impl<'a> From<&'a SrpInteger> for HashInput<'a> {
    fn from(i: &'a SrpInteger) -> Self {
        HashInput::Int(i)
    }
}
impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        HashInput::Bytes(b)
    }
}

/// The hash functions SRP-6a / RFC 5054 negotiate over. `Sha256` is the
/// default, matching spec §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SrpHash {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl Default for SrpHash {
    fn default() -> Self {
        SrpHash::Sha256
    }
}

impl SrpHash {
    /// Digest length in bytes.
    pub fn hash_size_bytes(self) -> usize {
        match self {
            SrpHash::Sha1 => 20,
            SrpHash::Sha256 => 32,
            SrpHash::Sha384 => 48,
            SrpHash::Sha512 => 64,
            SrpHash::Md5 => 16,
        }
    }

    /// Diagnostic-only identifier; never used in wire semantics.
    pub fn algorithm_name(self) -> &'static str {
        match self {
            SrpHash::Sha1 => "SHA-1",
            SrpHash::Sha256 => "SHA-256",
            SrpHash::Sha384 => "SHA-384",
            SrpHash::Sha512 => "SHA-512",
            SrpHash::Md5 => "MD5",
        }
    }

    fn digest(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            SrpHash::Sha1 => Sha1::digest(bytes).to_vec(),
            SrpHash::Sha256 => Sha256::digest(bytes).to_vec(),
            SrpHash::Sha384 => Sha384::digest(bytes).to_vec(),
            SrpHash::Sha512 => Sha512::digest(bytes).to_vec(),
            SrpHash::Md5 => Md5::digest(bytes).to_vec(),
        }
    }

    /// Hashes the concatenation of every input's byte form and
    /// interprets the digest as a big-endian nonnegative `SrpInteger`
    /// of width `2 * hash_size_bytes()`. `None`/empty inputs contribute
    /// zero bytes, matching the source library's leniency.
    pub fn compute_hash<'a, I>(self, values: I) -> SrpInteger
    where
        I: IntoIterator<Item = HashInput<'a>>,
    {
        let mut buf = Vec::new();
        for v in values {
            match v {
                HashInput::Hex(s) if !s.is_empty() => {
                    if let Ok(i) = SrpInteger::from_hex(s) {
                        buf.extend_from_slice(&i.to_padded_bytes());
                    }
                }
                HashInput::Hex(_) => {}
                HashInput::Int(i) => buf.extend_from_slice(&i.to_padded_bytes()),
                HashInput::Bytes(b) => buf.extend_from_slice(b),
            }
        }
        let digest = self.digest(&buf);
        SrpInteger::from_bytes_be(&digest).pad(self.hash_size_bytes() * 2)
    }

    /// Convenience for hashing raw bytes directly (identities, literal
    /// separators) without going through [`HashInput`].
    pub fn hash_bytes(self, bytes: &[u8]) -> SrpInteger {
        let digest = self.digest(bytes);
        SrpInteger::from_bytes_be(&digest).pad(self.hash_size_bytes() * 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_size_matches_algorithm() {
        assert_eq!(SrpHash::Sha1.hash_size_bytes(), 20);
        assert_eq!(SrpHash::Sha256.hash_size_bytes(), 32);
        assert_eq!(SrpHash::Sha384.hash_size_bytes(), 48);
        assert_eq!(SrpHash::Sha512.hash_size_bytes(), 64);
        assert_eq!(SrpHash::Md5.hash_size_bytes(), 16);
    }

    #[test]
    fn compute_hash_width_is_twice_the_digest() {
        let h = SrpHash::Sha256.compute_hash([HashInput::Bytes(b"hello")]);
        assert_eq!(h.hex_width(), 64);
    }

    #[test]
    fn empty_and_null_inputs_contribute_nothing() {
        let a = SrpHash::Sha1.compute_hash([HashInput::Bytes(b"x")]);
        let b = SrpHash::Sha1.compute_hash([HashInput::Hex(""), HashInput::Bytes(b"x")]);
        assert_eq!(a, b);
    }

    #[test]
    fn padded_hash_differs_from_minimal_hash() {
        let small = SrpInteger::from_hex("ab").unwrap();
        let padded = small.pad(8);
        let h_small = SrpHash::Sha256.compute_hash([HashInput::Int(&small)]);
        let h_padded = SrpHash::Sha256.compute_hash([HashInput::Int(&padded)]);
        assert_ne!(h_small, h_padded);
    }
}
