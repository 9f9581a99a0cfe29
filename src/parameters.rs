/*!
[`SrpParameters`] is the immutable, shareable negotiated context every
client/server operation is parameterized over: the group (`N`, `g`),
the hash algorithm, and the derived multiplier `k` and padded width.
*/
use crate::groups::Group;
use crate::hash::{HashInput, SrpHash};
use crate::srp_integer::{SrpInteger, SrpIntegerError};
use crate::{Result, Srp6Error};

/// Immutable (N, g, H) triple plus its derived constants. Safe to share
/// across any number of concurrent sessions: everything here is
/// computed once at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SrpParameters {
    n: SrpInteger,
    g: SrpInteger,
    hash: SrpHash,
    k: SrpInteger,
    padded_length: usize,
}

impl Default for SrpParameters {
    /// RFC 5054's 2048-bit group with SHA-256, per spec §6's stated
    /// default.
    fn default() -> Self {
        Self::from_group(Group::default(), SrpHash::default())
    }
}

impl SrpParameters {
    /// Builds parameters from one of the seven RFC 5054 standard
    /// groups, cross-producted with any supported hash.
    pub fn from_group(group: Group, hash: SrpHash) -> Self {
        // Standard-group hex is known-good; a malformed literal here is
        // a programming error in this crate, not caller input.
        Self::new(group.modulus_hex(), group.generator_hex(), hash)
            .expect("standard RFC 5054 group constants must parse")
    }

    /// Builds parameters from explicit hex for `N` and `g`. Returns
    /// `Configuration` if either fails to parse as hex, or if `g >= N`.
    pub fn new(n_hex: &str, g_hex: &str, hash: SrpHash) -> Result<Self> {
        let n = SrpInteger::from_hex(n_hex).map_err(|e| to_configuration(e))?;
        let g = SrpInteger::from_hex(g_hex).map_err(|e| to_configuration(e))?;
        if g >= n {
            return Err(Srp6Error::Configuration {
                reason: "generator must be smaller than the modulus".into(),
            });
        }
        let padded_length = n.hex_width();
        let padded_g = g.pad(padded_length);
        let k = hash.compute_hash([HashInput::Int(&n), HashInput::Int(&padded_g)]);
        if k.is_zero() {
            return Err(Srp6Error::Configuration {
                reason: "derived multiplier k must not be zero".into(),
            });
        }
        let k = k.mod_rem(&n);
        Ok(Self {
            n,
            g,
            hash,
            k,
            padded_length,
        })
    }

    pub fn n(&self) -> &SrpInteger {
        &self.n
    }

    pub fn g(&self) -> &SrpInteger {
        &self.g
    }

    pub fn k(&self) -> &SrpInteger {
        &self.k
    }

    pub fn hash(&self) -> SrpHash {
        self.hash
    }

    /// Hex width of `N`; every `A`/`B`/`v` is padded to this width
    /// before being hashed or put on the wire.
    pub fn padded_length(&self) -> usize {
        self.padded_length
    }

    pub fn hash_size_bytes(&self) -> usize {
        self.hash.hash_size_bytes()
    }
}

fn to_configuration(_e: SrpIntegerError) -> Srp6Error {
    Srp6Error::Configuration {
        reason: "N or g is not valid hex".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_2048_sha256() {
        let p = SrpParameters::default();
        assert_eq!(p.padded_length(), 512);
        assert_eq!(p.hash(), SrpHash::Sha256);
    }

    #[test]
    fn same_group_and_hash_produce_equal_k() {
        let a = SrpParameters::from_group(Group::G2048, SrpHash::Sha256);
        let b = SrpParameters::from_group(Group::G2048, SrpHash::Sha256);
        assert_eq!(a.k(), b.k());
        assert_eq!(a.padded_length(), b.padded_length());
        assert_eq!(a.hash_size_bytes(), b.hash_size_bytes());
    }

    #[test]
    fn every_standard_group_constructs() {
        for group in [
            Group::G1024,
            Group::G1536,
            Group::G2048,
            Group::G3072,
            Group::G4096,
            Group::G6144,
            Group::G8192,
        ] {
            let p = SrpParameters::from_group(group, SrpHash::Sha1);
            assert!(!p.k().is_zero());
        }
    }

    #[test]
    fn rejects_generator_not_smaller_than_modulus() {
        let err = SrpParameters::new("05", "05", SrpHash::Sha256).unwrap_err();
        assert!(matches!(err, Srp6Error::Configuration { .. }));
    }

    #[test]
    fn rejects_malformed_hex() {
        let err = SrpParameters::new("zz", "05", SrpHash::Sha256).unwrap_err();
        assert!(matches!(err, Srp6Error::Configuration { .. }));
    }
}
