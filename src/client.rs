/*!
The client half of the exchange: [`SrpClient`] turns an identity and
password into a verifier at enrollment, and later into a session key
and proof during authentication.
*/
use log::debug;

use crate::hash::HashInput;
use crate::parameters::SrpParameters;
use crate::srp_integer::SrpInteger;
use crate::{Result, Srp6Error, SrpEphemeral, SrpSession};

/// Bound to one [`SrpParameters`]; every method is a pure function of
/// its explicit arguments plus those parameters. Holds no session
/// state, so a single `SrpClient` can serve any number of concurrent
/// logins.
pub struct SrpClient<'a> {
    parameters: &'a SrpParameters,
}

impl<'a> SrpClient<'a> {
    pub fn new(parameters: &'a SrpParameters) -> Self {
        Self { parameters }
    }

    /// Uniform random salt, `HashSizeBytes` bytes wide.
    pub fn generate_salt(&self) -> SrpInteger {
        SrpInteger::random(self.parameters.hash_size_bytes())
    }

    /// `x = H(s | H(I | ":" | P))`. `identity` and `password` are taken
    /// as-is, UTF-8 encoded; neither is normalized or case-folded.
    pub fn derive_private_key(&self, salt: &SrpInteger, identity: &str, password: &str) -> SrpInteger {
        let hash = self.parameters.hash();
        let mut inner = Vec::new();
        inner.extend_from_slice(identity.as_bytes());
        inner.extend_from_slice(b":");
        inner.extend_from_slice(password.as_bytes());
        let identity_hash = hash.hash_bytes(&inner);
        hash.compute_hash([HashInput::Int(salt), HashInput::Int(&identity_hash)])
    }

    /// `v = g^x mod N`, padded to the negotiated width.
    pub fn derive_verifier(&self, private_key: &SrpInteger) -> SrpInteger {
        let v = self
            .parameters
            .g()
            .mod_pow(private_key, self.parameters.n())
            .expect("N is a fixed nonzero modulus");
        v.pad(self.parameters.padded_length())
    }

    /// Convenience wrapper bundling salt generation, private-key
    /// derivation, and verifier derivation into the single call the
    /// teacher's `generate_new_user_secrets` made — most callers doing
    /// one-shot enrollment don't need `x` or the salt separately.
    /// Callers changing a password without re-deriving everything
    /// should call `derive_private_key`/`derive_verifier` directly.
    pub fn enroll(&self, identity: &str, password: &str) -> (SrpInteger, SrpInteger) {
        let salt = self.generate_salt();
        let private_key = self.derive_private_key(&salt, identity, password);
        let verifier = self.derive_verifier(&private_key);
        (salt, verifier)
    }

    /// Samples a fresh ephemeral keypair `(a, A)`, resampling `a` in
    /// the vanishingly unlikely event that `A mod N == 0`.
    pub fn generate_ephemeral(&self) -> SrpEphemeral {
        loop {
            let secret = SrpInteger::random(self.parameters.hash_size_bytes());
            let public = self
                .parameters
                .g()
                .mod_pow(&secret, self.parameters.n())
                .expect("N is a fixed nonzero modulus");
            if !public.mod_rem(self.parameters.n()).is_zero() {
                return SrpEphemeral {
                    secret,
                    public: public.pad(self.parameters.padded_length()),
                };
            }
        }
    }

    /// Derives the session key and client proof `M1` from the
    /// client's own ephemeral secret `a`, the server's public
    /// ephemeral `B`, the enrollment salt and identity, and the
    /// client's private key `x`.
    pub fn derive_session(
        &self,
        client_secret_ephemeral: &SrpInteger,
        server_public_ephemeral: &SrpInteger,
        salt: &SrpInteger,
        identity: &str,
        private_key: &SrpInteger,
    ) -> Result<SrpSession> {
        let p = self.parameters;
        if server_public_ephemeral.mod_rem(p.n()).is_zero() {
            return Err(Srp6Error::IllegalParameter);
        }

        let client_public_ephemeral = p
            .g()
            .mod_pow(client_secret_ephemeral, p.n())
            .expect("N is a fixed nonzero modulus")
            .pad(p.padded_length());
        let server_public_ephemeral = server_public_ephemeral.pad(p.padded_length());
        debug!("A = {client_public_ephemeral:?}");
        debug!("B = {server_public_ephemeral:?}");

        let u = p.hash().compute_hash([
            HashInput::Int(&client_public_ephemeral),
            HashInput::Int(&server_public_ephemeral),
        ]);
        debug!("u = {u:?}");
        if u.is_zero() {
            return Err(Srp6Error::IllegalParameter);
        }

        let g_to_x = p
            .g()
            .mod_pow(private_key, p.n())
            .expect("N is a fixed nonzero modulus");
        let k_times_gx = p.k() * &g_to_x;
        let base = server_public_ephemeral.mod_sub(&k_times_gx, p.n());
        let u_times_x = &u * private_key;
        let exponent = &u_times_x + client_secret_ephemeral;
        let premaster_secret = base.mod_pow(&exponent, p.n()).expect("N is a fixed nonzero modulus");
        debug!("S = {premaster_secret:?}");

        let session_key = p.hash().compute_hash([HashInput::Int(&premaster_secret)]);
        debug!("K = {session_key:?}");

        let n_hash = p.hash().compute_hash([HashInput::Int(p.n())]);
        let g_hash = p.hash().compute_hash([HashInput::Int(p.g())]);
        let n_xor_g = n_hash.bitxor(&g_hash);
        let identity_hash = p.hash().hash_bytes(identity.as_bytes());
        let proof = p.hash().compute_hash([
            HashInput::Int(&n_xor_g),
            HashInput::Int(&identity_hash),
            HashInput::Int(salt),
            HashInput::Int(&client_public_ephemeral),
            HashInput::Int(&server_public_ephemeral),
            HashInput::Int(&session_key),
        ]);
        debug!("M1 = {proof:?}");

        Ok(SrpSession {
            key: session_key,
            proof,
        })
    }

    /// Recomputes the expected server proof `M2` and compares it
    /// against what the server sent. Returns `BadServerProof` on
    /// mismatch; the caller MUST then discard `client_session.key`.
    pub fn verify_session(
        &self,
        client_public_ephemeral: &SrpInteger,
        client_session: &SrpSession,
        server_proof: &SrpInteger,
    ) -> Result<()> {
        let padded_a = client_public_ephemeral.pad(self.parameters.padded_length());
        let expected = self.parameters.hash().compute_hash([
            HashInput::Int(&padded_a),
            HashInput::Int(&client_session.proof),
            HashInput::Int(&client_session.key),
        ]);
        if !expected.ct_eq(server_proof) {
            return Err(Srp6Error::BadServerProof);
        }
        Ok(())
    }
}
