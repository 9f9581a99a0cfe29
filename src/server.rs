/*!
The server half of the exchange: [`SrpServer`] never sees a password
or private key, only the verifier stored at enrollment.
*/
use log::debug;

use crate::hash::HashInput;
use crate::parameters::SrpParameters;
use crate::srp_integer::SrpInteger;
use crate::{Result, Srp6Error, SrpEphemeral, SrpSession};

/// Bound to one [`SrpParameters`]; holds no per-session state, so a
/// single `SrpServer` can authenticate any number of concurrent logins
/// against a single store of `(salt, verifier, identity)` rows.
pub struct SrpServer<'a> {
    parameters: &'a SrpParameters,
}

impl<'a> SrpServer<'a> {
    pub fn new(parameters: &'a SrpParameters) -> Self {
        Self { parameters }
    }

    /// Samples a fresh ephemeral keypair `(b, B)` for a given
    /// verifier, resampling `b` if `B mod N == 0`.
    pub fn generate_ephemeral(&self, verifier: &SrpInteger) -> SrpEphemeral {
        let p = self.parameters;
        loop {
            let secret = SrpInteger::random(p.hash_size_bytes());
            let g_to_b = p.g().mod_pow(&secret, p.n()).expect("N is a fixed nonzero modulus");
            let k_times_v = p.k() * verifier;
            let public = (&k_times_v + &g_to_b).mod_rem(p.n());
            if !public.is_zero() {
                return SrpEphemeral {
                    secret,
                    public: public.pad(p.padded_length()),
                };
            }
        }
    }

    /// Derives the session key and verifies the client's proof `M1`,
    /// returning the server proof `M2` to send back. On a proof
    /// mismatch, neither `M2` nor the session key is returned.
    pub fn derive_session(
        &self,
        server_secret_ephemeral: &SrpInteger,
        client_public_ephemeral: &SrpInteger,
        salt: &SrpInteger,
        identity: &str,
        verifier: &SrpInteger,
        client_proof: &SrpInteger,
    ) -> Result<SrpSession> {
        let p = self.parameters;
        if client_public_ephemeral.mod_rem(p.n()).is_zero() {
            return Err(Srp6Error::IllegalParameter);
        }
        let client_public_ephemeral = client_public_ephemeral.pad(p.padded_length());

        let g_to_b = p
            .g()
            .mod_pow(server_secret_ephemeral, p.n())
            .expect("N is a fixed nonzero modulus");
        let k_times_v = p.k() * verifier;
        let server_public_ephemeral = (&k_times_v + &g_to_b).mod_rem(p.n()).pad(p.padded_length());
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

        let v_to_u = verifier.mod_pow(&u, p.n()).expect("N is a fixed nonzero modulus");
        let base = &client_public_ephemeral * &v_to_u;
        let premaster_secret = base
            .mod_pow(server_secret_ephemeral, p.n())
            .expect("N is a fixed nonzero modulus");
        debug!("S = {premaster_secret:?}");

        let session_key = p.hash().compute_hash([HashInput::Int(&premaster_secret)]);
        debug!("K = {session_key:?}");

        let n_hash = p.hash().compute_hash([HashInput::Int(p.n())]);
        let g_hash = p.hash().compute_hash([HashInput::Int(p.g())]);
        let n_xor_g = n_hash.bitxor(&g_hash);
        let identity_hash = p.hash().hash_bytes(identity.as_bytes());
        let expected_client_proof = p.hash().compute_hash([
            HashInput::Int(&n_xor_g),
            HashInput::Int(&identity_hash),
            HashInput::Int(salt),
            HashInput::Int(&client_public_ephemeral),
            HashInput::Int(&server_public_ephemeral),
            HashInput::Int(&session_key),
        ]);

        if !expected_client_proof.ct_eq(client_proof) {
            debug!("rejected client proof for identity {identity:?}");
            return Err(Srp6Error::BadClientProof);
        }

        let server_proof = p.hash().compute_hash([
            HashInput::Int(&client_public_ephemeral),
            HashInput::Int(client_proof),
            HashInput::Int(&session_key),
        ]);
        debug!("M2 = {server_proof:?}");

        Ok(SrpSession {
            key: session_key,
            proof: server_proof,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SrpClient;

    #[test]
    fn ephemeral_public_key_is_never_zero_mod_n() {
        let parameters = SrpParameters::default();
        let client = SrpClient::new(&parameters);
        let server = SrpServer::new(&parameters);
        let salt = client.generate_salt();
        let x = client.derive_private_key(&salt, "bob", "hunter2");
        let verifier = client.derive_verifier(&x);
        for _ in 0..16 {
            let ephemeral = server.generate_ephemeral(&verifier);
            assert!(!ephemeral.public.mod_rem(parameters.n()).is_zero());
        }
    }

    #[test]
    fn derive_session_rejects_client_ephemeral_that_is_zero_mod_n() {
        let parameters = SrpParameters::default();
        let client = SrpClient::new(&parameters);
        let server = SrpServer::new(&parameters);
        let salt = client.generate_salt();
        let x = client.derive_private_key(&salt, "bob", "hunter2");
        let verifier = client.derive_verifier(&x);
        let server_ephemeral = server.generate_ephemeral(&verifier);
        let zero = parameters.n().clone();
        let m1 = SrpInteger::from_hex("00").unwrap();
        let err = server
            .derive_session(&server_ephemeral.secret, &zero, &salt, "bob", &verifier, &m1)
            .unwrap_err();
        assert_eq!(err, Srp6Error::IllegalParameter);
    }

    #[test]
    fn derive_session_rejects_wrong_client_proof() {
        let parameters = SrpParameters::default();
        let client = SrpClient::new(&parameters);
        let server = SrpServer::new(&parameters);
        let salt = client.generate_salt();
        let x = client.derive_private_key(&salt, "bob", "hunter2");
        let verifier = client.derive_verifier(&x);

        let client_ephemeral = client.generate_ephemeral();
        let server_ephemeral = server.generate_ephemeral(&verifier);

        let bogus_proof = SrpInteger::random(parameters.hash_size_bytes());
        let err = server
            .derive_session(
                &server_ephemeral.secret,
                &client_ephemeral.public,
                &salt,
                "bob",
                &verifier,
                &bogus_proof,
            )
            .unwrap_err();
        assert_eq!(err, Srp6Error::BadClientProof);
    }
}
