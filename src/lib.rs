/*!
An implementation of the Secure Remote Password protocol, version 6a
(SRP-6a), as standardized in [RFC5054].

SRP-6a is a password-authenticated key exchange: a client and a server
that each hold only a salted password verifier can mutually
authenticate and derive a shared strong session key over an untrusted
channel, without the password (or anything equivalent to it) ever
crossing the wire, and without relying on a PKI.

**NOTE**: use a group of 2048 bits or more in production; see
[`groups::Group`].

# Usage
See the [`demos`](./demos) directory for a full client/server walkthrough.

# Scope
This crate implements the protocol core: [`SrpParameters`], the
[`SrpInteger`] primitive, the [`hash::SrpHash`] adapter, and the
[`SrpClient`]/[`SrpServer`] operations. Network transport, account
storage, and enrollment policy are the caller's concern: every
operation here takes its inputs explicitly and returns new values; none
of it talks to a socket or a database.

[RFC5054]: (https://datatracker.ietf.org/doc/html/rfc5054)
*/
use derive_more::{Display, Error};

mod client;
pub mod groups;
pub mod hash;
mod parameters;
mod server;
pub(crate) mod srp_integer;

pub use client::SrpClient;
pub use groups::Group;
pub use hash::SrpHash;
pub use parameters::SrpParameters;
pub use server::SrpServer;
pub use srp_integer::{SrpInteger, SrpIntegerError};

/// A private/public scalar pair produced by `generate_ephemeral`: `(a,
/// A)` for the client, `(b, B)` for the server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SrpEphemeral {
    pub secret: SrpInteger,
    pub public: SrpInteger,
}

/// The result of a `derive_session` call: the strong session key `K`
/// and the proof attesting to it (`M1` for the client, `M2` for the
/// server).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SrpSession {
    pub key: SrpInteger,
    pub proof: SrpInteger,
}

/// encapsulates a [`Srp6Error`]
pub type Result<T> = std::result::Result<T, Srp6Error>;

#[derive(Error, Display, Debug, Clone, PartialEq, serde::Serialize)]
pub enum Srp6Error {
    /// A remote public value (`A` or `B`) was zero modulo `N`, or the
    /// scrambling parameter `u` derived from `A`/`B` was zero. Fatal
    /// for this session; the caller must restart with fresh
    /// ephemerals.
    #[display("a remote ephemeral was zero modulo N, or u was zero")]
    IllegalParameter,

    /// The server's recomputed `M1` did not match the client-supplied
    /// proof. The server must not reveal `M2` in this case.
    #[display("the client's proof did not match")]
    BadClientProof,

    /// The client's recomputed `M2` did not match the server-supplied
    /// proof. The client must discard its session key in this case.
    #[display("the server's proof did not match")]
    BadServerProof,

    /// Raised building `SrpParameters`: malformed hex, or `g` not
    /// smaller than `N`.
    #[display("invalid SRP parameters: {reason}")]
    Configuration { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full handshake, no network in between: shows what a transport
    /// would carry between each call.
    #[test]
    fn full_handshake_round_trips_with_default_parameters() {
        let parameters = SrpParameters::default();
        let client = SrpClient::new(&parameters);
        let server = SrpServer::new(&parameters);

        let username = "linus@folkdatorn.se";
        let password = "$uper$ecure";

        let salt = client.generate_salt();
        let private_key = client.derive_private_key(&salt, username, password);
        let verifier = client.derive_verifier(&private_key);

        let client_ephemeral = client.generate_ephemeral();
        let server_ephemeral = server.generate_ephemeral(&verifier);

        let client_session = client
            .derive_session(
                &client_ephemeral.secret,
                &server_ephemeral.public,
                &salt,
                username,
                &private_key,
            )
            .unwrap();

        let server_session = server
            .derive_session(
                &server_ephemeral.secret,
                &client_ephemeral.public,
                &salt,
                username,
                &verifier,
                &client_session.proof,
            )
            .unwrap();

        assert_eq!(client_session.key, server_session.key);

        client
            .verify_session(&client_ephemeral.public, &client_session, &server_session.proof)
            .expect("server proof should verify");
    }

    #[test]
    fn tampered_client_proof_is_rejected_without_leaking_m2() {
        let parameters = SrpParameters::default();
        let client = SrpClient::new(&parameters);
        let server = SrpServer::new(&parameters);

        let salt = client.generate_salt();
        let private_key = client.derive_private_key(&salt, "eve", "correct horse");
        let verifier = client.derive_verifier(&private_key);

        let client_ephemeral = client.generate_ephemeral();
        let server_ephemeral = server.generate_ephemeral(&verifier);

        let mut client_session = client
            .derive_session(
                &client_ephemeral.secret,
                &server_ephemeral.public,
                &salt,
                "eve",
                &private_key,
            )
            .unwrap();
        client_session.proof = &client_session.proof + &SrpInteger::from_decimal("1").unwrap();

        let err = server
            .derive_session(
                &server_ephemeral.secret,
                &client_ephemeral.public,
                &salt,
                "eve",
                &verifier,
                &client_session.proof,
            )
            .unwrap_err();
        assert_eq!(err, Srp6Error::BadClientProof);
    }
}
