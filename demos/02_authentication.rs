use srp6::{SrpClient, SrpParameters, SrpServer};
use std::time::{Duration, Instant};

fn main() {
    let username = "Bob";
    let password = "secret-password";
    let parameters = SrpParameters::default();
    let client = SrpClient::new(&parameters);
    let server = SrpServer::new(&parameters);

    // new user: those are sent to the server and stored there
    let salt = client.generate_salt();
    let private_key = client.derive_private_key(&salt, username, password);
    let verifier = client.derive_verifier(&private_key);

    let mut durations = Duration::default();
    #[cfg(debug_assertions)]
    const NLOOPS: u32 = 10;
    #[cfg(not(debug_assertions))]
    const NLOOPS: u32 = 100;

    for _ in 0..NLOOPS {
        let start = Instant::now();

        // client side
        let client_ephemeral = client.generate_ephemeral();
        // server side
        let server_ephemeral = server.generate_ephemeral(&verifier);

        // client side
        let client_session = client
            .derive_session(
                &client_ephemeral.secret,
                &server_ephemeral.public,
                &salt,
                username,
                &private_key,
            )
            .expect("client should derive a session");

        // server side
        let server_session = server
            .derive_session(
                &server_ephemeral.secret,
                &client_ephemeral.public,
                &salt,
                username,
                &verifier,
                &client_session.proof,
            )
            .expect("invalid client proof");

        // client side
        client
            .verify_session(&client_ephemeral.public, &client_session, &server_session.proof)
            .expect("invalid server proof");

        assert_eq!(client_session.key, server_session.key, "not same secrets");

        durations = durations.checked_add(start.elapsed()).unwrap();
    }

    println!("Time elapsed in auth is: {:?}", durations / NLOOPS);
}
