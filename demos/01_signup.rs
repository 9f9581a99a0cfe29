use srp6::{SrpClient, SrpParameters};

fn main() {
    // this is what a user would enter in a form / terminal
    let new_username = "Bob";
    let password = "secret-password";

    let parameters = SrpParameters::default();
    let client = SrpClient::new(&parameters);

    let salt = client.generate_salt();
    let private_key = client.derive_private_key(&salt, new_username, password);
    let verifier = client.derive_verifier(&private_key);

    assert_eq!(salt.hex_width(), parameters.hash_size_bytes() * 2);
    assert_eq!(verifier.hex_width(), parameters.padded_length());

    println!("Simulating a server and signup with user {new_username}");
    println!(" - User's username   [I] = {new_username:?}");
    println!(" - Salt              [s] = {salt}");
    println!(" - Password verifier [v] = {verifier}");
    println!("This is a one time action, normally this data is stored in a user database");
    println!();
    println!("Next authentication process `cargo run --example 02_authentication`");
}
