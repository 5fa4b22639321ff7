use bitly::{Api, BitlyError};

// Shared demo account. May have been revoked by the service.
const LOGIN: &str = "pythonbitly";
const API_KEY: &str = "R_06871db6b7fd31a4242709acaf1b6648";

#[test]
#[ignore] // Run with: cargo test --test live_tests -- --ignored
fn test_round_trip() {
    let api = Api::new(LOGIN, API_KEY);

    let short = api.shorten("www.google.com").expect("failed to shorten");
    assert!(short.starts_with("http"), "unexpected short URL: {}", short);
    println!("Short URL = {}", short);

    let long = api.expand(&short).expect("failed to expand");
    assert!(long.contains("www.google.com"), "unexpected long URL: {}", long);
    println!("Expanded URL = {}", long);

    let info = api.info(&short).expect("failed to get info");
    assert!(!info.is_empty(), "expected non-empty info");
    println!("Info: {:?}", info);

    let stats = api.stats(&short).expect("failed to get stats");
    println!(
        "User clicks {:?}, total clicks: {:?}",
        stats.user_clicks, stats.total_clicks
    );
}

#[test]
#[ignore]
fn test_error_codes() {
    let api = Api::new(LOGIN, API_KEY);

    let errors = api.errors().expect("failed to list error codes");
    assert!(!errors.is_null(), "expected an error code list");
    println!("Errors: {}", errors);
}

#[test]
#[ignore]
fn test_bad_credentials() {
    let api = Api::new(LOGIN, "R_not_a_real_key");

    match api.shorten("www.google.com") {
        Err(BitlyError::Service { message, .. }) => {
            assert!(!message.is_empty(), "expected a service message");
            println!("Bad credentials test passed: {}", message);
        }
        other => panic!("expected BitlyError::Service, got {:?}", other),
    }
}
