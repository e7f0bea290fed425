// tests/kat_tests.rs
use vau_tests::suites::kat::{load_all, load_suite_by_name, run_suite, Algorithm};

fn run(name: &str, algorithm: Algorithm) {
    let suite = load_suite_by_name(name).unwrap_or_else(|e| panic!("loading {name}: {e}"));
    assert_eq!(suite.algorithm, algorithm);

    println!("Running known-answer suite: {}", suite.suite);
    let passed = run_suite(&suite).unwrap_or_else(|e| panic!("{}: {e}", suite.suite));
    assert!(passed > 0);
}

#[test]
fn test_ecdh_kat() {
    run("ecdh", Algorithm::Ecdh);
}

#[test]
fn test_hkdf_kat() {
    run("hkdf", Algorithm::Hkdf);
}

#[test]
fn test_aes_gcm_kat() {
    run("aes_gcm", Algorithm::AesGcm);
}

#[test]
fn test_vau_request_kat() {
    run("vau_request", Algorithm::VauRequest);
}

#[test]
fn test_vau_response_kat() {
    run("vau_response", Algorithm::VauResponse);
}

#[test]
fn test_every_suite_loads() {
    let suites = load_all().unwrap();
    assert_eq!(suites.len(), 5);
    for suite in &suites {
        assert!(!suite.cases.is_empty(), "{} has no cases", suite.suite);
        let mut ids: Vec<u64> = suite.cases.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), suite.cases.len(), "{} repeats a case id", suite.suite);
    }
}

#[test]
fn test_missing_suite_is_io_error() {
    let err = load_suite_by_name("no_such_suite").unwrap_err();
    assert!(err.to_string().contains("no_such_suite.toml"));
}
