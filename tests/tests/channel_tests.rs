//! End-to-end tests through the `vau` facade

use std::sync::Arc;

use vau::channel::{public_key_from_certificate, public_key_from_spki, CertificateError, SeededEntropy};
use vau::prelude::*;
use vau_tests::fixtures::{
    backend_keypair, backend_public, NIST_CERTIFICATE, VAU_CERTIFICATE, VAU_SPKI,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_request_roundtrip_via_certificate() {
    init_tracing();

    let backend = CryptoBackend::new().unwrap();
    let channel = VauChannel::new(&backend);
    let fetcher = StaticKeyFetcher::from_certificate(VAU_CERTIFICATE).unwrap();

    let request = b"GET /Task/4711 HTTP/1.1\r\nHost: erp.example.test\r\n\r\n";
    let wire = channel.encrypt_for_backend(request, &fetcher).unwrap().encode();

    assert_eq!(wire[0], 0x01);
    assert_eq!(wire.len(), 77 + request.len() + 16);

    let opened = VauChannel::decrypt_as_backend(&backend_keypair().unwrap(), &wire).unwrap();
    assert_eq!(opened, request);
}

#[test]
fn test_response_under_session_key() {
    // The client puts a session key in the request; the server answers under it.
    let backend = CryptoBackend::with_entropy(SeededEntropy::from_u64(99)).unwrap();

    let key = SymmetricKey::generate(&backend).unwrap();

    let nonce = backend.random_nonce().unwrap();
    let body = b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n";
    let sealed = vau::channel::aead::AeadCipher::new(&key)
        .unwrap()
        .encrypt(&nonce, body, None)
        .unwrap();

    let mut blob = nonce.to_vec();
    blob.extend_from_slice(&sealed);

    let opened = VauChannel::decrypt_with_session_key(key.as_bytes(), &blob).unwrap();
    assert_eq!(opened, body);
}

#[test]
fn test_certificate_and_spki_agree() {
    let from_cert = public_key_from_certificate(VAU_CERTIFICATE).unwrap();
    let from_spki = public_key_from_spki(VAU_SPKI).unwrap();
    assert_eq!(from_cert, from_spki);
    assert_eq!(from_cert, backend_public().unwrap());
    assert_eq!(&from_cert, backend_keypair().unwrap().public());
}

#[test]
fn test_foreign_curve_certificate_rejected() {
    assert_eq!(
        public_key_from_certificate(NIST_CERTIFICATE),
        Err(CertificateError::UnsupportedCurve)
    );

    let err = StaticKeyFetcher::from_certificate(NIST_CERTIFICATE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
}

#[test]
fn test_channel_shared_between_threads() {
    init_tracing();

    let backend = Arc::new(CryptoBackend::new().unwrap());
    let fetcher = StaticKeyFetcher::new(backend_public().unwrap());

    let wires: Vec<Vec<u8>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u8)
            .map(|i| {
                let backend = Arc::clone(&backend);
                scope.spawn(move || {
                    let channel = VauChannel::new(&backend);
                    channel
                        .encrypt_for_backend(&[i; 64], &fetcher)
                        .unwrap()
                        .encode()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let backend_key = backend_keypair().unwrap();
    for (i, wire) in wires.iter().enumerate() {
        let opened = VauChannel::decrypt_as_backend(&backend_key, wire).unwrap();
        assert_eq!(opened, vec![i as u8; 64]);
    }
}

#[test]
fn test_fetch_failure_surfaces_as_remote_key_fetch() {
    let backend = CryptoBackend::new().unwrap();
    let channel = VauChannel::new(&backend);

    let unreachable = || -> Result<CurvePoint> {
        Err(Error::Other {
            context: "dns",
            message: "no such host".into(),
        })
    };
    let err = channel.encrypt_for_backend(b"ping", &unreachable).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
}

#[test]
fn test_config_certificate_url() {
    let config = VauConfig::new("https://erp.example.test/api?x=1").unwrap();
    assert_eq!(
        config.certificate_url().unwrap().as_str(),
        "https://erp.example.test/api/VAUCertificate"
    );

    let err = VauConfig::new("ftp://erp.example.test").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}
