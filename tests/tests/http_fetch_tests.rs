//! Certificate download against a throwaway local HTTP server

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use vau::prelude::*;
use vau_tests::fixtures::{backend_public, VAU_CERTIFICATE};

/// Serve one response, reporting the request line back to the test
fn serve_once(status: &'static str, body: &'static [u8]) -> (String, mpsc::Receiver<String>) {
    serve_once_with(status, body, true)
}

/// Without a declared length the body runs until the connection closes
fn serve_once_with(
    status: &'static str,
    body: &'static [u8],
    declare_length: bool,
) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }
        tx.send(request_line.trim_end().to_string()).unwrap();

        let mut stream = stream;
        let length = if declare_length {
            format!("Content-Length: {}\r\n", body.len())
        } else {
            String::new()
        };
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/pkix-cert\r\n{length}Connection: close\r\n\r\n"
        )
        .unwrap();
        // the client may hang up once it has seen enough
        let _ = stream.write_all(body);
        let _ = stream.flush();
    });

    (format!("http://{addr}/erp"), rx)
}

#[test]
fn test_fetches_certificate_from_fachdienst() {
    let (base, requests) = serve_once("200 OK", VAU_CERTIFICATE);
    let config = VauConfig::new(&base)
        .unwrap()
        .with_fetch_timeout(Duration::from_secs(5));
    let fetcher = HttpCertificateFetcher::new(&config).unwrap();
    assert!(fetcher.url().as_str().ends_with("/erp/VAUCertificate"));

    let key = fetcher.fetch_public_key().unwrap();
    assert_eq!(key, backend_public().unwrap());

    let request_line = requests.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(request_line, "GET /erp/VAUCertificate HTTP/1.1");
}

#[test]
fn test_encrypts_with_downloaded_key() {
    let (base, _requests) = serve_once("200 OK", VAU_CERTIFICATE);
    let fetcher = HttpCertificateFetcher::new(&VauConfig::new(&base).unwrap()).unwrap();

    let backend = CryptoBackend::new().unwrap();
    let message = VauChannel::new(&backend)
        .encrypt_for_backend(b"GET /metadata HTTP/1.1\r\n\r\n", &fetcher)
        .unwrap();
    assert_eq!(message.version(), 1);
}

#[test]
fn test_http_error_status_is_remote_key_fetch() {
    let (base, _requests) = serve_once("404 Not Found", b"");
    let fetcher = HttpCertificateFetcher::new(&VauConfig::new(&base).unwrap()).unwrap();

    let err = fetcher.fetch_public_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
    assert!(err.to_string().contains("404"));
}

#[test]
fn test_garbage_body_is_remote_key_fetch() {
    let (base, _requests) = serve_once("200 OK", b"<html>maintenance</html>");
    let fetcher = HttpCertificateFetcher::new(&VauConfig::new(&base).unwrap()).unwrap();

    let err = fetcher.fetch_public_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
}

#[test]
fn test_unreachable_host_is_remote_key_fetch() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = VauConfig::new(&format!("http://{addr}"))
        .unwrap()
        .with_fetch_timeout(Duration::from_secs(2));
    let fetcher = HttpCertificateFetcher::new(&config).unwrap();

    let backend = CryptoBackend::new().unwrap();
    let err = VauChannel::new(&backend)
        .encrypt_for_backend(b"x", &fetcher)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
}

static OVERSIZED: [u8; 64 * 1024] = [0x30; 64 * 1024];

#[test]
fn test_oversized_certificate_is_remote_key_fetch() {
    for declare_length in [true, false] {
        let (base, _requests) = serve_once_with("200 OK", &OVERSIZED, declare_length);
        let fetcher = HttpCertificateFetcher::new(&VauConfig::new(&base).unwrap()).unwrap();

        let err = fetcher.fetch_certificate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteKeyFetch);
        assert!(err.to_string().contains("exceeds"), "{err}");
    }
}
