//! Network loader against a loopback server answering one canned response.
#![cfg(feature = "fetch")]

use explorer_core::loader::{fetch, DataSource};
use explorer_core::LoadError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Minimal mock backend: accepts one connection, records the request line,
/// answers with `status` and `body`, then closes.
struct MockBackend {
    url: String,
    handle: JoinHandle<String>,
}

impl MockBackend {
    fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
        let url = format!("http://{}/v3.1/all", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut header = String::new();
            while reader.read_line(&mut header).unwrap() > 0 && header != "\r\n" {
                header.clear();
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_owned()
        });

        Self { url, handle }
    }

    /// The request line the server saw, e.g. `GET /v3.1/all HTTP/1.1`.
    fn request_line(self) -> String {
        self.handle.join().unwrap()
    }
}

const ONE_COUNTRY: &str = r#"[{"cca3":"GHA","name":{"common":"Ghana","official":"Republic of Ghana"},"region":"Africa","population":31072945}]"#;

#[test]
fn success_parses_the_body() {
    let backend = MockBackend::start("200 OK", ONE_COUNTRY);
    let dataset = DataSource::Url(backend.url.clone()).load().unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.countries()[0].name(), "Ghana");
    assert_eq!(backend.request_line(), "GET /v3.1/all HTTP/1.1");
}

#[test]
fn server_error_becomes_status() {
    let backend = MockBackend::start("500 Internal Server Error", r#"{"message":"boom"}"#);
    let url = backend.url.clone();
    match fetch(&url) {
        Err(LoadError::Status { status, url: failed }) => {
            assert_eq!(status, 500);
            assert_eq!(failed, url);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    backend.request_line();
}

#[test]
fn not_found_becomes_status() {
    let backend = MockBackend::start("404 Not Found", "");
    let err = fetch(&backend.url).unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }), "{err:?}");
    assert!(err.to_string().contains("HTTP 404"));
    backend.request_line();
}

#[test]
fn malformed_body_becomes_json_error() {
    let backend = MockBackend::start("200 OK", "<html>rate limited</html>");
    let err = fetch(&backend.url).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)), "{err:?}");
    backend.request_line();
}

#[test]
fn refused_connection_becomes_http_error() {
    // Bind then drop so the port is known to be closed.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = fetch(&format!("http://{addr}/v3.1/all")).unwrap_err();
    assert!(matches!(err, LoadError::Http(_)), "{err:?}");
}
