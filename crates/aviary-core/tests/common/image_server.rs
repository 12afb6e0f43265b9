//! Minimal HTTP/1.1 server for acquisition tests.
//!
//! Serves a single static body with a fixed status and counts incoming
//! requests, so tests can assert attempt budgets and zero-network
//! invariants. Connections are closed after each response, so the request
//! counter matches the number of GET attempts.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct ImageServer {
    /// Base URL of the served resource (e.g. "http://127.0.0.1:12345/image.png").
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl ImageServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server answering every GET with `200 OK` and `body`.
/// The server runs until the process exits.
pub fn serve(body: Vec<u8>) -> ImageServer {
    serve_with_status(body, 200)
}

/// Like `serve` but answers every request with `status`; the body is only
/// sent for 200.
pub fn serve_with_status(body: Vec<u8>, status: u16) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, status));
        }
    });
    ImageServer {
        url: format!("http://127.0.0.1:{}/image.png", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], status: u16) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let payload: &[u8] = if status == 200 { body } else { &[] };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(payload);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
