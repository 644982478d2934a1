//! Minimal TCP server for integration tests.
//!
//! Accepts one connection, records the request bytes, writes a canned
//! response and closes the connection (the client reads until close).

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Read until the blank line that ends an HTTP request head.
    RequestHead,
    /// Read a single chunk, whatever it is (e.g. a TLS ClientHello).
    SingleChunk,
}

pub struct CannedServer {
    pub port: u16,
    requests: Receiver<Vec<u8>>,
}

impl CannedServer {
    pub fn url(&self, scheme: &str, path: &str) -> String {
        format!("{}://127.0.0.1:{}{}", scheme, self.port, path)
    }

    /// Bytes the client sent on the first connection.
    pub fn received(&self) -> Vec<u8> {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw a request")
    }
}

pub fn start(response: &[u8]) -> CannedServer {
    start_with_mode(response, ReadMode::RequestHead)
}

pub fn start_with_mode(response: &[u8], mode: ReadMode) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let response = response.to_vec();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            let request = handle(stream, &response, mode);
            let _ = tx.send(request);
        }
    });
    CannedServer { port, requests: rx }
}

fn handle(mut stream: TcpStream, response: &[u8], mode: ReadMode) -> Vec<u8> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
        if mode == ReadMode::SingleChunk || request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    let _ = stream.write_all(response);
    let _ = stream.flush();
    request
}

/// A port on localhost with nothing listening.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}
