//! One-shot HTTP/1.1 GET over a fresh TCP (optionally TLS) connection.
//!
//! Stages: connect, TLS handshake (https only), send request, read until the
//! peer closes, parse headers, return body. The first failure ends the load.

use std::io::{self, Read, Write};
use std::net::TcpStream;

use super::parse::{normalize_newlines, parse_response, reject_encoded};
use super::{decode_text, tls};
use crate::error::LoadError;

/// Sent verbatim as the `User-Agent` request header.
pub const USER_AGENT: &str = concat!("pageload/", env!("CARGO_PKG_VERSION"));

const READ_BUF_SIZE: usize = 8 * 1024;

/// Connects to `host:port` and performs the exchange. The connection is
/// dropped (closed) before returning.
pub(crate) fn load_network(
    host: &str,
    port: &str,
    path: &str,
    secure: bool,
) -> Result<String, LoadError> {
    tracing::debug!("connecting to {}:{}", host, port);
    let tcp = TcpStream::connect(format!("{}:{}", host, port)).map_err(|source| {
        LoadError::Connect {
            host: host.to_string(),
            port: port.to_string(),
            source,
        }
    })?;

    if secure {
        tracing::debug!("starting TLS handshake with {}", host);
        let mut stream = tls::handshake(tcp, host)?;
        exchange(&mut stream, host, path)
    } else {
        let mut stream = tcp;
        exchange(&mut stream, host, path)
    }
}

/// The request bytes for `GET path` to `host`.
pub fn request_bytes(host: &str, path: &str) -> Vec<u8> {
    format!(
        "GET {} HTTP/1.1\r\n\
         Host: {}\r\n\
         Connection: close\r\n\
         User-Agent: {}\r\n\
         \r\n",
        path, host, USER_AGENT
    )
    .into_bytes()
}

/// Writes the request, reads the response to end of stream and returns the
/// newline-normalized body.
pub(crate) fn exchange<S: Read + Write>(
    stream: &mut S,
    host: &str,
    path: &str,
) -> Result<String, LoadError> {
    stream
        .write_all(&request_bytes(host, path))
        .and_then(|()| stream.flush())
        .map_err(LoadError::Transport)?;
    tracing::debug!("sent GET {} to {}", path, host);

    let raw = read_to_close(stream)?;
    tracing::debug!("received {} bytes from {}", raw.len(), host);

    let response = parse_response(&raw)?;
    tracing::debug!(
        "{} ({} headers)",
        response.status_line,
        response.headers.len()
    );
    reject_encoded(&response.headers)?;

    let body = decode_text(response.body, host);
    Ok(normalize_newlines(&body))
}

/// Reads until the peer closes the connection.
fn read_to_close<S: Read>(stream: &mut S) -> Result<Vec<u8>, LoadError> {
    let mut raw = Vec::new();
    let mut buf = [0u8; READ_BUF_SIZE];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // rustls reports a close without close_notify this way.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("peer closed without close_notify; treating as end of stream");
                break;
            }
            Err(e) => return Err(LoadError::Transport(e)),
        }
    }
    Ok(raw)
}
