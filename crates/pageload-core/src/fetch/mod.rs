//! Resource loading for a [`ParsedUrl`].
//!
//! - `file:` reads the whole file.
//! - `data:` returns the inline content; no I/O.
//! - `http:` / `https:` performs one GET with `Connection: close` and returns
//!   the body with `\r\n` normalized to `\n`.

mod file;
mod http;
mod parse;
mod tls;

pub use http::{request_bytes, USER_AGENT};

use crate::error::LoadError;
use crate::url_model::ParsedUrl;

/// Loads the resource named by `url` and returns it as text.
pub fn load(url: &ParsedUrl) -> Result<String, LoadError> {
    tracing::info!("loading {} resource", url.scheme());
    let text = match url {
        ParsedUrl::File { path } => file::load_file(path)?,
        ParsedUrl::Data { content, .. } => content.clone(),
        ParsedUrl::Network {
            host,
            port,
            path,
            secure,
        } => http::load_network(host, port, path, *secure)?,
    };
    tracing::info!("loaded {} bytes of text", text.len());
    Ok(text)
}

/// UTF-8 decode; invalid sequences become U+FFFD.
fn decode_text(bytes: Vec<u8>, source: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::warn!("{} is not valid UTF-8; replacing invalid sequences", source);
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_content_returned_verbatim() {
        // A path-like or host-like payload must not be touched.
        let url = ParsedUrl::Data {
            media_type: "text/plain".to_string(),
            content: "/etc/passwd\r\nhttp://localhost:1/".to_string(),
        };
        assert_eq!(load(&url).unwrap(), "/etc/passwd\r\nhttp://localhost:1/");
    }

    #[test]
    fn nonexistent_file_fails_file_open() {
        let url = ParsedUrl::File {
            path: "/definitely/not/here/page.html".to_string(),
        };
        assert!(matches!(load(&url), Err(LoadError::FileOpen { .. })));
    }

    #[test]
    fn decode_text_is_lossy() {
        assert_eq!(decode_text(b"ok".to_vec(), "t"), "ok");
        assert_eq!(decode_text(vec![0xc3], "t"), "\u{fffd}");
    }
}
