//! Parse a raw HTTP/1.1 response (read until close) into headers and body.

use std::collections::HashMap;

use crate::error::LoadError;

/// Response after parsing. The status line is kept only for logging.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status_line: String,
    /// Lowercased name -> trimmed value; later duplicates overwrite earlier ones.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Headers whose presence means the body needs decoding we do not implement.
const UNSUPPORTED_ENCODING_HEADERS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// Next `\n`-terminated line starting at `*pos`, without its `\r\n` / `\n`.
fn next_line<'a>(raw: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let rest = &raw[*pos..];
    let end = rest.iter().position(|&b| b == b'\n')?;
    *pos += end + 1;
    let line = &rest[..end];
    Some(line.strip_suffix(b"\r").unwrap_or(line))
}

pub(crate) fn parse_response(raw: &[u8]) -> Result<HttpResponse, LoadError> {
    let mut pos = 0;
    let status_line = next_line(raw, &mut pos)
        .ok_or_else(|| LoadError::MalformedResponse("missing status line".to_string()))?;
    let status_line = String::from_utf8_lossy(status_line).into_owned();

    let mut headers = HashMap::new();
    loop {
        let line = next_line(raw, &mut pos).ok_or_else(|| {
            LoadError::MalformedResponse("response ended before the end of the headers".to_string())
        })?;
        if line.is_empty() {
            break;
        }
        let line = String::from_utf8_lossy(line);
        let (name, value) = line.split_once(':').ok_or_else(|| {
            LoadError::MalformedResponse(format!("header line without a colon: {:?}", line))
        })?;
        // No whitespace inside or around a field name (RFC 9112 section 5.1).
        if name.is_empty() || name.contains(|c: char| c.is_ascii_whitespace()) {
            return Err(LoadError::MalformedResponse(format!(
                "invalid header name: {:?}",
                name
            )));
        }
        headers.insert(name.to_lowercase(), value.trim().to_string());
    }

    Ok(HttpResponse {
        status_line,
        headers,
        body: raw[pos..].to_vec(),
    })
}

/// Fails if the response declares a transfer or content encoding (value ignored).
pub(crate) fn reject_encoded(headers: &HashMap<String, String>) -> Result<(), LoadError> {
    match UNSUPPORTED_ENCODING_HEADERS
        .iter()
        .find(|name| headers.contains_key(**name))
    {
        Some(name) => Err(LoadError::UnsupportedEncoding {
            header: name.to_string(),
        }),
        None => Ok(()),
    }
}

/// Replaces every `\r\n` with `\n`.
pub(crate) fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
