//! `http:` / `https:` locations.

use super::{strip_authority_marker, ParsedUrl};
use crate::error::UrlError;

const DEFAULT_HTTP_PORT: &str = "80";
const DEFAULT_HTTPS_PORT: &str = "443";

/// Parses the part after `http:` / `https:`.
pub(super) fn parse_network(rest: &str, secure: bool) -> Result<ParsedUrl, UrlError> {
    let rest = strip_authority_marker(rest).ok_or(UrlError::MalformedNetworkUrl)?;

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, "/"),
    };

    let default_port = if secure {
        DEFAULT_HTTPS_PORT
    } else {
        DEFAULT_HTTP_PORT
    };
    let (host, port) = match authority.split_once(':') {
        Some((host, "")) => (host, default_port),
        Some((host, port)) => (host, port),
        None => (authority, default_port),
    };

    if host.is_empty() {
        return Err(UrlError::MissingHost);
    }
    // host and path are written into the request head verbatim.
    if [host, port, path].iter().any(|part| has_unsafe_bytes(part)) {
        return Err(UrlError::MalformedNetworkUrl);
    }

    Ok(ParsedUrl::Network {
        host: host.to_string(),
        port: port.to_string(),
        path: path.to_string(),
        secure,
    })
}

/// Space or ASCII control characters (CR, LF, NUL, ...).
fn has_unsafe_bytes(part: &str) -> bool {
    part.bytes().any(|b| b == b' ' || b.is_ascii_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(url: &ParsedUrl) -> (&str, &str, &str) {
        match url {
            ParsedUrl::Network {
                host, port, path, ..
            } => (host.as_str(), port.as_str(), path.as_str()),
            other => panic!("expected network url, got {:?}", other),
        }
    }

    #[test]
    fn requires_double_slash() {
        assert_eq!(
            parse_network("example.com/", false),
            Err(UrlError::MalformedNetworkUrl)
        );
        assert_eq!(
            parse_network("/example.com/", true),
            Err(UrlError::MalformedNetworkUrl)
        );
    }

    #[test]
    fn empty_port_keeps_default() {
        let url = parse_network("//example.com:/x", true).unwrap();
        assert_eq!(parts(&url), ("example.com", "443", "/x"));
    }

    #[test]
    fn port_without_host_is_missing_host() {
        assert_eq!(parse_network("//:8080/", false), Err(UrlError::MissingHost));
    }

    #[test]
    fn path_keeps_query_and_nested_segments() {
        let url = parse_network("//example.com/a/b/c.html?x=1", false).unwrap();
        assert_eq!(parts(&url), ("example.com", "80", "/a/b/c.html?x=1"));
    }

    #[test]
    fn line_breaks_and_spaces_are_rejected() {
        for rest in [
            "//example.com/a HTTP/1.1\r\nX-Injected: 1\r\nFoo: /b",
            "//example.com/a\nb",
            "//example.com/a b",
            "//exa\rmple.com/",
            "//example.com:80\t/",
            "//example.com/\0",
        ] {
            assert_eq!(
                parse_network(rest, false),
                Err(UrlError::MalformedNetworkUrl),
                "{:?}",
                rest
            );
        }
    }

    #[test]
    fn host_only_defaults_path() {
        let url = parse_network("//localhost:3000", false).unwrap();
        assert_eq!(parts(&url), ("localhost", "3000", "/"));
    }
}
