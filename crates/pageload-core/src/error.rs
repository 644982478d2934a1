//! Error types for URL parsing and resource loading.
//!
//! Every error is fatal to the single load attempt that raised it; nothing in
//! this crate retries.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A URL string that could not be classified into a [`crate::url_model::ParsedUrl`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("URL must have a scheme")]
    MissingScheme,
    #[error("unsupported URL scheme: \"{0}\"")]
    UnsupportedScheme(String),
    #[error("network URL must be '<scheme>://host[:port][/path]' without spaces or control characters")]
    MalformedNetworkUrl,
    #[error("URL must have a host")]
    MissingHost,
    #[error("'file' URL must have a path")]
    MissingPath,
    #[error("'file' URL path must be absolute: {0}")]
    RelativePath(String),
    #[error("'data' URL must have a comma before its content")]
    MissingComma,
    #[error("'data' URL must have a content")]
    EmptyContent,
}

/// Failure while loading an already parsed URL.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open file \"{}\"", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read file \"{}\"", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to connect to {host}:{port}")]
    Connect {
        host: String,
        port: String,
        #[source]
        source: io::Error,
    },
    #[error("TLS handshake with {host} failed")]
    TlsHandshake {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("transport error")]
    Transport(#[source] io::Error),
    #[error("ill-formed HTTP response: {0}")]
    MalformedResponse(String),
    #[error("unsupported response encoding ({header}); chunked transfer encoding and content encoding are not supported")]
    UnsupportedEncoding { header: String },
}

/// Either half of a [`crate::client::Client`] lifecycle failing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL")]
    InvalidUrl(#[from] UrlError),
    #[error("load failed")]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_error_messages_name_the_problem() {
        assert_eq!(
            UrlError::UnsupportedScheme("ftp".to_string()).to_string(),
            "unsupported URL scheme: \"ftp\""
        );
        assert_eq!(UrlError::MissingHost.to_string(), "URL must have a host");
    }

    #[test]
    fn load_error_keeps_io_source() {
        let err = LoadError::FileOpen {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to open file \"/nope\"");
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "gone");
    }

    #[test]
    fn top_level_error_wraps_both_kinds() {
        let e: Error = UrlError::MissingScheme.into();
        assert!(matches!(e, Error::InvalidUrl(UrlError::MissingScheme)));
        let e: Error = LoadError::MalformedResponse("x".to_string()).into();
        assert!(matches!(e, Error::Load(LoadError::MalformedResponse(_))));
    }
}
