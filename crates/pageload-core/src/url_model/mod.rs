//! URL modeling: classify a URL string into the one scheme family we can load.
//!
//! Grammar is `<scheme>:<rest>`; the scheme picks the parser for `<rest>`:
//! - `http` / `https`: `//host[:port][/path]`
//! - `file`: `[//]path`
//! - `data`: `<media type>,<content>`

mod data;
mod file;
mod network;

use crate::error::UrlError;

pub const HTTP_SCHEME: &str = "http";
pub const HTTPS_SCHEME: &str = "https";
pub const FILE_SCHEME: &str = "file";
pub const DATA_SCHEME: &str = "data";

/// A URL classified by scheme family. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUrl {
    /// `http://` or `https://` location. `port` is kept as text and only
    /// interpreted when connecting.
    Network {
        host: String,
        port: String,
        path: String,
        secure: bool,
    },
    /// Local file path.
    File { path: String },
    /// Inline payload; `media_type` may be empty.
    Data { media_type: String, content: String },
}

/// Strictness knobs for the `file:` and `data:` grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject `file:` URLs whose path is relative.
    pub require_absolute_file_path: bool,
    /// Accept `data:` URLs whose content after the comma is empty.
    pub allow_empty_data: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            require_absolute_file_path: true,
            allow_empty_data: false,
        }
    }
}

impl ParsedUrl {
    /// Scheme name this variant was parsed from.
    pub fn scheme(&self) -> &'static str {
        match self {
            ParsedUrl::Network { secure: true, .. } => HTTPS_SCHEME,
            ParsedUrl::Network { secure: false, .. } => HTTP_SCHEME,
            ParsedUrl::File { .. } => FILE_SCHEME,
            ParsedUrl::Data { .. } => DATA_SCHEME,
        }
    }
}

/// Parses `url` with the default (strict) options.
pub fn parse(url: &str) -> Result<ParsedUrl, UrlError> {
    parse_with(url, &ParseOptions::default())
}

/// Parses `url`. Pure: no I/O, same input gives the same result.
pub fn parse_with(url: &str, options: &ParseOptions) -> Result<ParsedUrl, UrlError> {
    let (scheme, rest) = url.split_once(':').ok_or(UrlError::MissingScheme)?;

    match scheme.to_ascii_lowercase().as_str() {
        HTTP_SCHEME => network::parse_network(rest, false),
        HTTPS_SCHEME => network::parse_network(rest, true),
        FILE_SCHEME => file::parse_file(rest, options.require_absolute_file_path),
        DATA_SCHEME => data::parse_data(rest, options.allow_empty_data),
        _ => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}

/// Strips the `//` that introduces an authority, if present.
fn strip_authority_marker(rest: &str) -> Option<&str> {
    rest.strip_prefix("//")
}
