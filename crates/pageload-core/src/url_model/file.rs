//! `file:` paths.

use std::path::Path;

use super::{strip_authority_marker, ParsedUrl};
use crate::error::UrlError;

pub(super) fn parse_file(rest: &str, require_absolute: bool) -> Result<ParsedUrl, UrlError> {
    let path = strip_authority_marker(rest).unwrap_or(rest);
    if path.is_empty() {
        return Err(UrlError::MissingPath);
    }
    if require_absolute && Path::new(path).is_relative() {
        return Err(UrlError::RelativePath(path.to_string()));
    }
    Ok(ParsedUrl::File {
        path: path.to_string(),
    })
}
