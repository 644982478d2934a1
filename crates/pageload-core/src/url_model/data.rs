//! `data:` payloads. No base64 or percent decoding; content is taken verbatim.

use super::ParsedUrl;
use crate::error::UrlError;

pub(super) fn parse_data(rest: &str, allow_empty: bool) -> Result<ParsedUrl, UrlError> {
    let (media_type, content) = rest.split_once(',').ok_or(UrlError::MissingComma)?;
    if content.is_empty() && !allow_empty {
        return Err(UrlError::EmptyContent);
    }
    Ok(ParsedUrl::Data {
        media_type: media_type.to_string(),
        content: content.to_string(),
    })
}
