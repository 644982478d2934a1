//! A client bound to one URL that performs one load.

use crate::error::{Error, UrlError};
use crate::fetch;
use crate::url_model::{self, ParseOptions, ParsedUrl};

/// URL parsed at construction; [`Client::load`] consumes the client so each
/// instance issues exactly one load.
#[derive(Debug)]
pub struct Client {
    url: ParsedUrl,
}

impl Client {
    /// Parses `url` with the default (strict) options.
    pub fn new(url: &str) -> Result<Self, UrlError> {
        Self::with_options(url, &ParseOptions::default())
    }

    pub fn with_options(url: &str, options: &ParseOptions) -> Result<Self, UrlError> {
        let url = url_model::parse_with(url, options)?;
        tracing::debug!("parsed URL: {:?}", url);
        Ok(Self { url })
    }

    pub fn load(self) -> Result<String, Error> {
        Ok(fetch::load(&self.url)?)
    }
}
