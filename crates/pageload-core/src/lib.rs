pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod fetch;
pub mod url_model;

pub use client::Client;
pub use error::{Error, LoadError, UrlError};
pub use url_model::{ParseOptions, ParsedUrl};

