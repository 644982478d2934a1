//! CLI for the pageload client.

mod display;

use anyhow::{Context, Result};
use clap::Parser;
use pageload_core::config::{self, PageloadConfig};
use pageload_core::{Client, ParseOptions};
use std::io::{self, Write};
use std::path::PathBuf;

pub use display::{display, strip_tags};

/// Page loaded when no URL is given and the config names none.
pub const DEFAULT_URL: &str = concat!(
    "file://",
    env!("CARGO_MANIFEST_DIR"),
    "/resources/example.html"
);

/// Load a URL and print its text.
#[derive(Debug, Parser)]
#[command(name = "pageload")]
#[command(about = "Load http, https, file or data URLs and print their text", long_about = None)]
pub struct Cli {
    /// URLs to load. Defaults to the configured `default_url`, else a bundled example page.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read configuration from this TOML file instead of ~/.config/pageload/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept `file:` URLs with a relative path.
    #[arg(long)]
    pub allow_relative_files: bool,

    /// Accept `data:` URLs with empty content.
    #[arg(long)]
    pub allow_empty_data: bool,

    /// Print the loaded text as-is instead of stripping tags.
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_default()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let options = self.parse_options(&cfg);
        let urls = self.urls_or_default(&cfg);
        let texts = load_all(&urls, options).await?;

        for text in &texts {
            if self.raw {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
            } else {
                display(text)?;
            }
        }
        Ok(())
    }

    /// Config values, relaxed further by command-line flags.
    pub fn parse_options(&self, cfg: &PageloadConfig) -> ParseOptions {
        let mut options = cfg.parse_options();
        if self.allow_relative_files {
            options.require_absolute_file_path = false;
        }
        if self.allow_empty_data {
            options.allow_empty_data = true;
        }
        options
    }

    pub fn urls_or_default(&self, cfg: &PageloadConfig) -> Vec<String> {
        if !self.urls.is_empty() {
            return self.urls.clone();
        }
        vec![cfg
            .default_url
            .clone()
            .unwrap_or_else(|| DEFAULT_URL.to_string())]
    }
}

/// Parses every URL up front, then loads each one on its own blocking task.
/// Returns the texts in argument order, or the first failure in that order.
pub async fn load_all(urls: &[String], options: ParseOptions) -> Result<Vec<String>> {
    let clients = urls
        .iter()
        .map(|url| {
            Client::with_options(url, &options).with_context(|| format!("invalid URL {}", url))
        })
        .collect::<Result<Vec<_>>>()?;

    let handles: Vec<_> = clients
        .into_iter()
        .zip(urls)
        .map(|(client, url)| {
            tracing::info!("loading {}", url);
            (url, tokio::task::spawn_blocking(move || client.load()))
        })
        .collect();

    let mut texts = Vec::with_capacity(handles.len());
    for (url, handle) in handles {
        let text = handle
            .await
            .with_context(|| format!("load task for {} panicked", url))?
            .with_context(|| format!("failed to load {}", url))?;
        texts.push(text);
    }
    Ok(texts)
}
