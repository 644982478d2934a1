use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::ParseOptions;

/// Optional configuration loaded from `~/.config/pageload/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageloadConfig {
    /// Reject `file:` URLs with a relative path.
    pub require_absolute_file_path: bool,
    /// Accept `data:` URLs with nothing after the comma.
    pub allow_empty_data: bool,
    /// URL loaded when none is given on the command line.
    pub default_url: Option<String>,
}

impl Default for PageloadConfig {
    fn default() -> Self {
        let opts = ParseOptions::default();
        Self {
            require_absolute_file_path: opts.require_absolute_file_path,
            allow_empty_data: opts.allow_empty_data,
            default_url: None,
        }
    }
}

impl PageloadConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            require_absolute_file_path: self.require_absolute_file_path,
            allow_empty_data: self.allow_empty_data,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pageload")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<PageloadConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PageloadConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, or defaults if there is no file.
/// Never writes a file.
pub fn load_or_default() -> Result<PageloadConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(PageloadConfig::default());
    }
    load_from(&path)
}
