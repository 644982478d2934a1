//! `file:` loads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::decode_text;
use crate::error::LoadError;

/// Reads the whole file at `path`. The handle is closed on every return path.
pub(crate) fn load_file(path: &str) -> Result<String, LoadError> {
    let path = Path::new(path);
    let mut file = File::open(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(decode_text(bytes, &path.display().to_string()))
}
