use crate::error::{EngineError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read the whole book into memory.
///
/// Uses lossy conversion to support non-UTF8 text files (mostly).
///
/// # Errors
///
/// Returns `EngineError::BookNotFound` for a missing path and
/// `EngineError::FileRead` for any other read failure.
pub fn read_book(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => EngineError::BookNotFound {
            path: path.to_path_buf(),
        },
        _ => EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    log::debug!("read {} bytes from '{}'", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
