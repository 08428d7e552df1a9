//! Writing rendered artifacts to disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Write `contents` to `path` verbatim, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written. Failures are not
/// retried.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
