//! Command helper utilities

use std::path::PathBuf;

use crate::error::{self, Result};

/// Resolve the source package directory from the optional argument
///
/// Falls back to the current directory; relative paths are made absolute so
/// that child processes see the same paths regardless of their working
/// directory.
pub fn resolve_source_dir(source_dir: Option<PathBuf>) -> Result<PathBuf> {
    let current_dir = || {
        std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {}", e)))
    };

    match source_dir {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => Ok(current_dir()?.join(path)),
        None => current_dir(),
    }
}
