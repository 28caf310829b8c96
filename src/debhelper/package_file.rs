//! Package file lookup
//!
//! A package file is `debian/<package>.<extension>`; the main package may
//! also use the unprefixed `debian/<extension>`. An executable package file is
//! run and its output is used in place of its contents.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::Debhelper;
use crate::error::{self, Result};

impl Debhelper {
    /// Path of the package file for `package`, if one exists
    pub fn package_file(&self, package: &str, extension: &str) -> Option<PathBuf> {
        let debian = self.root().join("debian");
        let mut candidates = vec![debian.join(format!("{}.{}", package, extension))];
        if package == self.main_package() {
            candidates.push(debian.join(extension));
        }

        candidates.into_iter().find(|path| path.exists())
    }

    /// Contents of the package file, or the output of running it
    pub fn read_package_file(&self, package: &str, extension: &str) -> Result<Option<String>> {
        let Some(path) = self.package_file(package, extension) else {
            return Ok(None);
        };

        if is_executable(&path) {
            tracing::debug!(path = %path.display(), "Executing package file");
            let mut command = Command::new(&path);
            command.current_dir(self.root());
            return crate::process::output(&mut command).map(Some);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))
    }

    /// Package file parsed as a list of names, see [`parse_list`]
    pub fn read_package_list(&self, package: &str, extension: &str) -> Result<Option<Vec<String>>> {
        Ok(self
            .read_package_file(package, extension)?
            .map(|content| parse_list(&content)))
    }
}

/// Parse a one-name-per-line list
///
/// Blank lines and lines starting with `#` are skipped; trailing whitespace
/// is trimmed.
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}
