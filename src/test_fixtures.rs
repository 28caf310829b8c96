//! Test fixtures for source package trees.
//!
//! Helpers create a throwaway source directory with an empty `debian/`
//! directory and write package files into it.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{CONTROL, create_source_tree};
//!
//! #[test]
//! fn my_test() {
//!     let tree = create_source_tree();
//!     tree.write("debian/control", CONTROL);
//!     tree.write("debian/libfoo.cpack-components", "Libraries\n");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::Path;

use tempfile::TempDir;

/// Control file with one architecture independent and two architecture
/// dependent binary packages
pub const CONTROL: &str = "\
Source: dh-cmake-test
Maintainer: Kitware Debian Maintainers <debian@kitware.com>
Build-Depends: debhelper (>= 11), cmake

Package: libdh-cmake-test
Architecture: any
Description: dh-cmake test library

Package: libdh-cmake-test-dev
Architecture: any
Depends: ${cpack:Depends}, ${misc:Depends}
Description: dh-cmake test library development files

Package: libdh-cmake-test-doc
Architecture: all
Description: dh-cmake test library documentation
";

/// Temporary source package directory, removed on drop
pub struct SourceTree {
    temp: TempDir,
}

impl SourceTree {
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the tree root, creating parent directories
    pub fn write(&self, path: &str, content: &str) {
        let file_path = self.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write an executable script relative to the tree root
    #[cfg(unix)]
    pub fn write_executable(&self, path: &str, content: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.write(path, content);
        let file_path = self.path().join(path);
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make file executable");
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }
}

/// Create an empty source tree containing only `debian/`
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_source_tree() -> SourceTree {
    let temp = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir_all(temp.path().join("debian")).expect("Failed to create debian directory");
    SourceTree { temp }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_source_tree() {
        let tree = create_source_tree();
        assert!(tree.exists("debian"));
    }

    #[test]
    fn test_write_creates_parents() {
        let tree = create_source_tree();
        tree.write("debian/.cpack/cpack-metadata.json", "{}");
        assert_eq!(tree.read("debian/.cpack/cpack-metadata.json"), "{}");
    }
}
