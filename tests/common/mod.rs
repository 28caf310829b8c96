//! Common test utilities for dh-cmake integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Control file shared by the integration tests
pub const CONTROL: &str = "\
Source: dh-cmake-test
Maintainer: Kitware Debian Maintainers <debian@kitware.com>

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

/// CPack metadata with a nested group
///
/// ```text
/// All ── Dev ── [Headers, Namelinks]
/// Libraries (no group)
/// Docs ──depends──> Headers
/// ```
pub const METADATA: &str = r#"{
    "formatVersionMajor": 1,
    "formatVersionMinor": 0,
    "componentGroups": {
        "All": {},
        "Dev": { "parentGroup": "All" }
    },
    "components": {
        "Libraries": {},
        "Headers": { "group": "Dev", "dependencies": ["Libraries"] },
        "Namelinks": { "group": "Dev", "dependencies": ["Libraries"] },
        "Docs": { "dependencies": ["Headers"] }
    }
}"#;

/// A source package directory with fake build tools
pub struct TestSource {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to source package root
    pub path: PathBuf,
    /// Directory holding fake tools, put first on PATH
    pub bin: PathBuf,
}

impl TestSource {
    /// Create a new source package with `debian/control`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("source");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(path.join("debian")).expect("Failed to create debian directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");

        let source = Self { temp, path, bin };
        source.write_file("debian/control", CONTROL);
        source
    }

    /// Create a source package with generated CPack metadata
    pub fn with_metadata() -> Self {
        let source = Self::new();
        source.write_file("debian/.cpack/cpack-metadata.json", METADATA);
        source
    }

    /// Write a file in the source package
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the source package
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the source package
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install a fake tool that records its arguments and `DESTDIR`
    ///
    /// Each invocation appends one line to `<bin>/<name>.log`:
    /// `DESTDIR=<value> <arg> <arg> ...`
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str) {
        self.fake_tool_with_exit(name, 0);
    }

    /// Install a fake tool that records its invocation and exits with `code`
    #[cfg(unix)]
    pub fn fake_tool_with_exit(&self, name: &str, code: i32) {
        let script = format!(
            "#!/bin/sh\n\
             log=\"$(dirname \"$0\")/{name}.log\"\n\
             printf 'DESTDIR=%s' \"$DESTDIR\" >> \"$log\"\n\
             for arg in \"$@\"; do printf ' %s' \"$arg\" >> \"$log\"; done\n\
             printf '\\n' >> \"$log\"\n\
             exit {code}\n"
        );
        write_executable(&self.bin.join(name), &script);
    }

    /// Install a fake `dpkg-architecture` reporting `gnu_type` as host type
    #[cfg(unix)]
    pub fn fake_dpkg_architecture(&self, gnu_type: &str) {
        let script = format!(
            "#!/bin/sh\n\
             echo DEB_HOST_ARCH=amd64\n\
             echo DEB_HOST_GNU_TYPE={gnu_type}\n\
             echo DEB_BUILD_GNU_TYPE={gnu_type}\n"
        );
        write_executable(&self.bin.join("dpkg-architecture"), &script);
    }

    /// Recorded invocations of a fake tool, one per line
    pub fn tool_calls(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.bin.join(format!("{name}.log")))
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// PATH with the fake tools first
    pub fn path_env(&self) -> std::ffi::OsString {
        let mut paths = vec![self.bin.clone()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).expect("Failed to join PATH")
    }
}

#[cfg(unix)]
fn write_executable(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, content).expect("Failed to write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

/// dh-cmake command running inside `source` with its fake tools on PATH
#[allow(deprecated)]
pub fn dh_cmake_cmd(source: &TestSource) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("dh-cmake").expect("Failed to find dh-cmake binary");
    cmd.current_dir(&source.path)
        .env("PATH", source.path_env())
        .env_remove("DH_CMAKE_SOURCE_DIR")
        .env_remove("RUST_LOG");
    cmd
}
