//! Ctest command implementation
//!
//! Drives one step of a CTest dashboard through `ctest -S`. The driver script
//! is shipped inside the binary and written to `debian/.ctest` before each
//! step so that dashboard state persists between steps.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::cli::{CtestArgs, CtestStep};
use crate::commands::helpers::resolve_source_dir;
use crate::debhelper::Debhelper;
use crate::error::{self, Result};

/// Dashboard state directory relative to the source root
pub const CTEST_DIR: &str = "debian/.ctest";

const DRIVER_FILE_NAME: &str = "dh_ctest_driver.cmake";

const DRIVER_SCRIPT: &str = include_str!("../../data/dh_ctest_driver.cmake");

/// Command used by the configure step
const CONFIGURE_COMMAND: &str = "dh_auto_configure";

/// Command used by the build step
const BUILD_COMMAND: &str = "dh_auto_build";

/// Inputs of one `ctest -S` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtestInvocation {
    pub driver: PathBuf,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub step: CtestStep,
    pub model: String,
    pub configure_args: Vec<String>,
}

impl CtestInvocation {
    /// Build the `ctest -S <driver> -D...` command
    pub fn command(&self) -> Command {
        let mut command = Command::new("ctest");
        command
            .arg("-S")
            .arg(&self.driver)
            .arg(define("DH_CTEST_SRCDIR", &self.source_dir))
            .arg(define("DH_CTEST_CTESTDIR", &self.source_dir.join(CTEST_DIR)))
            .arg(define("DH_CTEST_BUILDDIR", &self.build_dir))
            .arg(format!("-DDH_CTEST_DASHBOARD_MODEL={}", self.model))
            .arg(format!("-DDH_CTEST_CONFIGURE_CMD={}", CONFIGURE_COMMAND))
            .arg(format!("-DDH_CTEST_BUILD_CMD={}", BUILD_COMMAND))
            .arg(format!("-DDH_CTEST_STEP={}", self.step.as_str()));

        if !self.configure_args.is_empty() {
            command.arg(format!(
                "-DDH_CTEST_CONFIGURE_ARGS={}",
                self.configure_args.join(";")
            ));
        }

        command.current_dir(&self.source_dir);
        command
    }
}

fn define(name: &str, path: &Path) -> String {
    format!("-D{}={}", name, path.display())
}

/// Run ctest command
pub fn run(source_dir: Option<PathBuf>, args: CtestArgs) -> Result<()> {
    let root = resolve_source_dir(source_dir)?;
    let dh = Debhelper::open(&root, args.dh)?;

    let driver = write_driver(dh.root())?;
    let invocation = CtestInvocation {
        driver,
        source_dir: dh.root().to_path_buf(),
        build_dir: dh.build_directory()?,
        step: args.step,
        model: args.model,
        configure_args: args.configure_args,
    };

    tracing::info!(step = invocation.step.as_str(), model = %invocation.model, "Running CTest step");
    crate::process::run(&mut invocation.command())
}

/// Write the driver script into the dashboard state directory
fn write_driver(root: &Path) -> Result<PathBuf> {
    let dir = root.join(CTEST_DIR);
    std::fs::create_dir_all(&dir)
        .map_err(|e| error::file_write_failed(dir.display().to_string(), e.to_string()))?;

    let path = dir.join(DRIVER_FILE_NAME);
    std::fs::write(&path, DRIVER_SCRIPT)
        .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))?;

    Ok(path)
}
