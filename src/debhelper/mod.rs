//! Debhelper context shared by every command
//!
//! This module handles:
//! - Selecting the binary packages a helper acts on
//! - Locating the main package
//! - Looking up and reading `debian/<package>.<extension>` package files
//! - Build directory and per-package tmpdir conventions
//! - Writing substitution variables

pub mod package_file;
pub mod substvars;

use std::path::{Path, PathBuf};

use crate::cli::DhArgs;
use crate::control::Control;
use crate::error::{self, Result};

pub use substvars::Substvars;

/// Which architecture class of packages to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    /// `Architecture: all` packages only
    Indep,
    /// Architecture dependent packages only
    Arch,
    Both,
}

/// Debhelper state for one source package
#[derive(Debug, Clone)]
pub struct Debhelper {
    /// Source package root, the directory containing `debian/`
    root: PathBuf,
    options: DhArgs,
    control: Control,
}

impl Debhelper {
    /// Read `debian/control` under `root` and apply the command line options
    pub fn open(root: &Path, options: DhArgs) -> Result<Self> {
        let options = options.with_inherited_options();
        let control = Control::load(root)?;

        if control.packages.is_empty() {
            return Err(error::no_packages(
                root.join(crate::control::CONTROL_PATH).display().to_string(),
            ));
        }

        if let Some(main) = &options.main_package {
            if control.package(main).is_none() {
                return Err(error::unknown_main_package(main));
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            options,
            control,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn package_type(&self) -> PackageType {
        if self.options.indep {
            PackageType::Indep
        } else if self.options.arch {
            PackageType::Arch
        } else {
            PackageType::Both
        }
    }

    /// Binary packages to act on, in control file order
    ///
    /// `-p` selects exactly the listed packages; otherwise `-N` excludes the
    /// listed packages; otherwise `-a`/`-i` filter by architecture.
    pub fn packages(&self) -> Vec<String> {
        let package_type = self.package_type();

        self.control
            .packages
            .iter()
            .filter(|p| {
                if !self.options.packages.is_empty() {
                    self.options.packages.contains(&p.name)
                } else if !self.options.no_packages.is_empty() {
                    !self.options.no_packages.contains(&p.name)
                } else {
                    match package_type {
                        PackageType::Indep => p.is_arch_independent(),
                        PackageType::Arch => !p.is_arch_independent(),
                        PackageType::Both => true,
                    }
                }
            })
            .map(|p| p.name.clone())
            .collect()
    }

    /// Every binary package declared in `debian/control`
    pub fn all_packages(&self) -> Vec<String> {
        self.control.package_names()
    }

    /// The main package: `--mainpackage`, or the first binary package
    pub fn main_package(&self) -> &str {
        match &self.options.main_package {
            Some(main) => main,
            None => &self.control.packages[0].name,
        }
    }

    /// Out-of-source build directory
    ///
    /// Defaults to `obj-<DEB_HOST_GNU_TYPE>` under the source root.
    pub fn build_directory(&self) -> Result<PathBuf> {
        let dir = match &self.options.build_directory {
            Some(dir) => dir.clone(),
            None => PathBuf::from(format!(
                "obj-{}",
                crate::process::arch::host_gnu_type()?
            )),
        };
        Ok(self.root.join(dir))
    }

    /// Staging directory for the files of `package`
    pub fn tmpdir(&self, package: &str) -> PathBuf {
        match &self.options.tmpdir {
            Some(dir) => self.root.join(dir),
            None => self.root.join("debian").join(package),
        }
    }

    /// Write `name=value` into `debian/<package>.substvars`
    pub fn write_substvar(&self, package: &str, name: &str, value: &str) -> Result<()> {
        let path = self
            .root
            .join("debian")
            .join(format!("{}.substvars", package));
        let mut substvars = Substvars::load(&path)?;
        if substvars.get(name) == Some(value) {
            tracing::debug!(package, variable = name, "Substitution variable unchanged");
            return Ok(());
        }
        substvars.set(name, value);
        substvars.save(&path)?;

        tracing::info!(package, variable = name, "Wrote substitution variable");
        Ok(())
    }
}
