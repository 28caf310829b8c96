use std::path::PathBuf;

use clap::{Args, Parser};

// Options shared by every debhelper command.
//
// `-O` values are options handed down by `dh` to all helpers. Each one is
// parsed as if given directly; values this helper does not understand are
// ignored.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DhArgs {
    /// Act on all architecture dependent packages
    #[arg(short = 'a', long = "arch", short_alias = 's', overrides_with = "indep")]
    pub arch: bool,

    /// Act on all architecture independent packages
    #[arg(short = 'i', long = "indep", overrides_with = "arch")]
    pub indep: bool,

    /// Act on a specific package (repeatable)
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Do not act on a specific package (repeatable)
    #[arg(short = 'N', long = "no-package", value_name = "PACKAGE")]
    pub no_packages: Vec<String>,

    /// Use DIR as the package build directory instead of debian/<package>
    #[arg(short = 'P', long = "tmpdir", value_name = "DIR")]
    pub tmpdir: Option<PathBuf>,

    /// Change which package is the "main package"
    #[arg(long = "mainpackage", value_name = "PACKAGE")]
    pub main_package: Option<String>,

    /// Build directory for out of source building
    #[arg(short = 'B', long = "builddirectory", value_name = "DIR")]
    pub build_directory: Option<PathBuf>,

    /// Pass additional debhelper options (repeatable)
    #[arg(short = 'O', value_name = "OPTION", allow_hyphen_values = true)]
    pub options: Vec<String>,
}

/// Parser for a single `-O` value
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct InheritedOptions {
    #[command(flatten)]
    dh: DhArgs,
}

impl DhArgs {
    /// Apply `-O` options on top of the directly given ones
    pub fn with_inherited_options(mut self) -> Self {
        let options = std::mem::take(&mut self.options);
        for option in options {
            match InheritedOptions::try_parse_from([option.as_str()]) {
                Ok(inherited) => self.merge(inherited.dh.with_inherited_options()),
                Err(_) => tracing::debug!(%option, "Ignoring inherited option"),
            }
        }
        self
    }

    fn merge(&mut self, other: DhArgs) {
        if other.arch {
            self.arch = true;
            self.indep = false;
        }
        if other.indep {
            self.indep = true;
            self.arch = false;
        }
        self.packages.extend(other.packages);
        self.no_packages.extend(other.no_packages);
        if other.tmpdir.is_some() {
            self.tmpdir = other.tmpdir;
        }
        if other.main_package.is_some() {
            self.main_package = other.main_package;
        }
        if other.build_directory.is_some() {
            self.build_directory = other.build_directory;
        }
    }
}
