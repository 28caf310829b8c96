//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - common: Debhelper options shared by every helper
//! - install: Install command arguments
//! - ctest: CTest dashboard step arguments
//! - cpack: CPack metadata and substvars arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod common;
pub mod completions;
pub mod cpack;
pub mod ctest;
pub mod install;

pub use common::DhArgs;
pub use completions::CompletionsArgs;
pub use cpack::{CpackArgs, CpackSubcommand};
pub use ctest::{CtestArgs, CtestStep};
pub use install::InstallArgs;

/// dh-cmake - debhelper commands for CMake projects
///
/// Install CMake components into binary packages, drive CTest dashboards and
/// derive package dependencies from CPack component metadata.
#[derive(Parser, Debug)]
#[command(
    name = "dh-cmake",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Debhelper commands for packaging CMake projects",
    long_about = "dh-cmake installs CMake components into Debian binary packages, drives \
                  CTest dashboard steps and computes inter-package dependencies from CPack \
                  component metadata.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dh-cmake install                  \x1b[90m# Install components of every package\x1b[0m\n   \
                  dh-cmake ctest test               \x1b[90m# Run the CTest test step\x1b[0m\n   \
                  dh-cmake cpack generate           \x1b[90m# Generate CPack metadata\x1b[0m\n   \
                  dh-cmake cpack substvars          \x1b[90m# Write cpack:Depends substvars\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Source package directory (defaults to current directory)
    #[arg(long, global = true, env = "DH_CMAKE_SOURCE_DIR", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install CMake components into package build directories
    Install(InstallArgs),

    /// Run a CTest dashboard step
    Ctest(CtestArgs),

    /// Generate CPack metadata and dependency substitution variables
    Cpack(CpackArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
