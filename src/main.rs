//! dh-cmake - debhelper helpers for CMake projects
//!
//! Installs CMake components into Debian binary packages, drives CTest
//! dashboard steps and derives inter-package dependencies from CPack
//! component metadata.

use clap::Parser;

mod cli;
mod commands;
mod control;
mod cpack;
mod debhelper;
mod error;
mod logging;
mod process;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.source_dir, args),
        Commands::Ctest(args) => commands::ctest::run(cli.source_dir, args),
        Commands::Cpack(args) => commands::cpack::run(cli.source_dir, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
