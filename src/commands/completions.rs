//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{self, Result};

const BIN_NAME: &str = "dh-cmake";

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let script = completion_script(args.shell);

    std::io::stdout()
        .lock()
        .write_all(&script)
        .map_err(|e| error::io_error(format!("Failed to write completions: {}", e)))
}

/// Completion script for `shell`, covering every subcommand
fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut script);
    script
}
