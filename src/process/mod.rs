//! External command execution
//!
//! Every helper ends up running `cmake`, `ctest`, `cpack` or
//! `dpkg-architecture`. Commands inherit stdout/stderr, are logged before they
//! run and any non-zero exit aborts the helper.

pub mod arch;

use std::process::Command;

use crate::error::{self, Result};

/// Quote a single argument for display in logs
///
/// Backslashes, quotes and `$` are escaped; arguments containing spaces are
/// wrapped in double quotes.
pub fn format_arg_for_print(arg: &str) -> String {
    let escaped = arg
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "\\'")
        .replace('$', "\\$");
    if escaped.contains(' ') {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Render a command line for display in logs and error messages
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|arg| format_arg_for_print(&arg.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion, failing on a non-zero exit status
pub fn run(command: &mut Command) -> Result<()> {
    let description = describe(command);
    tracing::debug!(command = %description, "Running");

    let status = command
        .status()
        .map_err(|e| error::command_spawn_failed(&description, e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(error::command_failed(description, status.to_string()))
    }
}

/// Run a command and capture its stdout as UTF-8 text
pub fn output(command: &mut Command) -> Result<String> {
    let description = describe(command);
    tracing::debug!(command = %description, "Capturing output");

    let output = command
        .stderr(std::process::Stdio::inherit())
        .output()
        .map_err(|e| error::command_spawn_failed(&description, e.to_string()))?;

    if !output.status.success() {
        return Err(error::command_failed(description, output.status.to_string()));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| error::command_failed(description, format!("invalid UTF-8 output: {}", e)))
}
