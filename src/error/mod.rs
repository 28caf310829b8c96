//! Error types and handling for dh-cmake
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`cpack`]: CPack metadata and package selection errors
//! - [`control`]: `debian/control` errors
//! - [`process`]: External command errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

pub mod control;
pub mod cpack;
pub mod fs;
pub mod process;

#[allow(unused_imports)]
pub use control::{
    no_packages, not_found as control_not_found, parse_failed as control_parse_failed,
    unknown_main_package,
};
#[allow(unused_imports)]
pub use cpack::{
    metadata_invalid, metadata_parse_failed, unknown_component, unknown_component_group,
};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use process::{
    architecture_query_failed, failed as command_failed, spawn_failed as command_spawn_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dh-cmake operations
#[derive(Error, Diagnostic, Debug)]
pub enum DhError {
    // CPack errors
    #[error("Failed to parse CPack metadata: {path}: {reason}")]
    #[diagnostic(
        code(dh_cmake::cpack::metadata_parse_failed),
        help("Run 'dh-cmake cpack generate' to regenerate debian/.cpack/cpack-metadata.json")
    )]
    MetadataParseFailed { path: String, reason: String },

    #[error("Invalid CPack metadata: {message}")]
    #[diagnostic(code(dh_cmake::cpack::metadata_invalid))]
    MetadataInvalid { message: String },

    #[error("Invalid CPack components in {package}")]
    #[diagnostic(
        code(dh_cmake::cpack::unknown_component),
        help("Every line of debian/{package}.cpack-components must name a component from the CPack metadata")
    )]
    UnknownComponent { package: String, component: String },

    #[error("Invalid CPack component groups in {package}")]
    #[diagnostic(
        code(dh_cmake::cpack::unknown_component_group),
        help("Every line of debian/{package}.cpack-component-groups must name a component group from the CPack metadata")
    )]
    UnknownComponentGroup { package: String, group: String },

    // Control file errors
    #[error("Control file not found: {path}")]
    #[diagnostic(code(dh_cmake::control::not_found))]
    ControlNotFound { path: String },

    #[error("Failed to parse control file: {path}: {reason}")]
    #[diagnostic(code(dh_cmake::control::parse_failed))]
    ControlParseFailed { path: String, reason: String },

    #[error("No binary packages declared in {path}")]
    #[diagnostic(code(dh_cmake::control::no_packages))]
    NoPackages { path: String },

    #[error("Main package '{name}' is not declared in debian/control")]
    #[diagnostic(code(dh_cmake::control::unknown_main_package))]
    UnknownMainPackage { name: String },

    // Process errors
    #[error("Command failed: {command}: {status}")]
    #[diagnostic(code(dh_cmake::process::failed))]
    CommandFailed { command: String, status: String },

    #[error("Failed to run command: {command}: {reason}")]
    #[diagnostic(
        code(dh_cmake::process::spawn_failed),
        help("Check that the program is installed and on PATH")
    )]
    CommandSpawnFailed { command: String, reason: String },

    #[error("Failed to query dpkg-architecture: {reason}")]
    #[diagnostic(
        code(dh_cmake::process::architecture_query_failed),
        help("Pass the build directory explicitly with -B/--builddirectory")
    )]
    ArchitectureQueryFailed { reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(dh_cmake::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(dh_cmake::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dh_cmake::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for DhError {
    fn from(err: std::io::Error) -> Self {
        DhError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DhError {
    fn from(err: serde_json::Error) -> Self {
        DhError::MetadataParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DhError>;
