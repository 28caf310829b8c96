//! Control file errors

use super::DhError;

/// Creates a control not found error
pub fn not_found(path: impl Into<String>) -> DhError {
    DhError::ControlNotFound { path: path.into() }
}

/// Creates a control parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DhError {
    DhError::ControlParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a no packages error
pub fn no_packages(path: impl Into<String>) -> DhError {
    DhError::NoPackages { path: path.into() }
}

/// Creates an unknown main package error
pub fn unknown_main_package(name: impl Into<String>) -> DhError {
    DhError::UnknownMainPackage { name: name.into() }
}
