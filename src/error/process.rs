//! External command errors

use super::DhError;

/// Creates a command failed error
pub fn failed(command: impl Into<String>, status: impl Into<String>) -> DhError {
    DhError::CommandFailed {
        command: command.into(),
        status: status.into(),
    }
}

/// Creates a command spawn failed error
pub fn spawn_failed(command: impl Into<String>, reason: impl Into<String>) -> DhError {
    DhError::CommandSpawnFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates a dpkg-architecture query failed error
pub fn architecture_query_failed(reason: impl Into<String>) -> DhError {
    DhError::ArchitectureQueryFailed {
        reason: reason.into(),
    }
}
