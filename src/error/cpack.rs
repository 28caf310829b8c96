//! CPack metadata and package selection errors

use super::DhError;

/// Creates a metadata parse failed error
pub fn metadata_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DhError {
    DhError::MetadataParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid metadata error
pub fn metadata_invalid(message: impl Into<String>) -> DhError {
    DhError::MetadataInvalid {
        message: message.into(),
    }
}

/// Creates an unknown component error for a package selection
pub fn unknown_component(package: impl Into<String>, component: impl Into<String>) -> DhError {
    DhError::UnknownComponent {
        package: package.into(),
        component: component.into(),
    }
}

/// Creates an unknown component group error for a package selection
pub fn unknown_component_group(package: impl Into<String>, group: impl Into<String>) -> DhError {
    DhError::UnknownComponentGroup {
        package: package.into(),
        group: group.into(),
    }
}
