//! Per-package CPack component selection
//!
//! Each binary package claims components through two optional package files:
//! - `debian/<package>.cpack-components`: component names, one per line
//! - `debian/<package>.cpack-component-groups`: component group names
//!
//! Names are validated against the metadata when the selection is resolved.

use crate::debhelper::Debhelper;
use crate::error::Result;

/// Package file extension listing CPack components
pub const COMPONENTS_EXTENSION: &str = "cpack-components";

/// Package file extension listing CPack component groups
pub const COMPONENT_GROUPS_EXTENSION: &str = "cpack-component-groups";

/// Components and component groups claimed by one binary package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSelection {
    /// Binary package name
    pub name: String,
    /// Directly claimed components, in file order
    pub components: Vec<String>,
    /// Claimed component groups, in file order
    pub groups: Vec<String>,
}

impl PackageSelection {
    /// Read the selection of `package` from its package files
    ///
    /// Missing files mean an empty list.
    pub fn read(dh: &Debhelper, package: &str) -> Result<Self> {
        let components = dh
            .read_package_list(package, COMPONENTS_EXTENSION)?
            .unwrap_or_default();
        let groups = dh
            .read_package_list(package, COMPONENT_GROUPS_EXTENSION)?
            .unwrap_or_default();

        tracing::debug!(
            package,
            components = components.len(),
            groups = groups.len(),
            "Read CPack selection"
        );

        Ok(Self {
            name: package.to_string(),
            components,
            groups,
        })
    }

    /// Read the selections of all `packages`
    pub fn read_all(dh: &Debhelper, packages: &[String]) -> Result<Vec<Self>> {
        packages
            .iter()
            .map(|package| Self::read(dh, package))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.groups.is_empty()
    }
}
