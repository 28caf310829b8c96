//! CPack component metadata
//!
//! The CPack External generator (`cpack -G Ext`) writes a JSON document that
//! describes every installable component, the component group it belongs to
//! and the components it depends on. This module loads that document into a
//! registry of components and groups with a bidirectional group index.
//!
//! ## Building the index
//!
//! Groups and components name their parent by string and may appear in any
//! order, so the registry is built in two phases:
//!
//! 1. Create every group with empty child lists
//! 2. Wire each group into its parent and each component into its group
//!
//! ```text
//! componentGroups: { "All": {}, "Dev": { "parentGroup": "All" } }
//! components:      { "Headers": { "group": "Dev" } }
//!
//!   All ── groups: [Dev]
//!   Dev ── components: [Headers]
//! ```

pub mod resolver;
pub mod selection;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::{self, DhError, Result};

pub use resolver::{Resolver, format_depends};
pub use selection::PackageSelection;

/// Location of the metadata document relative to the source directory
pub const METADATA_PATH: &str = "debian/.cpack/cpack-metadata.json";

/// Output directory handed to `cpack -B`
pub const METADATA_DIR: &str = "debian/.cpack";

/// Component entry as written by the CPack External generator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponent {
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// Component group entry as written by the CPack External generator
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponentGroup {
    #[serde(default)]
    parent_group: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    component_groups: BTreeMap<String, RawComponentGroup>,
    components: BTreeMap<String, RawComponent>,
}

/// An installable CPack component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    /// Group this component is assigned to
    pub group: Option<String>,
    /// Names of the components this component requires
    pub dependencies: BTreeSet<String>,
}

/// A named collection of components and nested groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    pub name: String,
    pub parent_group: Option<String>,
    /// Components assigned directly to this group
    pub components: Vec<String>,
    /// Child groups naming this group as their parent
    pub groups: Vec<String>,
}

/// Registry of CPack components and component groups
///
/// Built once per invocation and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CpackMetadata {
    components: BTreeMap<String, Component>,
    groups: BTreeMap<String, ComponentGroup>,
}

impl CpackMetadata {
    /// Load the metadata document generated under `source_dir`
    pub fn load(source_dir: &Path) -> Result<Self> {
        let path = source_dir.join(METADATA_PATH);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_json(&content).map_err(|e| match e {
            DhError::MetadataParseFailed { reason, .. } => {
                error::metadata_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Parse a metadata document from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawMetadata = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawMetadata) -> Result<Self> {
        let mut groups: BTreeMap<String, ComponentGroup> = raw
            .component_groups
            .iter()
            .map(|(name, group)| {
                (
                    name.clone(),
                    ComponentGroup {
                        name: name.clone(),
                        parent_group: group.parent_group.clone(),
                        components: Vec::new(),
                        groups: Vec::new(),
                    },
                )
            })
            .collect();

        for (name, group) in &raw.component_groups {
            let Some(parent_name) = &group.parent_group else {
                continue;
            };
            let parent = groups.get_mut(parent_name).ok_or_else(|| {
                error::metadata_invalid(format!(
                    "group '{}' references unknown parent group '{}'",
                    name, parent_name
                ))
            })?;
            parent.groups.push(name.clone());
        }

        for (name, component) in &raw.components {
            let Some(group_name) = &component.group else {
                continue;
            };
            let group = groups.get_mut(group_name).ok_or_else(|| {
                error::metadata_invalid(format!(
                    "component '{}' references unknown group '{}'",
                    name, group_name
                ))
            })?;
            group.components.push(name.clone());
        }

        let components = raw
            .components
            .into_iter()
            .map(|(name, component)| {
                (
                    name.clone(),
                    Component {
                        name,
                        group: component.group,
                        dependencies: component.dependencies.into_iter().collect(),
                    },
                )
            })
            .collect();

        Ok(Self { components, groups })
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&ComponentGroup> {
        self.groups.get(name)
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// All components in name order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// All component groups in name order
    pub fn groups(&self) -> impl Iterator<Item = &ComponentGroup> {
        self.groups.values()
    }
}
