//! Component closure and inter-package dependency resolution
//!
//! A binary package claims CPack components directly or through component
//! groups. The resolver expands those claims into the full set of components
//! the package owns and derives which other binary packages it depends on
//! from the component-level dependency edges.
//!
//! ## Algorithm
//!
//! Group expansion is a depth-first walk over the child-group edges with a
//! single visited set shared by every branch of one walk. A group contributes
//! its components only at its first visit, which also bounds the walk on a
//! cyclic group graph.
//!
//! ```text
//! All ── Dev ── [Headers, Namelinks]
//!
//! components_of_group("All") = {Headers, Namelinks}
//! ```

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::cpack::{CpackMetadata, PackageSelection};
use crate::error::{self, Result};

/// Version constraint attached to every generated package dependency
const BINARY_VERSION_CONSTRAINT: &str = "(= ${binary:Version})";

/// Read-only queries over a loaded [`CpackMetadata`]
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    metadata: &'a CpackMetadata,
}

impl<'a> Resolver<'a> {
    pub fn new(metadata: &'a CpackMetadata) -> Self {
        Self { metadata }
    }

    /// Collect the components of `group` and of all its nested groups
    ///
    /// `visited` is shared across the whole walk: a group already present
    /// contributes nothing, so on a cyclic graph the closure is cut at the
    /// point of re-entry. Unknown groups yield an empty set.
    pub fn components_of_group(
        &self,
        group: &str,
        visited: &mut HashSet<String>,
    ) -> BTreeSet<String> {
        if !visited.insert(group.to_string()) {
            return BTreeSet::new();
        }

        let Some(entry) = self.metadata.group(group) else {
            return BTreeSet::new();
        };

        let mut all_components: BTreeSet<String> = entry.components.iter().cloned().collect();
        for sub_group in &entry.groups {
            all_components.extend(self.components_of_group(sub_group, visited));
        }

        all_components
    }

    /// Full component closure of a package selection
    ///
    /// # Errors
    ///
    /// Returns `UnknownComponent` or `UnknownComponentGroup` naming the
    /// package if its selection refers to anything absent from the metadata.
    pub fn all_components_of(&self, package: &PackageSelection) -> Result<BTreeSet<String>> {
        if let Some(component) = package
            .components
            .iter()
            .find(|c| !self.metadata.has_component(c))
        {
            return Err(error::unknown_component(&package.name, component));
        }
        if let Some(group) = package
            .groups
            .iter()
            .find(|g| !self.metadata.has_group(g))
        {
            return Err(error::unknown_component_group(&package.name, group));
        }

        let mut all_components: BTreeSet<String> = package.components.iter().cloned().collect();
        for group in &package.groups {
            let mut visited = HashSet::new();
            all_components.extend(self.components_of_group(group, &mut visited));
        }

        Ok(all_components)
    }

    /// Component closure of every package, keyed by package name
    ///
    /// # Errors
    ///
    /// Fails on the first package whose selection is invalid.
    pub fn closures(
        &self,
        all_packages: &[PackageSelection],
    ) -> Result<BTreeMap<String, BTreeSet<String>>> {
        all_packages
            .iter()
            .map(|package| Ok((package.name.clone(), self.all_components_of(package)?)))
            .collect()
    }

    /// Names of the other packages that `package` depends on
    ///
    /// A package depends on another package when one of its components lists
    /// a dependency on a component in the other package's closure. The
    /// package itself is never part of the result; a package missing from
    /// `closures` has no dependencies.
    pub fn dependencies_of(
        &self,
        package: &str,
        closures: &BTreeMap<String, BTreeSet<String>>,
    ) -> BTreeSet<String> {
        let mut deps = BTreeSet::new();
        let Some(own) = closures.get(package) else {
            return deps;
        };

        for component in own {
            let Some(entry) = self.metadata.component(component) else {
                continue;
            };
            for component_dep in &entry.dependencies {
                for (other_name, other_components) in closures {
                    if other_name != package && other_components.contains(component_dep) {
                        deps.insert(other_name.clone());
                    }
                }
            }
        }

        deps
    }

    /// Dependencies of every package, computing each closure once
    pub fn dependency_map(
        &self,
        all_packages: &[PackageSelection],
    ) -> Result<BTreeMap<String, BTreeSet<String>>> {
        let closures = self.closures(all_packages)?;

        Ok(closures
            .keys()
            .map(|name| (name.clone(), self.dependencies_of(name, &closures)))
            .collect())
    }
}

/// Format package dependencies for a `Depends` substitution variable
///
/// Returns `None` when there is nothing to depend on.
///
/// ```text
/// {"libfoo", "libbar"} → "libbar (= ${binary:Version}), libfoo (= ${binary:Version})"
/// ```
pub fn format_depends<'a, I>(deps: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut names: Vec<&String> = deps.into_iter().collect();
    if names.is_empty() {
        return None;
    }
    names.sort();
    names.dedup();

    Some(
        names
            .iter()
            .map(|name| format!("{} {}", name, BINARY_VERSION_CONSTRAINT))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::DhError;

    const NESTED: &str = r#"{
        "componentGroups": {
            "All": {},
            "Dev": { "parentGroup": "All" }
        },
        "components": {
            "Headers": { "group": "Dev", "dependencies": ["Libraries"] },
            "Namelinks": { "group": "Dev", "dependencies": ["Libraries"] },
            "Libraries": { "dependencies": [] }
        }
    }"#;

    fn metadata(json: &str) -> CpackMetadata {
        CpackMetadata::from_json(json).expect("metadata should parse")
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn selection(name: &str, components: &[&str], groups: &[&str]) -> PackageSelection {
        PackageSelection {
            name: name.to_string(),
            components: components.iter().map(|s| (*s).to_string()).collect(),
            groups: groups.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_components_of_group_direct() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let components = resolver.components_of_group("Dev", &mut HashSet::new());
        assert_eq!(components, set(&["Headers", "Namelinks"]));
    }

    #[test]
    fn test_components_of_group_nested() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let components = resolver.components_of_group("All", &mut HashSet::new());
        assert_eq!(components, set(&["Headers", "Namelinks"]));
    }

    #[test]
    fn test_components_of_group_is_order_independent() {
        let forward = metadata(
            r#"{
                "componentGroups": {
                    "Root": {}, "A": { "parentGroup": "Root" }, "B": { "parentGroup": "Root" },
                    "C": { "parentGroup": "B" }
                },
                "components": {
                    "a": { "group": "A" }, "b": { "group": "B" }, "c": { "group": "C" },
                    "r": { "group": "Root" }
                }
            }"#,
        );
        let reversed = metadata(
            r#"{
                "componentGroups": {
                    "Z": {}, "Y": { "parentGroup": "Z" }, "X": { "parentGroup": "Z" },
                    "W": { "parentGroup": "X" }
                },
                "components": {
                    "a": { "group": "Y" }, "b": { "group": "X" }, "c": { "group": "W" },
                    "r": { "group": "Z" }
                }
            }"#,
        );

        let expected = set(&["a", "b", "c", "r"]);
        assert_eq!(
            Resolver::new(&forward).components_of_group("Root", &mut HashSet::new()),
            expected
        );
        assert_eq!(
            Resolver::new(&reversed).components_of_group("Z", &mut HashSet::new()),
            expected
        );
    }

    #[test]
    fn test_components_of_group_cycle_terminates() {
        let metadata = metadata(
            r#"{
                "componentGroups": {
                    "A": { "parentGroup": "B" },
                    "B": { "parentGroup": "A" }
                },
                "components": {
                    "a": { "group": "A" },
                    "b": { "group": "B" }
                }
            }"#,
        );
        let resolver = Resolver::new(&metadata);

        let components = resolver.components_of_group("A", &mut HashSet::new());
        assert_eq!(components, set(&["a", "b"]));
    }

    #[test]
    fn test_components_of_group_skips_visited() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let mut visited = HashSet::new();
        visited.insert("Dev".to_string());

        assert!(resolver.components_of_group("All", &mut visited).is_empty());
        assert!(visited.contains("All"));
    }

    #[test]
    fn test_components_of_unknown_group_is_empty() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        assert!(
            resolver
                .components_of_group("NoSuchGroup", &mut HashSet::new())
                .is_empty()
        );
    }

    #[test]
    fn test_all_components_of_unions_components_and_groups() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let package = selection("libfoo-dev", &["Libraries"], &["Dev"]);
        let components = resolver
            .all_components_of(&package)
            .expect("selection is valid");

        assert_eq!(components, set(&["Headers", "Libraries", "Namelinks"]));
    }

    #[test]
    fn test_all_components_of_is_idempotent() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);
        let package = selection("libfoo-dev", &[], &["All", "Dev"]);

        let first = resolver.all_components_of(&package).expect("valid");
        let second = resolver.all_components_of(&package).expect("valid");
        assert_eq!(first, second);
        assert_eq!(first, set(&["Headers", "Namelinks"]));
    }

    #[test]
    fn test_all_components_of_unknown_component() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let err = resolver
            .all_components_of(&selection("libfoo", &["Libraries", "Libaries"], &[]))
            .expect_err("unknown component should fail");

        match err {
            DhError::UnknownComponent { package, component } => {
                assert_eq!(package, "libfoo");
                assert_eq!(component, "Libaries");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_components_of_unknown_group() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let err = resolver
            .all_components_of(&selection("libfoo-doc", &[], &["NoSuchGroup"]))
            .expect_err("unknown group should fail");

        assert!(matches!(err, DhError::UnknownComponentGroup { .. }));
        assert!(err.to_string().contains("libfoo-doc"));
    }

    #[test]
    fn test_dependencies_of_across_packages() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let all = vec![
            selection("P1", &["Libraries"], &[]),
            selection("P2", &[], &["Dev"]),
        ];
        let closures = resolver.closures(&all).expect("valid");

        assert_eq!(resolver.dependencies_of("P2", &closures), set(&["P1"]));
        assert!(resolver.dependencies_of("P1", &closures).is_empty());
    }

    #[test]
    fn test_dependencies_of_excludes_self() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let closures = resolver
            .closures(&[selection("libfoo", &["Libraries"], &["Dev"])])
            .expect("valid");

        assert!(resolver.dependencies_of("libfoo", &closures).is_empty());
    }

    #[test]
    fn test_dependencies_of_unknown_package_is_empty() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let closures = resolver
            .closures(&[selection("libfoo", &["Libraries"], &[])])
            .expect("valid");

        assert!(resolver.dependencies_of("libother", &closures).is_empty());
    }

    #[test]
    fn test_dependencies_of_shared_component() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let all = vec![
            selection("libfoo-dev", &["Headers"], &[]),
            selection("libfoo", &["Libraries"], &[]),
            selection("libfoo-compat", &["Libraries"], &[]),
        ];
        let closures = resolver.closures(&all).expect("valid");

        assert_eq!(
            resolver.dependencies_of("libfoo-dev", &closures),
            set(&["libfoo", "libfoo-compat"])
        );
    }

    #[test]
    fn test_dependencies_of_with_cyclic_groups() {
        let metadata = metadata(
            r#"{
                "componentGroups": {
                    "A": { "parentGroup": "B" },
                    "B": { "parentGroup": "A" },
                    "C": { "parentGroup": "A" }
                },
                "components": {
                    "a": { "group": "A", "dependencies": ["lib"] },
                    "b": { "group": "B" },
                    "c": { "group": "C" },
                    "lib": {}
                }
            }"#,
        );
        let resolver = Resolver::new(&metadata);

        let all = vec![
            selection("p1", &[], &["A"]),
            selection("p2", &["lib"], &[]),
        ];
        let closures = resolver.closures(&all).expect("valid");

        assert_eq!(closures.get("p1"), Some(&set(&["a", "b", "c"])));
        assert_eq!(resolver.dependencies_of("p1", &closures), set(&["p2"]));
        assert!(resolver.dependencies_of("p2", &closures).is_empty());
        assert_eq!(
            resolver.dependency_map(&all).expect("valid").get("p1"),
            Some(&set(&["p2"]))
        );
    }

    #[test]
    fn test_closures_propagate_invalid_selection() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let all = vec![
            selection("libfoo-dev", &["Headers"], &[]),
            selection("libfoo-doc", &[], &["Docs"]),
        ];

        let err = resolver
            .closures(&all)
            .expect_err("invalid selection should fail");
        assert!(err.to_string().contains("libfoo-doc"));
        assert!(resolver.dependency_map(&all).is_err());
    }

    #[test]
    fn test_dependency_map_matches_dependencies_of() {
        let metadata = metadata(NESTED);
        let resolver = Resolver::new(&metadata);

        let all = vec![
            selection("P1", &["Libraries"], &[]),
            selection("P2", &[], &["Dev"]),
            selection("P3", &[], &[]),
        ];

        let closures = resolver.closures(&all).expect("valid");
        let map = resolver.dependency_map(&all).expect("valid");
        assert_eq!(map.len(), 3);
        for package in &all {
            assert_eq!(
                map.get(&package.name),
                Some(&resolver.dependencies_of(&package.name, &closures))
            );
        }
    }

    #[test]
    fn test_format_depends_sorted() {
        let deps = set(&["libfoo", "libbar"]);
        assert_eq!(
            format_depends(&deps).as_deref(),
            Some("libbar (= ${binary:Version}), libfoo (= ${binary:Version})")
        );
    }

    #[test]
    fn test_format_depends_single() {
        let deps = set(&["P1"]);
        assert_eq!(
            format_depends(&deps).as_deref(),
            Some("P1 (= ${binary:Version})")
        );
    }

    #[test]
    fn test_format_depends_empty() {
        let deps: BTreeSet<String> = BTreeSet::new();
        assert_eq!(format_depends(&deps), None);
    }
}
