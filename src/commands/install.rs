//! Install command implementation
//!
//! Installs CMake components into the staging directory of each binary
//! package by running the generated `cmake_install.cmake` script with
//! `COMPONENT` and `DESTDIR` set.
//!
//! Components of a package come from two places:
//! - `debian/<package>.cmake-components`
//! - The CPack closure of the package, when CPack metadata has been generated

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::cli::InstallArgs;
use crate::commands::helpers::resolve_source_dir;
use crate::cpack::{CpackMetadata, PackageSelection, Resolver};
use crate::debhelper::Debhelper;
use crate::error::Result;

/// Package file extension listing CMake install components
pub const CMAKE_COMPONENTS_EXTENSION: &str = "cmake-components";

/// Components to install into one package
#[derive(Debug, Clone, PartialEq, Eq)]
struct InstallPlan {
    package: String,
    destdir: PathBuf,
    components: Vec<String>,
}

/// Run install command
pub fn run(source_dir: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let root = resolve_source_dir(source_dir)?;
    let dh = Debhelper::open(&root, args.dh)?;

    install_packages(&dh)
}

fn install_packages(dh: &Debhelper) -> Result<()> {
    let plans = plan_installs(dh)?;
    if plans.is_empty() {
        tracing::info!("No components to install");
        return Ok(());
    }

    let build_dir = dh.build_directory()?;
    for plan in &plans {
        tracing::info!(
            package = %plan.package,
            components = plan.components.len(),
            "Installing components"
        );
        for component in &plan.components {
            let mut command = cmake_install_command(&build_dir, &plan.destdir, Some(component.as_str()));
            command.current_dir(dh.root());
            crate::process::run(&mut command)?;
        }
    }

    Ok(())
}

fn plan_installs(dh: &Debhelper) -> Result<Vec<InstallPlan>> {
    let metadata = if dh.root().join(crate::cpack::METADATA_PATH).exists() {
        Some(CpackMetadata::load(dh.root())?)
    } else {
        None
    };

    let mut plans = Vec::new();
    for package in dh.packages() {
        let mut components = dh
            .read_package_list(&package, CMAKE_COMPONENTS_EXTENSION)?
            .unwrap_or_default();

        if let Some(metadata) = &metadata {
            let selection = PackageSelection::read(dh, &package)?;
            components.extend(Resolver::new(metadata).all_components_of(&selection)?);
        }

        let components = dedup_preserving_order(components);
        if components.is_empty() {
            tracing::debug!(package = %package, "No components for package");
            continue;
        }

        plans.push(InstallPlan {
            destdir: dh.tmpdir(&package),
            package,
            components,
        });
    }

    Ok(plans)
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// `cmake -P <build_dir>/cmake_install.cmake` for one component
///
/// Without a component every component is installed.
pub fn cmake_install_command(build_dir: &Path, destdir: &Path, component: Option<&str>) -> Command {
    let mut command = Command::new("cmake");
    if let Some(component) = component {
        command.arg(format!("-DCOMPONENT={}", component));
    }
    command
        .arg("-P")
        .arg(build_dir.join("cmake_install.cmake"))
        .env("DESTDIR", destdir);
    command
}
