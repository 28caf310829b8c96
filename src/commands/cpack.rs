//! Cpack command implementation
//!
//! - `generate` runs the CPack External generator to produce the metadata
//! - `substvars` writes `cpack:Depends` for every acted-on package
//! - `show` prints the resolved components and dependencies of each package

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use console::Style;

use crate::cli::{CpackArgs, CpackSubcommand};
use crate::commands::helpers::resolve_source_dir;
use crate::cpack::{CpackMetadata, PackageSelection, Resolver, format_depends};
use crate::debhelper::Debhelper;
use crate::error::Result;

/// Substitution variable receiving the generated dependencies
pub const DEPENDS_SUBSTVAR: &str = "cpack:Depends";

/// Run cpack command
pub fn run(source_dir: Option<PathBuf>, args: CpackArgs) -> Result<()> {
    let root = resolve_source_dir(source_dir)?;

    match args.command {
        CpackSubcommand::Generate(args) => generate(&Debhelper::open(&root, args.dh)?),
        CpackSubcommand::Substvars(args) => substvars(&Debhelper::open(&root, args.dh)?),
        CpackSubcommand::Show(args) => show(&Debhelper::open(&root, args.dh)?),
    }
}

/// `cpack --config <build_dir>/CPackConfig.cmake -G Ext ...`
pub fn generate_command(build_dir: &Path) -> Command {
    let mut command = Command::new("cpack");
    command
        .arg("--config")
        .arg(build_dir.join("CPackConfig.cmake"))
        .args(["-G", "Ext"])
        .args(["-D", "CPACK_PACKAGE_FILE_NAME=cpack-metadata"])
        .args(["-B", crate::cpack::METADATA_DIR]);
    command
}

fn generate(dh: &Debhelper) -> Result<()> {
    let mut command = generate_command(&dh.build_directory()?);
    command.current_dir(dh.root());

    tracing::info!("Generating CPack metadata");
    crate::process::run(&mut command)
}

/// Selections of every package declared in the control file
///
/// Dependency targets are all control packages, so every selection is read
/// and later validated, not only the acted-on ones.
fn read_selections(dh: &Debhelper) -> Result<Vec<PackageSelection>> {
    PackageSelection::read_all(dh, &dh.all_packages())
}

fn substvars(dh: &Debhelper) -> Result<()> {
    let metadata = CpackMetadata::load(dh.root())?;
    let dependencies = Resolver::new(&metadata).dependency_map(&read_selections(dh)?)?;

    for package in dh.packages() {
        let depends = dependencies.get(&package).and_then(|deps| format_depends(deps));
        match depends {
            Some(depends) => dh.write_substvar(&package, DEPENDS_SUBSTVAR, &depends)?,
            None => tracing::debug!(package = %package, "No CPack dependencies"),
        }
    }

    Ok(())
}

fn show(dh: &Debhelper) -> Result<()> {
    let metadata = CpackMetadata::load(dh.root())?;
    let resolver = Resolver::new(&metadata);
    let selections = read_selections(dh)?;
    let closures = resolver.closures(&selections)?;
    let packages = dh.packages();

    let shown: Vec<&PackageSelection> = selections
        .iter()
        .filter(|selection| packages.contains(&selection.name))
        .collect();

    if shown.is_empty() {
        println!("No packages selected.");
        return Ok(());
    }

    println!(
        "{} {} ({} components, {} component groups)\n",
        Style::new().bold().apply_to("Source:"),
        dh.control().source.name,
        metadata.components().count(),
        metadata.groups().count()
    );

    let empty = BTreeSet::new();
    for selection in shown {
        let components = closures.get(&selection.name).unwrap_or(&empty);
        let depends = resolver.dependencies_of(&selection.name, &closures);
        print_package(selection, components, &depends);
    }

    Ok(())
}

fn print_package(
    selection: &PackageSelection,
    components: &BTreeSet<String>,
    depends: &BTreeSet<String>,
) {
    let label = Style::new().bold();

    println!("{}", Style::new().bold().yellow().apply_to(&selection.name));

    if selection.is_empty() {
        println!("  {}", Style::new().dim().apply_to("No CPack components or groups claimed"));
        println!();
        return;
    }

    if !selection.groups.is_empty() {
        println!(
            "  {} {}",
            label.apply_to("Groups:"),
            selection.groups.join(", ")
        );
    }

    if components.is_empty() {
        println!("  {} {}", label.apply_to("Components:"), Style::new().dim().apply_to("none"));
    } else {
        println!("  {}", label.apply_to("Components:"));
        for component in components {
            println!("    {}", Style::new().cyan().apply_to(component));
        }
    }

    match format_depends(depends) {
        Some(depends) => println!("  {} {}", label.apply_to("Depends:"), depends),
        None => println!("  {} {}", label.apply_to("Depends:"), Style::new().dim().apply_to("none")),
    }

    println!();
}
