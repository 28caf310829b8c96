//! `debian/control` parsing
//!
//! The control file is a sequence of deb822 paragraphs separated by blank
//! lines. The first paragraph describes the source package, every following
//! paragraph one binary package.
//!
//! ```text
//! Source: dh-cmake-test
//! Maintainer: Alice <a@example.org>
//!
//! Package: libdh-cmake-test
//! Architecture: any
//! Description: Test library
//!  Long description continues here.
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{self, Result};

/// Location of the control file relative to the source directory
pub const CONTROL_PATH: &str = "debian/control";

/// One deb822 paragraph with case-insensitive field names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    fields: BTreeMap<String, String>,
}

impl Paragraph {
    /// Field value, looked up case-insensitively
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(&field.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn insert(&mut self, field: &str, value: String) {
        self.fields.insert(field.to_ascii_lowercase(), value);
    }

    fn append_line(&mut self, field: &str, line: &str) {
        if let Some(value) = self.fields.get_mut(&field.to_ascii_lowercase()) {
            value.push('\n');
            value.push_str(line);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Source paragraph of the control file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePackage {
    pub name: String,
    pub paragraph: Paragraph,
}

/// Binary package paragraph of the control file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPackage {
    pub name: String,
    pub architecture: String,
    pub paragraph: Paragraph,
}

impl BinaryPackage {
    /// Whether the package is architecture independent (`Architecture: all`)
    pub fn is_arch_independent(&self) -> bool {
        self.architecture == "all"
    }
}

/// Parsed `debian/control`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub source: SourcePackage,
    pub packages: Vec<BinaryPackage>,
}

impl Control {
    /// Read `debian/control` under `source_dir`
    pub fn load(source_dir: &Path) -> Result<Self> {
        let path = source_dir.join(CONTROL_PATH);
        if !path.is_file() {
            return Err(error::control_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;

        Self::parse(&content).map_err(|reason| {
            error::control_parse_failed(path.display().to_string(), reason)
        })
    }

    /// Parse control file text
    ///
    /// Errors are plain reasons; [`Control::load`] attaches the path.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let mut paragraphs = parse_paragraphs(content)?.into_iter();

        let source_paragraph = paragraphs
            .next()
            .ok_or_else(|| "control file is empty".to_string())?;
        let source_name = source_paragraph
            .get("Source")
            .ok_or_else(|| "first paragraph has no Source field".to_string())?
            .to_string();

        let packages = paragraphs
            .enumerate()
            .map(|(index, paragraph)| {
                let name = paragraph
                    .get("Package")
                    .ok_or_else(|| format!("binary paragraph {} has no Package field", index + 1))?
                    .to_string();
                let architecture = paragraph.get("Architecture").unwrap_or("any").to_string();
                Ok(BinaryPackage {
                    name,
                    architecture,
                    paragraph,
                })
            })
            .collect::<std::result::Result<Vec<_>, String>>()?;

        Ok(Self {
            source: SourcePackage {
                name: source_name,
                paragraph: source_paragraph,
            },
            packages,
        })
    }

    /// Binary package by name
    pub fn package(&self, name: &str) -> Option<&BinaryPackage> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Names of all binary packages in control file order
    pub fn package_names(&self) -> Vec<String> {
        self.packages.iter().map(|p| p.name.clone()).collect()
    }
}

fn parse_paragraphs(content: &str) -> std::result::Result<Vec<Paragraph>, String> {
    let mut paragraphs = Vec::new();
    let mut current = Paragraph::default();
    let mut last_field: Option<String> = None;

    for (number, line) in content.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }

        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            last_field = None;
            continue;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            let field = last_field
                .as_deref()
                .ok_or_else(|| format!("line {}: continuation line without a field", number + 1))?;
            current.append_line(field, line.trim());
            continue;
        }

        let (field, value) = line
            .split_once(':')
            .ok_or_else(|| format!("line {}: expected 'Field: value'", number + 1))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(format!("line {}: empty field name", number + 1));
        }

        current.insert(field, value.trim().to_string());
        last_field = Some(field.to_string());
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}
