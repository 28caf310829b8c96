//! `debian/<package>.substvars` files
//!
//! Each line is `name=value`. Setting a variable replaces the line of the
//! same name in place and keeps every other line untouched.

use std::path::Path;

use crate::error::{self, Result};

/// In-memory substvars file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substvars {
    lines: Vec<String>,
}

impl Substvars {
    /// Load an existing substvars file; a missing file is empty
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        Self {
            lines: content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Value of `name`, if set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let (key, value) = split_line(line)?;
            (key == name).then_some(value)
        })
    }

    /// Set `name` to `value`, replacing an existing definition
    pub fn set(&mut self, name: &str, value: &str) {
        let line = format!("{}={}", name, value);
        let existing = self
            .lines
            .iter()
            .position(|l| split_line(l).is_some_and(|(key, _)| key == name));

        match existing {
            Some(index) => self.lines[index] = line,
            None => self.lines.push(line),
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_text())
            .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))
    }
}

/// Split a substvars line into name and value
///
/// Also accepts the `name?=value` form used for optional variables.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim_end_matches('?'), value))
}
