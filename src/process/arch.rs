//! Host architecture values from `dpkg-architecture`

use std::collections::HashMap;
use std::process::Command;
use std::sync::OnceLock;

use crate::error::{self, Result};

static VALUES: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Parse `KEY=value` lines as printed by `dpkg-architecture`
pub fn parse_values(output: &str) -> HashMap<String, String> {
    output
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// All `dpkg-architecture` values, queried once per process
pub fn dpkg_architecture() -> Result<&'static HashMap<String, String>> {
    if let Some(values) = VALUES.get() {
        return Ok(values);
    }

    let stdout = crate::process::output(&mut Command::new("dpkg-architecture"))
        .map_err(|e| error::architecture_query_failed(e.to_string()))?;

    Ok(VALUES.get_or_init(|| parse_values(&stdout)))
}

/// GNU system type of the host, e.g. `x86_64-linux-gnu`
pub fn host_gnu_type() -> Result<String> {
    dpkg_architecture()?
        .get("DEB_HOST_GNU_TYPE")
        .cloned()
        .ok_or_else(|| error::architecture_query_failed("DEB_HOST_GNU_TYPE is not set"))
}
