//! Shared helpers for command implementations

use anyhow::{Context, Result};
use rn_core::{FunctionalDependency, Relation};
use rn_parse::{parse_fds, parse_schema};
use serde::Serialize;

/// Parse the relation/dependency argument pair every schema-level command
/// takes, validating that the dependencies stay inside the schema.
pub fn parse_inputs(relation: &str, fds: &str) -> Result<(Relation, Vec<FunctionalDependency>)> {
    let (relation, fds) = parse_schema(relation, fds).context("Failed to parse schema")?;
    log::debug!("parsed {relation} with {} dependencies", fds.len());
    Ok((relation, fds))
}

/// Parse a bare dependency list.
pub fn parse_dependencies(fds: &str) -> Result<Vec<FunctionalDependency>> {
    parse_fds(fds).context("Failed to parse dependencies")
}

/// Print a serializable report as pretty JSON.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
