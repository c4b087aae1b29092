//! Basis command implementation

use anyhow::Result;
use rn_core::{minimal_basis, FunctionalDependency};
use serde::Serialize;

use crate::cli::{BasisArgs, GlobalArgs, OutputFormat};
use crate::commands::common;

#[derive(Serialize)]
struct BasisReport {
    input: Vec<FunctionalDependency>,
    basis: Vec<FunctionalDependency>,
}

/// Execute the basis command
pub fn execute(args: &BasisArgs, _global: &GlobalArgs) -> Result<()> {
    let fds = common::parse_dependencies(&args.fds)?;
    let basis = minimal_basis(&fds);

    match args.output {
        OutputFormat::Json => common::print_json(&BasisReport { input: fds, basis }),
        OutputFormat::Text => {
            println!("Minimal basis ({} dependencies):", basis.len());
            for fd in &basis {
                println!("  {fd}");
            }
            Ok(())
        }
    }
}
