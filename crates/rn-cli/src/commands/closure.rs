//! Closure command implementation

use anyhow::{Context, Result};
use rn_core::{closure, AttributeSet};
use rn_parse::parse_attributes;
use serde::Serialize;

use crate::cli::{ClosureArgs, GlobalArgs, OutputFormat};
use crate::commands::common;

#[derive(Serialize)]
struct ClosureReport {
    attributes: AttributeSet,
    closure: AttributeSet,
    iterations: usize,
}

/// Execute the closure command
pub fn execute(args: &ClosureArgs, _global: &GlobalArgs) -> Result<()> {
    let attrs = parse_attributes(&args.attrs).context("Failed to parse attribute list")?;
    let fds = common::parse_dependencies(&args.fds)?;

    let result = closure(&attrs, &fds);
    match args.output {
        OutputFormat::Json => common::print_json(&ClosureReport {
            attributes: attrs,
            closure: result.closure().clone(),
            iterations: result.iterations(),
        }),
        OutputFormat::Text => {
            println!(
                "{attrs}+ = {} ({} passes)",
                result.closure(),
                result.iterations()
            );
            Ok(())
        }
    }
}
