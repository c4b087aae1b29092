//! Check command implementation

use anyhow::Result;
use rn_core::{is_bcnf, is_third_nf, violations, FunctionalDependency, Relation};
use serde::Serialize;

use crate::cli::{CheckArgs, GlobalArgs, OutputFormat};
use crate::commands::common;

#[derive(Serialize)]
struct CheckReport {
    relation: Relation,
    bcnf: bool,
    third_nf: bool,
    violations: Vec<FunctionalDependency>,
}

/// Execute the check command
pub fn execute(args: &CheckArgs, _global: &GlobalArgs) -> Result<()> {
    let (relation, fds) = common::parse_inputs(&args.relation, &args.fds)?;

    let report = CheckReport {
        bcnf: is_bcnf(&relation, &fds),
        third_nf: is_third_nf(&relation, &fds),
        violations: violations(&relation, &fds),
        relation,
    };

    match args.output {
        OutputFormat::Json => common::print_json(&report),
        OutputFormat::Text => {
            println!("{}", report.relation);
            println!("BCNF: {}", if report.bcnf { "yes" } else { "no" });
            println!("3NF:  {}", if report.third_nf { "yes" } else { "no" });
            if !report.violations.is_empty() {
                println!("Dependencies violating BCNF:");
                for fd in &report.violations {
                    println!("  {fd}");
                }
            }
            Ok(())
        }
    }
}
