//! Keys command implementation

use anyhow::Result;
use rn_core::{candidate_keys, super_keys, AttributeSet, Relation};
use serde::Serialize;

use crate::cli::{GlobalArgs, KeysArgs, OutputFormat};
use crate::commands::common;

#[derive(Serialize)]
struct KeysReport {
    relation: Relation,
    candidate_keys: Vec<AttributeSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    super_keys: Option<Vec<AttributeSet>>,
}

/// Execute the keys command
pub fn execute(args: &KeysArgs, _global: &GlobalArgs) -> Result<()> {
    let (relation, fds) = common::parse_inputs(&args.relation, &args.fds)?;

    let candidates = candidate_keys(&relation, &fds);
    let supers = args.all.then(|| super_keys(&relation, &fds));

    match args.output {
        OutputFormat::Json => common::print_json(&KeysReport {
            relation,
            candidate_keys: candidates,
            super_keys: supers,
        }),
        OutputFormat::Text => {
            println!("Candidate keys of {relation}:");
            for key in &candidates {
                println!("  {key}");
            }
            if let Some(supers) = supers {
                println!("Super-keys ({}):", supers.len());
                for key in &supers {
                    println!("  {key}");
                }
            }
            Ok(())
        }
    }
}
