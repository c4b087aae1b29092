//! Decompose command implementation

use anyhow::Result;
use rn_core::{decompose_3nf, decompose_bcnf, Relation};
use serde::Serialize;

use crate::cli::{DecomposeArgs, GlobalArgs, NormalForm, OutputFormat};
use crate::commands::common;

#[derive(Serialize)]
struct DecomposeReport {
    relation: Relation,
    form: String,
    components: Vec<Relation>,
}

/// Execute the decompose command
pub fn execute(args: &DecomposeArgs, _global: &GlobalArgs) -> Result<()> {
    let (relation, fds) = common::parse_inputs(&args.relation, &args.fds)?;

    let (form, components) = match args.form {
        NormalForm::Bcnf => ("bcnf", decompose_bcnf(&relation, &fds)),
        NormalForm::ThirdNf => ("3nf", decompose_3nf(&relation, &fds)),
    };

    match args.output {
        OutputFormat::Json => common::print_json(&DecomposeReport {
            relation,
            form: form.to_string(),
            components,
        }),
        OutputFormat::Text => {
            println!(
                "{} decomposes into {} relation(s):",
                relation,
                components.len()
            );
            for component in &components {
                println!("  {component}");
            }
            Ok(())
        }
    }
}
