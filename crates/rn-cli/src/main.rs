//! Relnorm CLI - schema normalization from the command line

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{basis, check, closure, decompose, keys};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Closure(args) => closure::execute(args, &cli.global),
        cli::Commands::Keys(args) => keys::execute(args, &cli.global),
        cli::Commands::Check(args) => check::execute(args, &cli.global),
        cli::Commands::Basis(args) => basis::execute(args, &cli.global),
        cli::Commands::Decompose(args) => decompose::execute(args, &cli.global),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
