//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Relnorm - relational schema normalization toolkit
#[derive(Parser, Debug)]
#[command(name = "rn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the closure of an attribute set under the dependencies
    Closure(ClosureArgs),

    /// List candidate keys, and optionally every super-key
    Keys(KeysArgs),

    /// Check BCNF and 3NF membership and list violating dependencies
    Check(CheckArgs),

    /// Reduce the dependencies to a minimal basis
    Basis(BasisArgs),

    /// Decompose the relation into BCNF or 3NF
    Decompose(DecomposeArgs),
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Target normal forms for decomposition
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    /// Boyce-Codd Normal Form (lossless, may lose dependencies)
    Bcnf,
    /// Third Normal Form (lossless and dependency-preserving)
    #[value(name = "3nf")]
    ThirdNf,
}

/// Arguments for the closure command
#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// Attribute list to close over, e.g. "A,B"
    #[arg(short, long)]
    pub attrs: String,

    /// Functional dependencies, e.g. "A->B,BC->D" (default: none)
    #[arg(short, long, default_value = "")]
    pub fds: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the keys command
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Relation schema, e.g. "R(A,B,C)"
    #[arg(short, long)]
    pub relation: String,

    /// Functional dependencies, e.g. "A->B,BC->D" (default: none)
    #[arg(short, long, default_value = "")]
    pub fds: String,

    /// Also list every super-key, ascending by size
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Relation schema, e.g. "R(A,B,C)"
    #[arg(short, long)]
    pub relation: String,

    /// Functional dependencies, e.g. "A->B,BC->D" (default: none)
    #[arg(short, long, default_value = "")]
    pub fds: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the basis command
#[derive(Args, Debug)]
pub struct BasisArgs {
    /// Functional dependencies, e.g. "A->BC,B->C"
    #[arg(short, long)]
    pub fds: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the decompose command
#[derive(Args, Debug)]
pub struct DecomposeArgs {
    /// Relation schema, e.g. "R(A,B,C)"
    #[arg(short, long)]
    pub relation: String,

    /// Functional dependencies, e.g. "A->B,BC->D" (default: none)
    #[arg(short, long, default_value = "")]
    pub fds: String,

    /// Target normal form
    #[arg(long, value_enum, default_value = "bcnf")]
    pub form: NormalForm,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
