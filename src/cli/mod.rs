//! Command-line parsing for the sweep generator.
//!
//! Running with no arguments reproduces the stock parameter table.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{CleaveModel, DEFAULT_OUTPUT, DEFAULT_STALL_RATE};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sweep",
    version,
    about = "Generate the parameter table for mRNA endocleavage simulations"
)]
pub struct Cli {
    /// Output TSV path (overwritten if it exists).
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base elongation rate at the stall; repeat to sweep several.
    ///
    /// Each rate is multiplied by 6 and listed once per stall codon.
    #[arg(long = "stall-rate", value_name = "RATE", default_values_t = [DEFAULT_STALL_RATE])]
    pub stall_rates: Vec<f64>,

    /// Cleavage model group(s) to include; repeat for several (default: all).
    #[arg(long = "cleave-model", value_enum, value_name = "MODEL")]
    pub cleave_models: Vec<CleaveModel>,

    /// Also write a JSON manifest describing the sweep.
    #[arg(long, value_name = "JSON")]
    pub manifest: Option<PathBuf>,

    /// Do not print the column summary.
    #[arg(long)]
    pub no_summary: bool,
}
