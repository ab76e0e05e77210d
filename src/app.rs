//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - builds the parameter table
//! - writes the TSV (and optional manifest)
//! - prints the column summary

use std::path::Path;

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::domain::{CleaveModel, SweepConfig};
use crate::error::AppError;
use crate::io::SweepManifest;
use crate::table::SORT_KEYS;

pub mod pipeline;

/// Entry point for the `sweep` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is fine; it only ever carries RUST_LOG.
    dotenvy::dotenv().ok();
    crate::logging::init_logging();

    let cli = Cli::parse();
    let config = sweep_config_from_args(&cli);
    generate(&config)
}

/// Build the table for `config` and write every requested output.
pub fn generate(config: &SweepConfig) -> Result<(), AppError> {
    let run = pipeline::build_sweep(config)?;

    // The table is complete in memory before anything touches the disk.
    crate::io::write_table_tsv(&config.output, &run.table)?;
    info!(
        path = %config.output.display(),
        rows = run.table.len(),
        "wrote parameter table"
    );

    if let Some(path) = &config.manifest {
        write_manifest(path, config, &run)?;
    }

    if config.summary {
        print!("{}", crate::report::format_table_summary(&run.table));
    }

    Ok(())
}

fn write_manifest(path: &Path, config: &SweepConfig, run: &pipeline::SweepRun) -> Result<(), AppError> {
    let manifest = SweepManifest::new(
        &config.output,
        run.table.len(),
        &run.factors,
        &run.groups,
        &SORT_KEYS,
    );
    crate::io::write_manifest_json(path, &manifest)?;
    info!(path = %path.display(), "wrote sweep manifest");
    Ok(())
}

pub fn sweep_config_from_args(cli: &Cli) -> SweepConfig {
    let cleave_models = if cli.cleave_models.is_empty() {
        CleaveModel::ALL.to_vec()
    } else {
        cli.cleave_models.clone()
    };

    SweepConfig {
        output: cli.output.clone(),
        stall_rates: cli.stall_rates.clone(),
        cleave_models,
        manifest: cli.manifest.clone(),
        summary: !cli.no_summary,
    }
}
