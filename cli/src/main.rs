//! FLOWNET command-line driver
//!
//! The I/O collaborator around the core solver: reads a capacity-matrix
//! file, computes the maximum flow and minimum cut, and writes the result
//! file. The computation itself lives in `flownet-core`; everything here is
//! argument handling, parsing, and formatting.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

mod error;
mod format;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flownet_core::{FlowNetwork, MaxFlowSolver};
use log::debug;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "flownet",
    version,
    about = "Maximum-flow / minimum-cut solver for dense capacitated networks"
)]
struct Cli {
    /// Input file: a vertex count followed by a row-major capacity matrix
    input: PathBuf,

    /// Output file: total flow, flow matrix, and 1-based source-side cut
    /// (overwritten if it exists)
    output: PathBuf,

    /// Emit the solver summary as JSON instead of the text format
    #[arg(long)]
    json: bool,

    /// Log solver progress (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = fs::read_to_string(&cli.input).map_err(|source| CliError::ReadInput {
        path: cli.input.clone(),
        source,
    })?;

    let capacity = format::parse_capacity_matrix(&text)?;
    debug!("parsed {n} x {n} capacity matrix", n = capacity.len());

    let network = FlowNetwork::from_capacities(capacity)?;
    let summary = MaxFlowSolver::new().solve(network)?;

    let rendered = if cli.json {
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        json
    } else {
        format::render_summary(&summary)
    };

    fs::write(&cli.output, rendered).map_err(|source| CliError::WriteOutput {
        path: cli.output.clone(),
        source,
    })?;
    Ok(())
}
