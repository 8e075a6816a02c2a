//! Container Usage Analyzer CLI
//!
//! Categorizes each workload in a resource usage report by CPU, memory and
//! network usage, prints the category distributions and writes an annotated
//! copy of the report.

mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use usage_lib::{AnalyzerError, RunConfig};

/// Container Usage Analyzer
#[derive(Parser)]
#[command(name = "usage-analyzer")]
#[command(author, version, about = "Analyze container resource usage from a CSV report", long_about = None)]
pub struct Cli {
    /// Input CSV file path
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV file path
    #[arg(long)]
    pub output: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig::new(cli.input, cli.output)
    }
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::from(Cli::parse());

    match analyze(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn analyze(config: &RunConfig) -> Result<()> {
    let mut console = output::ConsoleSink;
    let summary = usage_lib::run(config, &mut console)?;

    println!();
    output::print_success(&format!(
        "Results have been saved to {}",
        summary.output.display()
    ));

    Ok(())
}

fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<AnalyzerError>() {
        Some(AnalyzerError::InputNotFound(path)) => {
            output::print_error(&format!("Error: Input file '{}' not found", path.display()));
        }
        _ => {
            output::print_error(&format!("Error: An unexpected error occurred: {}", err));
        }
    }
}
