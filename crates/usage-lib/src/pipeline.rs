//! Load, classify, report and write a usage report in one pass

use crate::classifier::categorize_row;
use crate::error::{AnalyzerError, Result};
use crate::models::{Dimension, RowCategories};
use crate::observability::RunLogger;
use crate::report::{Distribution, ReportSink, UsageReport};
use crate::table::UsageTable;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a run reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Usage report to analyze
    pub input: PathBuf,
    /// Destination of the annotated report
    pub output: PathBuf,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    pub report: UsageReport,
    pub output: PathBuf,
}

/// Classify every row and append the three category columns.
///
/// The first unparseable value aborts the whole table; nothing is appended
/// in that case.
pub fn annotate(table: &mut UsageTable) -> Result<UsageReport> {
    let categories = table
        .rows()?
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            categorize_row(row).map_err(|source| AnalyzerError::InvalidValue {
                row: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<RowCategories>>>()?;

    let cpu: Vec<&str> = categories.iter().map(|c| c.cpu.label()).collect();
    let memory: Vec<&str> = categories.iter().map(|c| c.memory.label()).collect();
    let network: Vec<&str> = categories.iter().map(|c| c.network.label()).collect();

    table.set_column(Dimension::Cpu.column(), &cpu)?;
    table.set_column(Dimension::Memory.column(), &memory)?;
    table.set_column(Dimension::Network.column(), &network)?;

    Ok(UsageReport {
        cpu: Distribution::from_labels(Dimension::Cpu, cpu),
        memory: Distribution::from_labels(Dimension::Memory, memory),
        network: Distribution::from_labels(Dimension::Network, network),
    })
}

/// Run the whole pipeline.
///
/// The report is published to `sink` before the annotated table is written,
/// so a failed write still leaves the distributions visible.
pub fn run(config: &RunConfig, sink: &mut impl ReportSink) -> Result<RunSummary> {
    let logger = RunLogger::new(&config.input);
    logger.log_started(&config.output);

    let result = execute(config, sink, &logger);
    if let Err(err) = &result {
        logger.log_failed(err);
    }
    result
}

fn execute(
    config: &RunConfig,
    sink: &mut impl ReportSink,
    logger: &RunLogger,
) -> Result<RunSummary> {
    let mut table = UsageTable::load(&config.input)?;
    logger.log_loaded(table.height(), table.width());

    let report = annotate(&mut table)?;
    for distribution in report.distributions() {
        logger.log_distribution(distribution);
    }
    sink.publish(&report);

    table.write(&config.output)?;
    logger.log_written(&config.output, table.height(), table.width());

    Ok(RunSummary {
        rows: table.height(),
        columns: table.width(),
        report,
        output: config.output.clone(),
    })
}
