//! Structured logging for analyzer runs
//!
//! Every pipeline stage emits one `tracing` event tagged with an `event`
//! field and the report being analyzed, so runs can be followed in the log output.

use crate::error::AnalyzerError;
use crate::report::Distribution;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Structured logger for pipeline events
#[derive(Clone)]
pub struct RunLogger {
    input: PathBuf,
}

impl RunLogger {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Log the start of a run
    pub fn log_started(&self, output: &Path) {
        info!(
            event = "run_started",
            input = %self.input.display(),
            output = %output.display(),
            "Analyzing usage report"
        );
    }

    /// Log a successfully loaded report
    pub fn log_loaded(&self, rows: usize, columns: usize) {
        info!(
            event = "report_loaded",
            input = %self.input.display(),
            rows = rows,
            columns = columns,
            "Loaded usage report"
        );
    }

    /// Log the distribution computed for one dimension
    pub fn log_distribution(&self, distribution: &Distribution) {
        debug!(
            event = "distribution_computed",
            input = %self.input.display(),
            dimension = ?distribution.dimension,
            distinct_labels = distribution.counts.len(),
            rows = distribution.total(),
            "Computed category distribution"
        );
    }

    /// Log the annotated report being written
    pub fn log_written(&self, output: &Path, rows: usize, columns: usize) {
        info!(
            event = "report_written",
            input = %self.input.display(),
            output = %output.display(),
            rows = rows,
            columns = columns,
            "Wrote annotated usage report"
        );
    }

    /// Log a run that aborted
    pub fn log_failed(&self, err: &AnalyzerError) {
        warn!(
            event = "run_failed",
            input = %self.input.display(),
            input_not_found = err.is_input_not_found(),
            error = %err,
            "Usage analysis failed"
        );
    }
}

