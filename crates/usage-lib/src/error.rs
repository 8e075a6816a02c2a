//! Error types for the analyzer pipeline

use crate::classifier::FieldError;
use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read table from '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// `row` counts data rows from 1, excluding the header
    #[error("row {row}: {source}")]
    InvalidValue {
        row: usize,
        #[source]
        source: FieldError,
    },

    #[error("failed to write table to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("table error: {0}")]
    Table(#[from] PolarsError),
}

impl AnalyzerError {
    /// True when the input path did not resolve to a file
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, AnalyzerError::InputNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
