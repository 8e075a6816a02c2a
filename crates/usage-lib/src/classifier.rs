//! Row classifiers
//!
//! Each classifier is a pure function of a [`ResourceRow`]. CPU and memory
//! share the commitment buckets; network uses the busier of the receive and
//! transmit directions.

use crate::models::{columns, CommitmentCategory, NetworkActivity, ResourceRow, RowCategories};
use crate::units::{parse_kilobytes_per_sec, parse_mebibytes, parse_millicores, QuantityError};
use thiserror::Error;

/// Lower bound of the overcommit bucket, in percent of the limit
pub const OVERCOMMIT_THRESHOLD_PCT: f64 = 40.0;

/// Lower bound of the normal bucket, in percent of the limit
pub const NORMAL_THRESHOLD_PCT: f64 = 60.0;

/// Lower bound of medium network activity, in KB/s
pub const MEDIUM_NETWORK_KBPS: f64 = 1000.0;

/// Lower bound of high network activity, in KB/s
pub const HIGH_NETWORK_KBPS: f64 = 50000.0;

/// A cell of a known column that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{column}': {source}")]
pub struct FieldError {
    pub column: &'static str,
    #[source]
    pub source: QuantityError,
}

impl CommitmentCategory {
    /// Bucket a usage percentage. Left-closed, so exactly 40 and 60 move up.
    pub fn from_percentage(pct: f64) -> Self {
        if pct < OVERCOMMIT_THRESHOLD_PCT {
            CommitmentCategory::MostOvercommit
        } else if pct < NORMAL_THRESHOLD_PCT {
            CommitmentCategory::Overcommit
        } else {
            CommitmentCategory::Normal
        }
    }
}

impl NetworkActivity {
    pub fn from_kilobytes_per_sec(kbps: f64) -> Self {
        if kbps < MEDIUM_NETWORK_KBPS {
            NetworkActivity::Low
        } else if kbps < HIGH_NETWORK_KBPS {
            NetworkActivity::Medium
        } else {
            NetworkActivity::High
        }
    }
}

/// Usage as a percentage of the limit; zero when no positive limit is set
pub fn usage_percentage(usage: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        usage / limit * 100.0
    } else {
        0.0
    }
}

/// Classify CPU usage against the CPU limit
pub fn categorize_cpu(row: &ResourceRow<'_>) -> Result<CommitmentCategory, FieldError> {
    let usage = field(columns::CPU_USAGE, parse_millicores(row.cpu_usage))?;
    let limit = field(columns::CPU_LIMIT, parse_millicores(row.cpu_limit))?;

    Ok(CommitmentCategory::from_percentage(usage_percentage(
        usage, limit,
    )))
}

/// Classify memory usage against the memory limit
pub fn categorize_memory(row: &ResourceRow<'_>) -> Result<CommitmentCategory, FieldError> {
    let usage = field(columns::MEM_USAGE, parse_mebibytes(row.mem_usage))?;
    let limit = field(columns::MEM_LIMIT, parse_mebibytes(row.mem_limit))?;

    Ok(CommitmentCategory::from_percentage(usage_percentage(
        usage, limit,
    )))
}

/// Classify the peak of receive and transmit throughput
pub fn categorize_network(row: &ResourceRow<'_>) -> Result<NetworkActivity, FieldError> {
    let receive = field(columns::NET_RECEIVE, parse_kilobytes_per_sec(row.net_receive))?;
    let transmit = field(
        columns::NET_TRANSMIT,
        parse_kilobytes_per_sec(row.net_transmit),
    )?;

    Ok(NetworkActivity::from_kilobytes_per_sec(receive.max(transmit)))
}

/// Run all three classifiers over a row
pub fn categorize_row(row: &ResourceRow<'_>) -> Result<RowCategories, FieldError> {
    Ok(RowCategories {
        cpu: categorize_cpu(row)?,
        memory: categorize_memory(row)?,
        network: categorize_network(row)?,
    })
}

fn field(column: &'static str, parsed: Result<f64, QuantityError>) -> Result<f64, FieldError> {
    parsed.map_err(|source| FieldError { column, source })
}
