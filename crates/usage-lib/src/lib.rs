//! Library for categorizing container resource usage reports
//!
//! This crate provides:
//! - Unit-aware parsing of CPU, memory and network quantities
//! - CPU, memory and network usage classifiers
//! - Report loading, annotation and writing
//! - Category distribution summaries
//! - Structured logging of pipeline runs

pub mod classifier;
pub mod error;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod units;


pub use classifier::{categorize_cpu, categorize_memory, categorize_network, categorize_row};
pub use error::AnalyzerError;
pub use models::*;
pub use observability::RunLogger;
pub use pipeline::{annotate, run, RunConfig, RunSummary};
pub use report::{Distribution, ReportSink, UsageReport};
pub use table::UsageTable;
