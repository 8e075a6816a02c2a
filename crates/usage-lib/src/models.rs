//! Core data models for the usage analyzer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names read from a usage report
pub mod columns {
    pub const CPU_USAGE: &str = "Max CPU Usage (mCores)";
    pub const CPU_LIMIT: &str = "Total CPU Limit (mCores)";
    pub const MEM_USAGE: &str = "Max Mem Usage";
    pub const MEM_LIMIT: &str = "Total Mem Limit";
    pub const NET_RECEIVE: &str = "Max Network Receive";
    pub const NET_TRANSMIT: &str = "Max Network Transmit";

    /// Every column a report must carry, in report order
    pub const REQUIRED: [&str; 6] = [
        CPU_USAGE,
        CPU_LIMIT,
        MEM_USAGE,
        MEM_LIMIT,
        NET_RECEIVE,
        NET_TRANSMIT,
    ];

    pub const CPU_CATEGORY: &str = "CPU Usage Category";
    pub const MEMORY_CATEGORY: &str = "Memory Usage Category";
    pub const NETWORK_CATEGORY: &str = "Network Usage Category";
}

/// Borrowed view over the resource columns of a single report row.
///
/// `None` marks a missing cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceRow<'a> {
    pub cpu_usage: Option<&'a str>,
    pub cpu_limit: Option<&'a str>,
    pub mem_usage: Option<&'a str>,
    pub mem_limit: Option<&'a str>,
    pub net_receive: Option<&'a str>,
    pub net_transmit: Option<&'a str>,
}

/// How much of its limit a workload actually uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitmentCategory {
    /// Below 40% of the limit
    MostOvercommit,
    /// Between 40% and 60% of the limit
    Overcommit,
    /// At or above 60% of the limit
    Normal,
}

impl CommitmentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CommitmentCategory::MostOvercommit => "Most overcommit (< 40%)",
            CommitmentCategory::Overcommit => "Overcommit (40% - 60%)",
            CommitmentCategory::Normal => "Normal (> 60%)",
        }
    }
}

impl fmt::Display for CommitmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Peak network throughput bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkActivity {
    Low,
    Medium,
    High,
}

impl NetworkActivity {
    pub fn label(&self) -> &'static str {
        match self {
            NetworkActivity::Low => "Low (< 1 MB/s)",
            NetworkActivity::Medium => "Medium (< 50 MB/s)",
            NetworkActivity::High => "High",
        }
    }
}

impl fmt::Display for NetworkActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three categories derived for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCategories {
    pub cpu: CommitmentCategory,
    pub memory: CommitmentCategory,
    pub network: NetworkActivity,
}

/// Category dimension, in the order reports are published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Cpu,
    Memory,
    Network,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Cpu, Dimension::Memory, Dimension::Network];

    /// Name of the column this dimension is written to
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Cpu => columns::CPU_CATEGORY,
            Dimension::Memory => columns::MEMORY_CATEGORY,
            Dimension::Network => columns::NETWORK_CATEGORY,
        }
    }

    /// Human-readable heading used in distribution summaries
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Cpu => "CPU Usage Categories Distribution",
            Dimension::Memory => "Memory Usage Categories Distribution",
            Dimension::Network => "Network Usage Categories Distribution",
        }
    }
}
