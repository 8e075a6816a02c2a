//! Category distributions
//!
//! Frequency counts of each label in a category column, published to a
//! [`ReportSink`] once the whole table has been classified.

use crate::models::Dimension;
use serde::Serialize;

/// How often each label occurs in one category column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub dimension: Dimension,
    /// `(label, count)` ordered by count, most frequent first. Ties keep the
    /// order in which the labels first appeared.
    pub counts: Vec<(String, usize)>,
}

impl Distribution {
    /// Count labels in row order
    pub fn from_labels<'a>(dimension: Dimension, labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for label in labels {
            match counts.iter_mut().find(|(seen, _)| seen == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }

        // Stable sort, so first-seen order survives among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self { dimension, counts }
    }

    /// Count for a single label, zero if it never occurred
    pub fn count_of(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(seen, _)| seen == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Number of rows counted
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Distributions for all three dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub cpu: Distribution,
    pub memory: Distribution,
    pub network: Distribution,
}

impl UsageReport {
    /// Distributions in publication order: CPU, memory, network
    pub fn distributions(&self) -> [&Distribution; 3] {
        [&self.cpu, &self.memory, &self.network]
    }

    pub fn get(&self, dimension: Dimension) -> &Distribution {
        match dimension {
            Dimension::Cpu => &self.cpu,
            Dimension::Memory => &self.memory,
            Dimension::Network => &self.network,
        }
    }
}

/// Destination for the distribution summary
pub trait ReportSink {
    fn publish(&mut self, report: &UsageReport);
}

/// Sink that keeps the last published report
impl ReportSink for Option<UsageReport> {
    fn publish(&mut self, report: &UsageReport) {
        *self = Some(report.clone());
    }
}
