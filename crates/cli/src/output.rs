//! Output formatting utilities

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use usage_lib::{Dimension, Distribution, ReportSink, UsageReport};

/// Row for a category distribution table
#[derive(Tabled)]
struct CategoryCountRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Prints each distribution as a table on stdout
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn publish(&mut self, report: &UsageReport) {
        for dimension in Dimension::ALL {
            print_distribution(report.get(dimension));
        }
    }
}

/// Print one distribution under its heading
pub fn print_distribution(distribution: &Distribution) {
    println!();
    println!("{}", format!("{}:", distribution.dimension.title()).bold());

    if distribution.counts.is_empty() {
        println!("{}", "No rows found".yellow());
        return;
    }

    let rows: Vec<CategoryCountRow> = distribution
        .counts
        .iter()
        .map(|(label, count)| CategoryCountRow {
            category: color_category(label),
            count: *count,
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Color a category label by how far usage is from its allocation
pub fn color_category(label: &str) -> String {
    if label.starts_with("Most overcommit") {
        label.red().to_string()
    } else if label.starts_with("Overcommit") {
        label.yellow().to_string()
    } else if label.starts_with("Normal") {
        label.green().to_string()
    } else {
        label.to_string()
    }
}
