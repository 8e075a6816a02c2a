//! Quantity parsing for usage report cells
//!
//! Report cells carry unit-suffixed strings such as `300m`, `600Mi` or
//! `2MB/s`. Missing cells and the `No Data` sentinel read as zero rather
//! than failing; only a remainder that is not a number at all is an error.

use thiserror::Error;

/// Placeholder written by the report exporter when a metric was not collected
pub const NO_DATA: &str = "No Data";

/// Cell texts that spreadsheet and dataframe exports use for a missing value
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Kilobytes per second in one megabyte per second
pub const KB_PER_MB: f64 = 1024.0;

/// Bytes per second in one kilobyte per second
pub const BYTES_PER_KB: f64 = 1024.0;

/// A cell whose numeric part could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a numeric quantity")]
pub struct QuantityError {
    pub value: String,
}

/// Parse a millicore quantity (`300m`)
pub fn parse_millicores(value: Option<&str>) -> Result<f64, QuantityError> {
    match present(value) {
        Some(raw) => strip_and_parse(raw, "m"),
        None => Ok(0.0),
    }
}

/// Parse a mebibyte quantity (`600Mi`)
pub fn parse_mebibytes(value: Option<&str>) -> Result<f64, QuantityError> {
    match present(value) {
        Some(raw) => strip_and_parse(raw, "Mi"),
        None => Ok(0.0),
    }
}

/// Parse a throughput (`2MB/s`, `512KB/s`, `1024B/s`) into KB/s.
///
/// Values carrying none of the known units read as zero.
pub fn parse_kilobytes_per_sec(value: Option<&str>) -> Result<f64, QuantityError> {
    let Some(raw) = present(value) else {
        return Ok(0.0);
    };

    if raw.contains("MB/s") {
        Ok(strip_and_parse(raw, "MB/s")? * KB_PER_MB)
    } else if raw.contains("KB/s") {
        strip_and_parse(raw, "KB/s")
    } else if raw.contains("B/s") {
        Ok(strip_and_parse(raw, "B/s")? / BYTES_PER_KB)
    } else {
        Ok(0.0)
    }
}

/// Filter out missing cells, blank cells, missing markers and the sentinel
fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty() && *raw != NO_DATA && !MISSING_MARKERS.contains(raw))
}

/// Strip the trailing run of unit characters and parse what is left.
///
/// Any trailing character that appears in `suffix` is removed, so an
/// unsuffixed number parses as its own magnitude.
fn strip_and_parse(raw: &str, suffix: &str) -> Result<f64, QuantityError> {
    let number = raw.trim_end_matches(|c| suffix.contains(c)).trim_end();

    number.parse::<f64>().map_err(|_| QuantityError {
        value: raw.to_string(),
    })
}
