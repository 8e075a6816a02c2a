//! Usage report loading and writing
//!
//! Reports are read with every column as text so that cell values survive
//! the round trip exactly; empty cells come back as nulls and are written
//! out as empty fields again.

use crate::error::{AnalyzerError, Result};
use crate::models::{columns, ResourceRow};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// An in-memory usage report
pub struct UsageTable {
    frame: DataFrame,
}

impl UsageTable {
    /// Load a comma-delimited report with a header row.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnalyzerError::InputNotFound(path.to_path_buf()));
        }

        // A zero-length schema inference window reads every column as String
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|source| AnalyzerError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { frame })
    }

    /// Number of data rows
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Cells of a column as text, `None` for missing cells
    pub fn column_values(&self, name: &str) -> Result<Vec<Option<String>>> {
        let values = self
            .text_column(name)?
            .into_iter()
            .map(|cell| cell.map(str::to_string))
            .collect();
        Ok(values)
    }

    /// Resource views over every row, in table order
    pub fn rows(&self) -> Result<Vec<ResourceRow<'_>>> {
        let cpu_usage = self.text_column(columns::CPU_USAGE)?;
        let cpu_limit = self.text_column(columns::CPU_LIMIT)?;
        let mem_usage = self.text_column(columns::MEM_USAGE)?;
        let mem_limit = self.text_column(columns::MEM_LIMIT)?;
        let net_receive = self.text_column(columns::NET_RECEIVE)?;
        let net_transmit = self.text_column(columns::NET_TRANSMIT)?;

        let rows = (0..self.height())
            .map(|idx| ResourceRow {
                cpu_usage: cpu_usage.get(idx),
                cpu_limit: cpu_limit.get(idx),
                mem_usage: mem_usage.get(idx),
                mem_limit: mem_limit.get(idx),
                net_receive: net_receive.get(idx),
                net_transmit: net_transmit.get(idx),
            })
            .collect();

        Ok(rows)
    }

    /// Set a text column. A new name is appended after the existing
    /// columns; an existing name is overwritten where it stands.
    pub fn set_column(&mut self, name: &str, values: &[&str]) -> Result<()> {
        self.frame.with_column(Column::new(name.into(), values))?;
        Ok(())
    }

    /// Write the table as a comma-delimited file with a header row and no
    /// index column.
    pub fn write(&mut self, path: &Path) -> Result<()> {
        File::create(path)
            .map_err(PolarsError::from)
            .and_then(|mut file| {
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(&mut self.frame)
            })
            .map_err(|source| AnalyzerError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    fn text_column(&self, name: &str) -> Result<&StringChunked> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| AnalyzerError::MissingColumn(name.to_string()))?;

        Ok(column.as_materialized_series().str()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "Pod,Max CPU Usage (mCores),Total CPU Limit (mCores),Max Mem Usage,Total Mem Limit,Max Network Receive,Max Network Transmit";

    fn write_report(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("usage.csv");
        std::fs::write(&path, format!("{HEADER}\n{body}")).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_text_and_order() {
        let dir = TempDir::new().unwrap();
        let path = write_report(
            &dir,
            "api-0,300m,1000m,600Mi,1000Mi,2MB/s,100KB/s\nworker-1,0050m,,No Data,512Mi,No Data,12B/s\n",
        );

        let table = UsageTable::load(&path).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 7);
        assert_eq!(table.column_names()[0], "Pod");

        let cpu = table.column_values(columns::CPU_USAGE).unwrap();
        assert_eq!(cpu, vec![Some("300m".to_string()), Some("0050m".to_string())]);

        let rows = table.rows().unwrap();
        assert_eq!(rows[1].cpu_limit, None);
        assert_eq!(rows[1].mem_usage, Some("No Data"));
        assert_eq!(rows[0].net_receive, Some("2MB/s"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = UsageTable::load(&dir.path().join("absent.csv")).err().unwrap();
        assert!(err.is_input_not_found());
    }

    #[test]
    fn test_rows_require_resource_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.csv");
        std::fs::write(&path, "Pod,Max CPU Usage (mCores)\napi-0,300m\n").unwrap();

        let table = UsageTable::load(&path).unwrap();
        match table.rows() {
            Err(AnalyzerError::MissingColumn(name)) => assert_eq!(name, columns::CPU_LIMIT),
            other => panic!("expected missing column, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_set_column_appends_then_replaces() {
        let dir = TempDir::new().unwrap();
        let path = write_report(&dir, "api-0,300m,1000m,600Mi,1000Mi,2MB/s,100KB/s\n");

        let mut table = UsageTable::load(&path).unwrap();
        table.set_column("Extra", &["first"]).unwrap();
        table.set_column("Extra", &["second"]).unwrap();

        let names = table.column_names();
        assert_eq!(names.len(), 8);
        assert_eq!(names.last().unwrap(), "Extra");
        assert_eq!(
            table.column_values("Extra").unwrap(),
            vec![Some("second".to_string())]
        );
    }

    #[test]
    fn test_write_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_report(
            &dir,
            "\"api, primary\",300m,1000m,600Mi,1000Mi,2MB/s,100KB/s\nworker-1,50m,,No Data,512Mi,No Data,12B/s\n",
        );

        let mut table = UsageTable::load(&path).unwrap();
        let out = dir.path().join("out.csv");
        table.write(&out).unwrap();

        let reloaded = UsageTable::load(&out).unwrap();
        assert_eq!(reloaded.column_names(), table.column_names());
        for name in table.column_names() {
            assert_eq!(
                reloaded.column_values(&name).unwrap(),
                table.column_values(&name).unwrap()
            );
        }
        assert_eq!(
            reloaded.column_values("Pod").unwrap()[0].as_deref(),
            Some("api, primary")
        );
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_report(&dir, "api-0,300m,1000m,600Mi,1000Mi,2MB/s,100KB/s\n");

        let mut table = UsageTable::load(&path).unwrap();
        let err = table
            .write(&dir.path().join("missing").join("out.csv"))
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Write { .. }));
    }
}
