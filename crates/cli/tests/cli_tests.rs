//! CLI integration tests

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const REPORT: &str = "Pod,Max CPU Usage (mCores),Total CPU Limit (mCores),Max Mem Usage,Total Mem Limit,Max Network Receive,Max Network Transmit
api-0,300m,1000m,600Mi,1000Mi,2MB/s,100KB/s
api-1,450m,1000m,No Data,2048Mi,No Data,No Data
";

fn analyzer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_usage-analyzer"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = analyzer(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("--input"), "Should show input option");
    assert!(stdout.contains("--output"), "Should show output option");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = analyzer(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("usage-analyzer"), "Should show binary name");
}

/// Both paths are required
#[test]
fn test_missing_arguments() {
    let output = analyzer(&["--input", "usage.csv"]);
    assert!(!output.status.success(), "Missing --output should fail");
}

/// Analyze a report end to end
#[test]
fn test_analyze_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("usage.csv");
    let out = temp_dir.path().join("annotated.csv");
    std::fs::write(&input, REPORT).unwrap();

    let output = analyzer(&["--input", path_arg(&input), "--output", path_arg(&out)]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "Analysis should succeed");

    let cpu = stdout
        .find("CPU Usage Categories Distribution:")
        .expect("Should print CPU distribution");
    let memory = stdout
        .find("Memory Usage Categories Distribution:")
        .expect("Should print memory distribution");
    let network = stdout
        .find("Network Usage Categories Distribution:")
        .expect("Should print network distribution");
    let saved = stdout
        .find("Results have been saved to")
        .expect("Should confirm the output path");
    assert!(cpu < memory && memory < network && network < saved);

    assert!(stdout.contains("Most overcommit (< 40%)"));
    assert!(stdout.contains("Overcommit (40% - 60%)"));
    assert!(stdout.contains("Medium (< 50 MB/s)"));

    let written = std::fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Pod,Max CPU Usage (mCores),Total CPU Limit (mCores),Max Mem Usage,Total Mem Limit,Max Network Receive,Max Network Transmit,CPU Usage Category,Memory Usage Category,Network Usage Category"
    );
    assert_eq!(
        lines.next().unwrap(),
        "api-0,300m,1000m,600Mi,1000Mi,2MB/s,100KB/s,Most overcommit (< 40%),Normal (> 60%),Medium (< 50 MB/s)"
    );
    assert_eq!(
        lines.next().unwrap(),
        "api-1,450m,1000m,No Data,2048Mi,No Data,No Data,Overcommit (40% - 60%),Most overcommit (< 40%),Low (< 1 MB/s)"
    );
    assert!(lines.next().is_none());
}

/// Missing input exits with status 1 and writes nothing
#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("absent.csv");
    let out = temp_dir.path().join("annotated.csv");

    let output = analyzer(&["--input", path_arg(&input), "--output", path_arg(&out)]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("not found"), "Should report missing input");
    assert!(!out.exists(), "No output file should be written");
}

/// Unparseable values exit with status 1
#[test]
fn test_unparseable_value() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("usage.csv");
    let out = temp_dir.path().join("annotated.csv");
    std::fs::write(
        &input,
        "Max CPU Usage (mCores),Total CPU Limit (mCores),Max Mem Usage,Total Mem Limit,Max Network Receive,Max Network Transmit\nbusy,1000m,1Mi,2Mi,1KB/s,1KB/s\n",
    )
    .unwrap();

    let output = analyzer(&["--input", path_arg(&input), "--output", path_arg(&out)]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("An unexpected error occurred"));
    assert!(stderr.contains("busy"));
    assert!(!out.exists());
}
