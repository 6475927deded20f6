use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RBC_STATEMENT: &str = "\
Date Description Withdrawals ($) Deposits ($) Balance ($)
Jan 02 Balance forward 500.00
Jan 05 Payment received 100.00 600.00
Jan 08 Grocery store 25.50 574.50
";

fn stmtx(dir: &TempDir) -> Command {
    let config = dir.path().join("config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }

    let mut cmd = Command::cargo_bin("stmtx").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn statement(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_formats_lists_registry() {
    let dir = TempDir::new().unwrap();
    stmtx(&dir)
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("rbc-account"))
        .stdout(predicate::str::contains("desjardins-account"))
        .stdout(predicate::str::contains("citi-card"));
}

#[test]
fn test_formats_json() {
    let dir = TempDir::new().unwrap();
    let output = stmtx(&dir).args(["formats", "--json"]).output().unwrap();
    assert!(output.status.success());

    let formats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(formats.as_array().map(Vec::len), Some(25));
    assert_eq!(formats[0]["id"], "rbc-account");
}

#[test]
fn test_convert_text_to_csv() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "january.txt", RBC_STATEMENT);

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .args(["--format", "rbc-account", "-t", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date,Description,Debit,Credit,Balance"))
        .stdout(predicate::str::contains("Jan 05,Payment received,,100.00,600.00"))
        .stdout(predicate::str::contains("Jan 08,Grocery store,25.50,,574.50"));
}

#[test]
fn test_convert_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "january.txt", RBC_STATEMENT);
    let output = dir.path().join("out.json");

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .args(["--format", "rbc-account", "--year", "2024", "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["format_id"], "rbc-account");
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["rows"][0]["date"], "Jan 05 2024");
}

#[test]
fn test_convert_without_transactions_warns() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "empty.txt", "Thank you for banking with us\n");

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .args(["--format", "td-card", "-t", "csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no transactions found"));
}

#[test]
fn test_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "january.txt", RBC_STATEMENT);

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .args(["--format", "nope-account"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown statement format"));
}

#[test]
fn test_invalid_year_fails() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "january.txt", RBC_STATEMENT);

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .args(["--format", "rbc-account", "--year", "24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid statement year"));
}

#[test]
fn test_missing_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = statement(&dir, "january.txt", RBC_STATEMENT);

    stmtx(&dir)
        .arg("convert")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No statement format given"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    statement(&dir, "january.txt", RBC_STATEMENT);
    statement(&dir, "february.txt", "Feb 03 ATM withdrawal 40.00 534.50\n");
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    stmtx(&dir)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .args(["--format", "rbc-account", "-t", "csv", "--summary", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out_dir.join("january.csv").exists());
    assert!(out_dir.join("february.csv").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,format,rows"));
    assert!(summary.contains("january.txt,success,rbc-account,2,1,1,"));
}

#[test]
fn test_config_set_and_get_use_config_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    stmtx(&dir)
        .args(["config", "set", "conversion.default_year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024\""));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("\"2024\""));

    stmtx(&dir)
        .args(["config", "get", "conversion.default_year"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2024\""));
}

#[test]
fn test_config_path_reports_config_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    stmtx(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.display().to_string()))
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn test_config_init_writes_to_config_flag() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("stmtx.json");

    let mut cmd = Command::cargo_bin("stmtx").unwrap();
    cmd.arg("--config")
        .arg(&target)
        .args(["config", "init"])
        .assert()
        .success();

    assert!(target.exists());
}
