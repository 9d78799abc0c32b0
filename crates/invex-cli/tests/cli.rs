use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../../invex-core/tests/common/mod.rs"]
mod common;

use common::{AMAZON_LINES, write_pdf};

fn invex(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("invex").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

/// Empty JSON config so the user's own config file is never read.
fn default_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, "{}").unwrap();
    path
}

fn reports_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_empty_input_folder_writes_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = default_config(dir.path());
    let input = dir.path().join("Input_Folder");
    let output = dir.path().join("Output_Folder");
    fs::create_dir(&input).unwrap();

    invex(&config)
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No PDF files found"))
        .stdout(predicate::str::contains("Report written to"));

    let reports = reports_in(&output);
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("extracted_invoices_"));
    assert!(reports[0].ends_with(".xlsx"));
}

#[test]
fn test_corrupt_file_is_listed_and_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let config = default_config(dir.path());
    let input = dir.path().join("in");
    let output = dir.path().join("out");
    fs::create_dir(&input).unwrap();
    write_pdf(&input, "amazon_order.pdf", &["Tax Invoice", "Order Number: 402-1234567-7654321"]);
    fs::write(input.join("broken.pdf"), b"garbage").unwrap();

    invex(&config)
        .args(["extract", "--format", "csv"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed files:"))
        .stdout(predicate::str::contains("broken.pdf"));

    let reports = reports_in(&output);
    assert_eq!(reports.len(), 1);
    let content = fs::read_to_string(output.join(&reports[0])).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("amazon_order.pdf,Amazon,"));
}

#[test]
fn test_no_arguments_uses_default_folders() {
    let dir = tempfile::tempdir().unwrap();
    let config = default_config(dir.path());
    let input = dir.path().join("InvoiceDataExtraction").join("Input_Folder");
    fs::create_dir_all(&input).unwrap();
    write_pdf(&input, "amazon_march.pdf", AMAZON_LINES);

    invex(&config)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 PDF files"))
        .stdout(predicate::str::contains("Report written to"));

    let reports = reports_in(&dir.path().join("InvoiceDataExtraction").join("Output_Folder"));
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("extracted_invoices_"));
    assert!(reports[0].ends_with(".xlsx"));
}

#[test]
fn test_missing_input_folder_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = default_config(dir.path());

    invex(&config)
        .arg("extract")
        .arg("-i")
        .arg(dir.path().join("missing"))
        .arg("-o")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory does not exist"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    invex(&config)
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn test_config_init_set_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    invex(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    invex(&config).args(["config", "init"]).assert().success();
    assert!(config.exists());

    invex(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    invex(&config)
        .args(["config", "set", "report.format", "csv"])
        .assert()
        .success();

    invex(&config)
        .args(["config", "get", "report.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"csv\""));

    invex(&config)
        .args(["config", "set", "report.colour", "blue"])
        .assert()
        .failure();
}
