use crate::cli::support::{assay, setup_submissions, write_docx};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Assess command tests
// ============================================================================

#[test]
fn test_assess_writes_default_report() {
    let dir = setup_submissions();

    assay()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"))
        .stdout(predicate::str::contains("A3-assessments.auto.qmd"));

    let report = fs::read_to_string(dir.path().join("A3-assessments.auto.qmd")).unwrap();
    assert!(report.starts_with("---\n"));
    assert!(report.contains("# Individual Feedback"));
    assert!(report.contains("## 1. Alex Kim {#alex-kim}"));
    assert!(report.contains("## 2. Jane Doe {#jane-doe}"));
    assert!(report.contains("**Estimated Grade: 17/100**"));
    assert!(report.contains("**Estimated Grade: 0/100**"));
    assert!(!report.contains("## 3."));
}

#[test]
fn test_assess_quiet_suppresses_summary() {
    let dir = setup_submissions();

    assay()
        .args(["--quiet", "assess"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("A3-assessments.auto.qmd").exists());
}

#[test]
fn test_assess_explicit_output_path() {
    let dir = setup_submissions();
    let out = tempdir().unwrap();
    let path = out.path().join("feedback.qmd");

    assay()
        .arg("assess")
        .arg(dir.path())
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    assert!(path.exists());
    assert!(!dir.path().join("A3-assessments.auto.qmd").exists());
}

#[test]
fn test_assess_stdout_json() {
    let dir = setup_submissions();

    let output = assay()
        .args(["--format", "json", "assess", "--stdout"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Alex Kim");
    assert_eq!(records[0]["grade"], 17);
    assert_eq!(records[0]["sequence_index"], 0);
    assert_eq!(records[1]["submission_id"], "jane-doe");
    assert_eq!(records[1]["grade"], 0);
    assert!(!dir.path().join("A3-assessments.auto.json").exists());
}

#[test]
fn test_assess_records_default_path() {
    let dir = setup_submissions();

    assay()
        .args(["--format", "records", "assess"])
        .arg(dir.path())
        .assert()
        .success();

    let records = fs::read_to_string(dir.path().join("A3-assessments.auto.records")).unwrap();
    assert!(records.starts_with("H assay=1 records=2\n"));
    assert!(records.contains("R 1 id=alex-kim grade=17 name=\"Alex Kim\""));
    assert!(records.contains("R 2 id=jane-doe grade=0 name=\"Jane Doe\""));
}

#[test]
fn test_assess_is_deterministic() {
    let dir = setup_submissions();

    let first = assay()
        .args(["assess", "--stdout"])
        .arg(dir.path())
        .output()
        .unwrap();
    let second = assay()
        .args(["assess", "--stdout"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_assess_reads_docx() {
    let dir = tempdir().unwrap();
    write_docx(
        &dir.path().join("Studio - Priya Nair - A3.docx"),
        &["Research question and hypothesis", "We ran a pilot survey"],
    );

    assay()
        .args(["--format", "records", "assess", "--stdout"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("id=priya-nair"))
        .stdout(predicate::str::contains(
            "S \"Clear articulation of testable hypotheses\"",
        ));
}

#[test]
fn test_assess_unreadable_file_still_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("A3 Broken Doc.docx"), "not a zip archive").unwrap();

    assay()
        .args(["--format", "records", "assess", "--stdout"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("R 1 id=broken-doc grade=0"));
}

#[test]
fn test_assess_empty_dir_is_data_error() {
    let dir = tempdir().unwrap();

    assay()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no submissions found"));
}

#[test]
fn test_assess_missing_dir_json_envelope() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let output = assay()
        .args(["--format", "json", "assess"])
        .arg(&missing)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let json: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(json["error"]["type"], "not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_assess_output_conflicts_with_stdout() {
    let dir = setup_submissions();

    assay()
        .args(["assess", "--stdout", "--output", "x.qmd"])
        .arg(dir.path())
        .assert()
        .code(2);
}
