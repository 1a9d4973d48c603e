use crate::cli::support::{assay, structured_text};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_human_breakdown() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("A3 Sam Lee.txt");
    fs::write(&file, structured_text()).unwrap();

    assay()
        .arg("score")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Research Design"))
        .stdout(predicate::str::contains("(2/11) hypothesis, success criteria"))
        .stdout(predicate::str::contains("Words: 900"))
        .stdout(predicate::str::contains("## 1. Sam Lee {#sam-lee}"))
        .stdout(predicate::str::contains("**Estimated Grade: 17/100**"));
}

#[test]
fn test_score_json() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("A3 Sam Lee.txt");
    fs::write(&file, "A pilot survey with a figure.").unwrap();

    let output = assay()
        .args(["--format", "json", "score", "--sequence", "4"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["analysis"]["word_count"], 6);
    assert_eq!(json["analysis"]["approaches"][0], "user study");
    assert_eq!(json["analysis"]["pilot_execution"]["matched"][0], "pilot");
    assert_eq!(json["analysis"]["communication"]["category"], "communication");
    assert_eq!(json["record"]["sequence_index"], 4);
    assert_eq!(json["record"]["name"], "Sam Lee");
}

#[test]
fn test_score_records() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("A3 Sam Lee.txt");
    fs::write(&file, "").unwrap();

    assay()
        .args(["--format", "records", "score"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H assay=1 records=1\n"))
        .stdout(predicate::str::contains(
            "M communication score=0.000 matched=0/8 tokens=\"\"",
        ));
}

#[test]
fn test_score_missing_file() {
    let dir = tempdir().unwrap();

    assay()
        .arg("score")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("submission not found"));
}

#[test]
fn test_score_directory_is_usage_error() {
    let dir = tempdir().unwrap();

    assay()
        .arg("score")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("use `assay assess`"));
}
