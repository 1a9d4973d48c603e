use crate::cli::support::assay;
use predicates::prelude::*;

// ============================================================================
// Help, version and global flag tests
// ============================================================================

#[test]
fn test_help_flag() {
    assay()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assess"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("lexicon"));
}

#[test]
fn test_version_flag() {
    assay()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("assay"));
}

#[test]
fn test_no_command_prints_banner() {
    assay()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `assay --help`"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    assay()
        .args(["--format", "xml", "lexicon"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let output = assay()
        .args(["--format", "json", "grade"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let json: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}
