use crate::cli::support::{assay, setup_submissions};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Rubric configuration tests
// ============================================================================

#[test]
fn test_local_config_overrides_report() {
    let dir = setup_submissions();
    fs::write(
        dir.path().join("assay.toml"),
        "version = 1\n\n[report]\ntitle = \"Pilot Review\"\noutput_file = \"feedback.qmd\"\n",
    )
    .unwrap();

    assay()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("feedback.qmd"));

    let report = fs::read_to_string(dir.path().join("feedback.qmd")).unwrap();
    assert!(report.contains("title: Pilot Review"));
}

#[test]
fn test_explicit_config_overrides_lexicon() {
    let config_dir = tempdir().unwrap();
    let config = config_dir.path().join("rubric.toml");
    fs::write(
        &config,
        "[lexicon]\ncommunication = [\"Chart\", \"legend\"]\n\n\
         [[lexicon.approach]]\nname = \"archival\"\ntokens = [\"archive\"]\n",
    )
    .unwrap();

    let dir = tempdir().unwrap();
    let file = dir.path().join("A3 Sam Lee.txt");
    fs::write(&file, "An archive chart.").unwrap();

    let output = assay()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("score")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["analysis"]["communication"]["matched"][0], "chart");
    assert_eq!(json["analysis"]["communication"]["lexicon_size"], 2);
    assert_eq!(json["analysis"]["approaches"][0], "archival");
}

#[test]
fn test_invalid_lexicon_is_data_error() {
    let dir = setup_submissions();
    fs::write(
        dir.path().join("assay.toml"),
        "[lexicon]\ndocumentation = []\n",
    )
    .unwrap();

    assay()
        .arg("assess")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid lexicon"));
}

#[test]
fn test_unsupported_config_version() {
    let dir = setup_submissions();
    fs::write(dir.path().join("assay.toml"), "version = 9\n").unwrap();

    assay().arg("assess").arg(dir.path()).assert().code(2);
}
