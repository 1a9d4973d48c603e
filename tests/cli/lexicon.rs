use crate::cli::support::assay;
use predicates::prelude::*;

// ============================================================================
// Lexicon command tests
// ============================================================================

#[test]
fn test_lexicon_human() {
    assay()
        .arg("lexicon")
        .assert()
        .success()
        .stdout(predicate::str::contains("research_design [40%] (11)"))
        .stdout(predicate::str::contains("communication [10%] (8)"))
        .stdout(predicate::str::contains("case study (2): case study, case-study"));
}

#[test]
fn test_lexicon_json() {
    let output = assay().args(["--format", "json", "lexicon"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pilot_execution"]["tokens"][0], "pilot");
    assert_eq!(json["approaches"].as_array().unwrap().len(), 5);
}

#[test]
fn test_lexicon_records() {
    assay()
        .args(["--format", "records", "lexicon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L documentation \"protocol\""))
        .stdout(predicate::str::contains("A \"simulation\" \"energyplus\""));
}
