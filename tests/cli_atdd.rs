#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ALL_LOW: [&str; 10] = [
    "team-size=1",
    "market-complexity=1",
    "revenue-stage=1",
    "growth-velocity=1",
    "data-reliability=1",
    "process-definition=1",
    "forecast-accuracy=1",
    "inter-team-friction=1",
    "shared-kpis=1",
    "executive-commitment=1",
];

const MIXED: [&str; 10] = [
    "team-size=5",
    "market-complexity=5",
    "revenue-stage=5",
    "growth-velocity=5",
    "data-reliability=3",
    "process-definition=3",
    "forecast-accuracy=3",
    "inter-team-friction=1",
    "shared-kpis=1",
    "executive-commitment=1",
];

fn scorecard(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scorecard").expect("binary should compile");
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

fn with_sets(cmd: &mut Command, assignments: &[&str]) {
    for assignment in assignments {
        cmd.arg("--set").arg(assignment);
    }
}

#[test]
fn score_all_low_is_not_recommended() {
    let home = TempDir::new().expect("temp dir should be created");
    let mut cmd = scorecard(&home);
    cmd.arg("score");
    with_sets(&mut cmd, &ALL_LOW);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("- Section 1, Growth & Complexity: 4 / 20"))
        .stdout(predicate::str::contains("Total: 10 / 50"))
        .stdout(predicate::str::contains("Hiring not recommended (red)"));
}

#[test]
fn score_mixed_profile_as_json() {
    let home = TempDir::new().expect("temp dir should be created");
    let mut cmd = scorecard(&home);
    cmd.args(["score", "--format", "json"]);
    with_sets(&mut cmd, &MIXED);
    let output = cmd.assert().code(0).get_output().stdout.clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be json");
    assert_eq!(value["total"], 32);
    assert_eq!(value["sections"][0]["total"], 20);
    assert_eq!(value["sections"][1]["total"], 9);
    assert_eq!(value["sections"][2]["total"], 3);
    assert_eq!(value["recommendation"]["tier"], "emerging_need");
}

#[test]
fn score_later_assignment_overwrites_earlier() {
    let home = TempDir::new().expect("temp dir should be created");
    let mut cmd = scorecard(&home);
    cmd.arg("score");
    with_sets(&mut cmd, &ALL_LOW);
    with_sets(&mut cmd, &["team-size=5"]);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("Total: 14 / 50"));
}

#[test]
fn score_partial_answers_warn_with_exit_one() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["score", "--set", "teamSize=5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unanswered: market-complexity"))
        .stderr(predicate::str::contains("9 of 10 criteria unanswered"));
}

#[test]
fn score_require_complete_fails_on_missing_answers() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["score", "--set", "team-size=5", "--require-complete"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("questionnaire incomplete"));
}

#[test]
fn score_rejects_value_outside_choices() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["score", "--set", "team-size=4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid rating for team-size: 4"));
}

#[test]
fn score_rejects_unknown_criterion() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["score", "--set", "budget=3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown criterion: budget"));
}

#[test]
fn classify_boundary_totals() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["classify", "35"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("35 / 50: Emerging need"));
    scorecard(&home)
        .args(["classify", "36"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("36 / 50: Strong and immediate need"));
    scorecard(&home)
        .args(["classify", "19"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Hiring not recommended"));
}

#[test]
fn classify_rejects_total_above_maximum() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .args(["classify", "51"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("total out of range: 51"));
}

#[test]
fn repo_config_selects_json_format() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("scorecard.toml"),
        r#"
[report]
format = "json"
"#,
    )
    .expect("config should write");

    let mut cmd = scorecard(&home);
    cmd.arg("score");
    with_sets(&mut cmd, &ALL_LOW);
    cmd.assert()
        .code(0)
        .stdout(predicate::str::contains("\"max_total\": 50"));
}

#[test]
fn config_require_complete_applies_to_score() {
    let home = TempDir::new().expect("temp dir should be created");
    let project = TempDir::new().expect("project dir should be created");
    fs::write(
        project.path().join("scorecard.toml"),
        r#"
[session]
require_complete = true
"#,
    )
    .expect("config should write");

    scorecard(&home)
        .arg("--config-dir")
        .arg(project.path())
        .args(["score", "--set", "team-size=3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("questionnaire incomplete"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("scorecard.toml"),
        r#"
[report]
format = "sarif"
"#,
    )
    .expect("config should write");

    scorecard(&home)
        .arg("questions")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported report.format: sarif"));
}

#[test]
fn interactive_session_scores_piped_answers() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .arg("interactive")
        .write_stdin("5\n5\n5\n5\n5\n3\n3\n3\n1\n1\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All criteria answered."))
        .stdout(predicate::str::contains("Total: 36 / 50"))
        .stdout(predicate::str::contains("Strong and immediate need (green)"));
}

#[test]
fn interactive_session_reprompts_on_invalid_input() {
    let home = TempDir::new().expect("temp dir should be created");
    scorecard(&home)
        .arg("interactive")
        .write_stdin("2\n3\nshow\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("invalid input: invalid rating for team-size: 2"))
        .stdout(predicate::str::contains("Answered: 1 / 10"));
}
