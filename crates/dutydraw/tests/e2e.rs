//! End-to-end CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ROSTER: &str = "id,name,P1,P2\n1,Alice,X,Y\n2,Bob,Y,X\n";

fn dutydraw() -> Command {
    let mut cmd = Command::cargo_bin("dutydraw").expect("binary not found");
    cmd.env_remove("DUTYDRAW_DATA").env("NO_COLOR", "1");
    cmd
}

fn roster(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

fn data_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn help_flag() {
    dutydraw()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--period"));
}

#[test]
fn version_flag() {
    dutydraw()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dutydraw"));
}

#[test]
fn draws_whole_roster_in_order() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice → X"))
        .stdout(predicate::str::contains("2. Bob → Y"))
        .stdout(predicate::str::contains("All done!"));
}

#[test]
fn second_period_reads_its_own_column() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "-p", "P2", "--no-animation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice → Y"))
        .stdout(predicate::str::contains("2. Bob → X"));
}

#[test]
fn quiet_prints_values_only() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1", "-q"])
        .assert()
        .success()
        .stdout("X\nY\n");
}

#[test]
fn count_limits_reveals() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice → X"))
        .stdout(predicate::str::contains("Bob").not())
        .stdout(predicate::str::contains("1 left"));
}

#[test]
fn json_report() {
    let (_dir, path) = roster(ROSTER);
    let output = dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["period"], "P1");
    assert_eq!(report["total"], 2);
    assert_eq!(report["complete"], true);
    let revealed = report["revealed"].as_array().unwrap();
    assert_eq!(revealed.len(), 2);
    assert_eq!(revealed[0]["label"], "1. Alice");
    assert_eq!(revealed[0]["value"], "X");
    assert_eq!(revealed[1]["value"], "Y");
}

#[test]
fn short_row_shows_placeholder() {
    let (_dir, path) = roster("id,name,P1,P2\n1,Alice,X\n");
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Alice → —"));
}

#[test]
fn bom_prefixed_roster() {
    let (_dir, path) = roster("\u{feff}id,name,P1\n1,Alice,X\n");
    dutydraw()
        .args(["--data", data_arg(&path), "--list-periods"])
        .assert()
        .success()
        .stdout(" 1. P1\n");
}

#[test]
fn list_periods() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "--list-periods"])
        .assert()
        .success()
        .stdout(" 1. P1\n 2. P2\n");
}

#[test]
fn list_periods_json() {
    let (_dir, path) = roster(ROSTER);
    let output = dutydraw()
        .args(["--data", data_arg(&path), "--list-periods", "--json"])
        .output()
        .unwrap();
    let periods: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(periods, ["P1", "P2"]);
}

#[test]
fn data_from_environment() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .env("DUTYDRAW_DATA", &path)
        .arg("--list-periods")
        .assert()
        .success()
        .stdout(predicate::str::contains("P2"));
}

#[test]
fn header_only_roster() {
    let (_dir, path) = roster("id,name,P1\n");
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→").not())
        .stderr(predicate::str::contains("no students"));
}

#[test]
fn missing_file_exits_with_load_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn empty_file_exits_with_load_code() {
    let (_dir, path) = roster("");
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn unknown_period_exits_with_config_code() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path), "--period", "P9"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown period 'P9'"));
}

#[test]
fn missing_period_exits_with_config_code() {
    let (_dir, path) = roster(ROSTER);
    dutydraw()
        .args(["--data", data_arg(&path)])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("P1, P2"));
}

#[test]
fn assign_writes_result_file() {
    let (dir, path) = roster("id,name,P1\n2,Bob,Y\n1,Alice,X\n");
    let output = dir.path().join("final_result.csv");
    dutydraw()
        .args([
            "--data",
            data_arg(&path),
            "--assign",
            "P2",
            "--output",
            data_arg(&output),
            "--seed",
            "11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("assigned 2 cell(s)"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["id,name,P1,P2", "1,Alice,X,Y", "2,Bob,Y,X"]);
}

#[test]
fn assigned_file_can_be_drawn() {
    let (dir, path) = roster("id,name,P1\n1,Alice,X\n2,Bob,Y\n");
    let output = dir.path().join("final_result.csv");
    dutydraw()
        .args(["--data", data_arg(&path), "--assign", "P2", "-o", data_arg(&output), "-q"])
        .assert()
        .success();

    dutydraw()
        .args(["--data", data_arg(&output), "--period", "P2", "-q"])
        .assert()
        .success()
        .stdout("Y\nX\n");
}

#[test]
fn departments_without_assign_is_rejected() {
    dutydraw().args(["--departments", "X,Y"]).assert().failure();
}

#[test]
fn completion_bash() {
    dutydraw()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dutydraw"));
}
