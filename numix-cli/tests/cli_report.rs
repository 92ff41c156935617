use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn numix() -> Command {
    Command::cargo_bin("numix").expect("numix binary")
}

#[test]
fn writes_log_txt_by_default() {
    let dir = tempdir().expect("temp dir");
    numix().current_dir(dir.path()).assert().success();

    let report = std::fs::read_to_string(dir.path().join("log.txt")).expect("log.txt");
    assert!(report.contains("Overloaded Operators"));
    assert!(report.contains("== \"nm1\" STATS =="));
    assert!(report.contains("== \"dm1\" STATS =="));
    assert!(report.contains("Stack size: 2"));
    assert!(report.contains("Mixed-Mode Arithmetic"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = tempdir().expect("temp dir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    for path in [&first, &second] {
        numix()
            .arg("--seed")
            .arg("1234")
            .arg("--output")
            .arg(path)
            .assert()
            .success();
    }

    let first = std::fs::read_to_string(first).expect("first report");
    let second = std::fs::read_to_string(second).expect("second report");
    assert_eq!(first, second);
}

#[test]
fn json_format_writes_parseable_report() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("report.json");
    numix()
        .args(["--seed", "7", "--format", "json", "--output"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).expect("json report");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["dubMix"]["mixers"][0]["combine_mode"], 3);
    assert!(value["pings"].is_object());
}

#[test]
fn rejects_unknown_format() {
    numix()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("log.txt");
    numix()
        .arg("--output")
        .arg(&path)
        .assert()
        .code(255)
        .stderr(predicate::str::contains("io error"));
}
