// Integration tests for the attendance binary
#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PEOPLE: &str = "id\tnombre\tcity\n1\tLuis\tLima\n2\tAna\tQuito\n3\t\tCusco\n4\tLuis\tLima\n";

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("people.tsv"), PEOPLE).unwrap();
    dir
}

fn attendance(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("attendance").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn attendance_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("attendances_") && n.ends_with(".csv"))
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_names_lists_distinct_sorted() {
    let dir = workspace();

    attendance(dir.path())
        .arg("names")
        .assert()
        .success()
        .stdout(predicate::str::contains("Column: nombre (matched header)"))
        .stdout(predicate::str::contains("Names (2):\n  Ana\n  Luis\n"));
}

#[test]
fn test_names_json() {
    let dir = workspace();

    let output = attendance(dir.path())
        .args(["names", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["column"], "nombre");
    assert_eq!(value["rule"], "canonical");
    assert_eq!(value["names"], serde_json::json!(["Ana", "Luis"]));
}

#[test]
fn test_missing_input_lists_siblings_and_fails() {
    let dir = workspace();
    fs::write(dir.path().join("other.tsv"), "name\nZoe\n").unwrap();

    attendance(dir.path())
        .args(["--input", "dobs.tsv", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load the people list"))
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("other.tsv"));

    assert!(attendance_files(dir.path()).is_empty());
}

#[test]
fn test_empty_input_is_a_load_error() {
    let dir = workspace();
    fs::write(dir.path().join("blank.tsv"), "").unwrap();

    attendance(dir.path())
        .args(["--input", "blank.tsv", "names"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load the people list"))
        .stderr(predicate::str::contains("no columns found in header"));
}

#[test]
fn test_no_name_column_warns_with_headers() {
    let dir = workspace();
    fs::write(dir.path().join("scores.tsv"), "id\tscore\n1\t9.5\n").unwrap();

    attendance(dir.path())
        .args(["--input", "scores.tsv", "names"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no name column found"))
        .stderr(predicate::str::contains("id\nscore"));
}

#[test]
fn test_record_selected_names() {
    let dir = workspace();

    attendance(dir.path())
        .args(["record", "--name", "Luis", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total present: 2"))
        .stdout(predicate::str::contains("• Ana\n• Luis"));

    let files = attendance_files(dir.path());
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Name,Status,RecordDate,Timestamp");
    assert_eq!(lines.len(), 3);

    let ana: Vec<&str> = lines[1].split(',').collect();
    let luis: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(ana[0], "Ana");
    assert_eq!(luis[0], "Luis");
    assert_eq!(ana[1], "Present");
    assert_eq!(ana[2..], luis[2..]);
}

#[test]
fn test_record_unknown_name_fails() {
    let dir = workspace();

    attendance(dir.path())
        .args(["record", "--name", "Pedro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name 'Pedro'"))
        .stderr(predicate::str::contains("could not load").not());

    assert!(attendance_files(dir.path()).is_empty());
}

#[test]
fn test_record_all_into_output_dir() {
    let dir = workspace();
    fs::create_dir(dir.path().join("out")).unwrap();

    attendance(dir.path())
        .args(["--output-dir", "out", "record", "--all"])
        .assert()
        .success();

    assert_eq!(attendance_files(&dir.path().join("out")).len(), 1);
    assert!(attendance_files(dir.path()).is_empty());
}

#[test]
fn test_check_session() {
    let dir = workspace();

    attendance(dir.path())
        .arg("check")
        .write_stdin("s\n2\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: no people selected"))
        .stdout(predicate::str::contains("[ ] Ana"))
        .stdout(predicate::str::contains("People selected: 1"))
        .stdout(predicate::str::contains("• Luis"));

    assert_eq!(attendance_files(dir.path()).len(), 1);
}

#[test]
fn test_config_file_and_init_config() {
    let dir = workspace();
    fs::write(dir.path().join("people.csv"), "person,age\nMaria,30\nJose,41\n").unwrap();

    attendance(dir.path())
        .args(["--input", "people.csv", "init-config", "--output", "attendance.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file: attendance.json"));

    let mut config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("attendance.json")).unwrap())
            .unwrap();
    assert_eq!(config["input"], "people.csv");

    config["delimiter"] = serde_json::json!(",");
    fs::write(dir.path().join("attendance.json"), config.to_string()).unwrap();

    attendance(dir.path())
        .args(["--config", "attendance.json", "names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Column: person"))
        .stdout(predicate::str::contains("  Jose\n  Maria\n"));
}

#[test]
fn test_inspect_shows_kinds() {
    let dir = workspace();

    attendance(dir.path())
        .args(["inspect", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 4"))
        .stdout(predicate::str::contains("numeric"))
        .stdout(predicate::str::contains("... (2 more rows)"));
}
