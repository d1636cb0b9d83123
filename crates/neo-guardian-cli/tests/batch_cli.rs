use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn batch_command() -> Command {
    let mut cmd = cargo_bin_cmd!("neo-guardian");
    cmd.env_remove("NEO_GUARDIAN_MODEL")
        .env_remove("NEO_GUARDIAN_DATA_DIR")
        .env("NO_COLOR", "1")
        .env("LANG", "C")
        .env_remove("LC_ALL")
        .env("RUST_LOG", "error")
        .arg("--no-logo")
        .arg("--model")
        .arg(fixtures_dir().join("asteroid_guardian_v1.json"))
        .arg("batch")
        .arg("--input")
        .arg(fixtures_dir().join("observations.csv"));
    cmd
}

#[test]
fn batch_prints_session_table_and_summary() {
    batch_command()
        .assert()
        .success()
        .stdout(contains("Time"))
        .stdout(contains("NEO-2026-A10"))
        .stdout(contains("NEO-2026-B21"))
        .stdout(contains("Scanned 3 objects: 2 hazardous, 1 safe"));
}

#[test]
fn batch_json_lists_entries() {
    let output = batch_command()
        .args(["--format", "json"])
        .output()
        .expect("run batch");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(body["scanned"], 3);
    assert_eq!(body["hazardous"], 2);
    let entries = body["entries"].as_array().expect("entries array");
    assert_eq!(entries[0]["designation"], "NEO-2026-A10");
    assert_eq!(entries[1]["result"]["is_hazardous"], true);
    assert_eq!(entries[2]["result"]["size_class"], "planet_killer");
}

#[test]
fn batch_export_matches_table_rows() {
    let temp = tempdir().expect("create temp dir");
    let export = temp.path().join("nested/log.csv");

    batch_command().arg("--export").arg(&export).assert().success();

    let contents = fs::read_to_string(&export).expect("export written");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains(",NEO-2026-A10,22.0,15.0,0.01000,136,SAFE,14.8%"));
    assert!(lines[2].contains(",NEO-2026-B21,18.0,20.0,0.01000,861,HAZARDOUS,62.2%"));
    assert!(lines[3].contains(",12.0,15.0,0.01000,13660,HAZARDOUS,96.3%"));
}

#[test]
fn invalid_row_is_reported_with_row_number() {
    let temp = tempdir().expect("create temp dir");
    let input = temp.path().join("bad.csv");
    fs::write(
        &input,
        "mag,velocity,miss_distance,moid,condition_code,eccentricity\n22.0,15.0,0.05,0.01,5,0.5\n40.0,15.0,0.05,0.01,5,0.5\n",
    )
    .expect("write input");

    let mut cmd = cargo_bin_cmd!("neo-guardian");
    cmd.env("RUST_LOG", "error")
        .arg("--no-logo")
        .arg("--model")
        .arg(fixtures_dir().join("asteroid_guardian_v1.json"))
        .arg("batch")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("failed to read observations"))
        .stderr(contains("row 3"));
}
