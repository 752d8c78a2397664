//! Smoke tests for the boundmap binary.

use assert_cmd::Command;
use boundmap::testkit::sample_catalog;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn catalog_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(&sample_catalog()).unwrap()).unwrap();
    path
}

fn boundmap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boundmap").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_optimize_json_to_file() {
    let dir = TempDir::new().unwrap();
    let input = catalog_file(&dir);
    let output = dir.path().join("result.json");

    boundmap(&dir)
        .arg("optimize")
        .arg(&input)
        .args(["--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["optimizedBoundaries"].as_array().unwrap().len(), 5);
    assert_eq!(json["migrationPlan"]["totalDuration"], "9-17 weeks");
}

#[test]
fn test_scaled_plan_mode_flag() {
    let dir = TempDir::new().unwrap();
    let input = catalog_file(&dir);

    let assert = boundmap(&dir)
        .arg("optimize")
        .arg(&input)
        .args(["-f", "json", "--plan-mode", "scaled"])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_ne!(json["migrationPlan"]["totalDuration"], "9-17 weeks");
}

#[test]
fn test_health_markdown() {
    let dir = TempDir::new().unwrap();
    let input = catalog_file(&dir);

    let assert = boundmap(&dir)
        .arg("health")
        .arg(&input)
        .args(["--format", "markdown"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("brand-profile"));
    assert!(stdout.contains("listings"));
}

#[test]
fn test_malformed_input_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "{ not json").unwrap();

    boundmap(&dir)
        .arg("optimize")
        .arg(&input)
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    boundmap(&dir)
        .args(["health", "does-not-exist.json"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_init_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();

    boundmap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".boundmap.toml").exists());

    boundmap(&dir).arg("init").assert().failure();
    boundmap(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_explicit_bad_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let input = catalog_file(&dir);
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[thresholds]\nmerge_coupling = 2.0\n").unwrap();

    boundmap(&dir)
        .arg("optimize")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(3);
}
