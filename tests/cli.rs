use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".social-pulse").join("config.json")
}

const BINARY_NAME: &str = "social-pulse";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Social media analytics dashboard"));
}

#[test]
/// Snapshot renders the title, every platform and the light-theme toggle.
fn snapshot_prints_dashboard() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--width", "120", "--height", "60"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Social Media Analytics"))
        .stdout(contains("Instagram Followers"))
        .stdout(contains("LinkedIn Followers"))
        .stdout(contains("45,210"))
        .stdout(contains("Platform Breakdown"))
        .stdout(contains("☾"));
}

#[test]
fn snapshot_dark_shows_sun_toggle() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--dark"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("☀"));
}

#[test]
/// Data export keeps engagement periods in chronological order.
fn data_prints_json_datasets() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    let output = cmd.arg("data").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let periods: Vec<&str> = json["engagement"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["period"].as_str().unwrap())
        .collect();
    assert_eq!(periods, ["Jan", "Feb", "Mar", "Apr", "May"]);
    assert_eq!(json["audience"].as_array().unwrap().len(), 4);
    assert_eq!(json["breakdown"][0]["percentage"], 40.0);
}

#[test]
/// init-config writes defaults once and refuses to overwrite without --force.
fn init_config_creates_file_once() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("init-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Wrote default config"));
    assert!(config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("init-config")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("ConfigExists"));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["init-config", "--force"])
        .env("HOME", tmp.path())
        .assert()
        .success();
}

#[test]
/// An unreadable config file is reported instead of silently ignored.
fn snapshot_rejects_invalid_config() {
    let tmp = temp_home_dir();
    let config_path = tmp.path().join("broken.json");
    fs::write(&config_path, "not json").unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["--config", config_path.to_str().unwrap(), "snapshot"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("ConfigParse"));
}

#[test]
/// Data export never reads the config file or looks up a home directory.
fn data_ignores_config_and_home() {
    let tmp = temp_home_dir();
    let config_path = tmp.path().join("broken.json");
    fs::write(&config_path, "not json").unwrap();

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["--config", config_path.to_str().unwrap(), "data"])
        .env_remove("HOME")
        .assert()
        .success()
        .stdout(contains("\"engagement\""));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("data")
        .env_remove("HOME")
        .assert()
        .success();
}
