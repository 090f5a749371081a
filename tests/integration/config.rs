//! Tests for `roster config` commands

use super::common::roster_command;
use tempfile::TempDir;

#[test]
fn test_config_path_under_home() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["config", "path"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("roster/config.yaml"));
}

#[test]
fn test_config_show_creates_default() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("users_url: https://jsonplaceholder.typicode.com/users"));
    assert!(stdout.contains("source: network"));
    assert!(temp.path().join(".config/roster/config.yaml").exists());
}

#[test]
fn test_config_show_applies_env_override() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["config", "show"])
        .env("ROSTER_SOURCE", "fixture")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("source: fixture"));
}

#[test]
fn test_source_env_selects_bundled_fixture() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .arg("list")
        .env("ROSTER_SOURCE", "fixture")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Leanne Graham"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config").join("roster");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "source: [not, a, source]\n").unwrap();

    let output = roster_command(temp.path())
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}
