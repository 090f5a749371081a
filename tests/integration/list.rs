//! Tests for `roster list` command

use super::common::{roster_command, ONE_USER};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_list_bundled_fixture() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["list", "--bundled"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Users ("));
    assert!(stdout.contains("Leanne Graham <Sincere@april.biz>"));
}

#[test]
fn test_list_fixture_file_with_every_convention() {
    let temp = TempDir::new().unwrap();
    let fixture = temp.path().join("users.json");
    fs::write(&fixture, ONE_USER).unwrap();

    let mut outputs = Vec::new();
    for convention in ["callback", "async", "stream"] {
        let output = roster_command(temp.path())
            .args(["list", "--fixture"])
            .arg(&fixture)
            .args(["--convention", convention])
            .output()
            .unwrap();
        assert!(output.status.success(), "convention {} failed", convention);
        outputs.push(String::from_utf8_lossy(&output.stdout).to_string());
    }

    assert_eq!(outputs[0], "Users (1):\n  Leanne Graham <Sincere@april.biz>\n");
    assert!(outputs.iter().all(|o| o == &outputs[0]));
}

#[test]
fn test_list_json_output() {
    let temp = TempDir::new().unwrap();
    let fixture = temp.path().join("users.json");
    fs::write(&fixture, ONE_USER).unwrap();

    let output = roster_command(temp.path())
        .args(["list", "--json", "--fixture"])
        .arg(&fixture)
        .output()
        .unwrap();

    assert!(output.status.success());
    let users: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(users[0]["username"], "Bret");
}

#[test]
fn test_list_missing_fixture_fails_with_help() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["list", "--fixture"])
        .arg(temp.path().join("absent.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Transport failure"));
    assert!(stderr.contains("Help:"));
}

#[test]
fn test_list_invalid_url() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["list", "--url", "not a url"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The endpoint URL is invalid"));
}

#[test]
fn test_fixture_and_bundled_conflict() {
    let temp = TempDir::new().unwrap();

    let output = roster_command(temp.path())
        .args(["list", "--bundled", "--fixture", "users.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_USER))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let url = format!("{}/users", mock_server.uri());
    let home = temp.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        roster_command(&home)
            .args(["list", "--url", url.as_str()])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Leanne Graham <Sincere@april.biz>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_over_http_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(ONE_USER))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let url = format!("{}/users", mock_server.uri());
    let home = temp.path().to_path_buf();

    let output = tokio::task::spawn_blocking(move || {
        roster_command(&home)
            .args(["list", "--url", url.as_str()])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("status 404"));
}
