//! End-to-end tests for the CLI binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the valoruf binary for testing
fn valoruf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("valoruf").unwrap();
    // Keep the environment from leaking a real backend into the tests.
    cmd.env_remove("VALORUF_BASE_URL");
    cmd
}

#[test]
fn test_version_output() {
    valoruf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("valoruf"));
}

#[test]
fn test_help_shows_all_commands() {
    valoruf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("value"))
        .stdout(predicate::str::contains("range"))
        .stdout(predicate::str::contains("today"))
        .stdout(predicate::str::contains("last-week"))
        .stdout(predicate::str::contains("cached"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_value_help_shows_common_options() {
    valoruf_cmd()
        .args(["value", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_value_requires_date_argument() {
    valoruf_cmd().arg("value").assert().failure();
}

#[test]
fn test_range_requires_both_dates() {
    valoruf_cmd()
        .args(["range", "2024-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_command() {
    valoruf_cmd()
        .arg("definitely-not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("valoruf.toml");

    valoruf_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[api]"));
    assert!(content.contains("base_url"));
}

#[test]
fn test_config_init_no_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("valoruf.toml");

    std::fs::write(&config_path, "existing content").unwrap();

    valoruf_cmd()
        .args(["config", "init", "-o", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn test_completions_bash() {
    valoruf_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valoruf"));
}

#[test]
fn test_value_end_to_end_renders_table() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/uf/2024-01-01")
        .with_status(200)
        .with_body(r#"{"date": "2024-01-01", "value": 1000.5, "cached": false}"#)
        .create();

    valoruf_cmd()
        .args(["value", "2024-01-01"])
        .args(["--base-url", &format!("{}/api/uf", server.url())])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("1.000,50"))
        .stdout(predicate::str::contains("Fecha"));

    mock.assert();
}

#[test]
fn test_value_end_to_end_json_output() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/uf/2024-01-01")
        .with_status(200)
        .with_body(r#"{"date": "2024-01-01", "value": 1000.5, "cached": false}"#)
        .create();

    let output = valoruf_cmd()
        .args(["value", "2024-01-01", "--json"])
        .args(["--base-url", &format!("{}/api/uf", server.url())])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.get("records").unwrap().as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2024-01-01");
}

#[test]
fn test_no_data_end_to_end_renders_placeholder() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/uf/2030-01-01")
        .with_status(200)
        .with_body("{}")
        .create();

    valoruf_cmd()
        .args(["value", "2030-01-01"])
        .args(["--base-url", &format!("{}/api/uf", server.url())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay datos disponibles"));
}

#[test]
fn test_backend_error_end_to_end() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/uf/2024-01-01")
        .with_status(404)
        .with_body(r#"{"error": "not found"}"#)
        .create();

    valoruf_cmd()
        .args(["value", "2024-01-01"])
        .args(["--base-url", &format!("{}/api/uf", server.url())])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error al obtener los datos: not found",
        ));
}

#[test]
fn test_env_base_url_is_honored() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/uf/cached")
        .with_status(200)
        .with_body(r#"[{"date": "2024-01-01", "value": 1000.5, "cached": true}]"#)
        .create();

    Command::cargo_bin("valoruf")
        .unwrap()
        .arg("cached")
        .env("VALORUF_BASE_URL", format!("{}/api/uf", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("1.000,50"));

    mock.assert();
}

#[test]
fn test_connection_refused_exits_nonzero() {
    valoruf_cmd()
        .args(["value", "2024-01-01"])
        // Nothing listens on port 1.
        .args(["--base-url", "http://127.0.0.1:1/api/uf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error al obtener los datos"));
}
