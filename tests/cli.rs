//! End-to-end CLI tests
//!
//! Runs the `quote` binary against request files in a temporary config
//! directory, so user configuration never leaks into the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quote_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quote").unwrap();
    cmd.env("QUOTE_CLI_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn init_then_summary() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");

    quote_cmd(&config)
        .arg("init")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Example request written"));

    // The example: entry 100,00 + transport 50,00 x 3 = 250,00 due now
    quote_cmd(&config)
        .arg("summary")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote Summary"))
        .stdout(predicate::str::contains("R$ 250,00"))
        .stdout(predicate::str::contains("3x installments of:"));
}

#[test]
fn init_refuses_overwrite() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");

    quote_cmd(&config).arg("init").arg(&request).assert().success();

    quote_cmd(&config)
        .arg("init")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"));
}

#[test]
fn document_written_to_file() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");
    let output = workdir.path().join("quote.txt");

    quote_cmd(&config).arg("init").arg(&request).assert().success();

    quote_cmd(&config)
        .arg("document")
        .arg(&request)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let document = std::fs::read_to_string(&output).unwrap();
    assert!(document.contains("Personalized Quote"));
    assert!(document.contains("Entry total: R$ 250,00"));
    assert!(document.contains("Business: Padaria Central"));
}

#[test]
fn whatsapp_message_omits_payment_detail_by_default() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");

    quote_cmd(&config).arg("init").arg(&request).assert().success();

    quote_cmd(&config)
        .arg("message")
        .arg(&request)
        .args(["--channel", "whatsapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*Selected Services:*"))
        .stdout(predicate::str::contains("*Entry total:* R$ 100,00"))
        .stdout(predicate::str::contains("Due now").not());
}

#[test]
fn export_json_carries_schema_version() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");

    quote_cmd(&config).arg("init").arg(&request).assert().success();

    quote_cmd(&config)
        .arg("export")
        .arg(&request)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": \"1.0.0\""))
        .stdout(predicate::str::contains("\"due_now\": 25000"));
}

#[test]
fn invalid_installments_fail_with_validation_message() {
    let config = TempDir::new().unwrap();
    let workdir = TempDir::new().unwrap();
    let request = workdir.path().join("request.yaml");
    std::fs::write(
        &request,
        "services:\n  - category: design\n    name: Logo\n    prices:\n      entry: 10000\npayment:\n  type: credit-card\n  installments: 13\n",
    )
    .unwrap();

    quote_cmd(&config)
        .arg("summary")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid installment count: 13"));
}

#[test]
fn config_shows_paths_and_defaults() {
    let config = TempDir::new().unwrap();

    quote_cmd(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory:"))
        .stdout(predicate::str::contains("built-in catalog"))
        .stdout(predicate::str::contains("Validity window: 10 days"));
}
