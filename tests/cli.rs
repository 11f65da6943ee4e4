//! CLI test cases.
//!
//! The default suite never reaches a live OCR endpoint: argument-handling
//! tests fail before any request is built, and the endpoint-touching tests
//! point at an unroutable local port. The one genuinely live test is
//! `#[ignore]`d and needs real credentials.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// An address nothing listens on, so endpoint-touching tests fail fast
/// instead of calling the real API.
static UNROUTABLE_BASE_URL: &str = "http://127.0.0.1:9/v1";

/// Create a new `Command` with our binary, isolated from the caller's
/// OCR-related environment.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("typhoon-ocr-runner").unwrap();
    for var in [
        "OCR_BASE_URL",
        "OCR_ENDPOINT",
        "OCR_API_KEY",
        "TYPHOON_OCR_API_KEY",
        "OPENAI_API_KEY",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}

#[test]
fn test_no_args_is_usage_error() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_page_number() {
    cmd()
        .arg("doc.pdf")
        .arg("abc")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid page number"));
}

#[test]
fn test_missing_file_fails_before_any_request() {
    cmd()
        .arg("/definitely/not/a/real/file.pdf")
        .env("OCR_BASE_URL", UNROUTABLE_BASE_URL)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_endpoint_failure_produces_no_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.png");
    std::fs::write(&path, b"not really a png").unwrap();

    cmd()
        .arg(path)
        .env("OCR_BASE_URL", UNROUTABLE_BASE_URL)
        .env("OCR_API_KEY", "sk-test")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("OCR request failed"));
}

#[test]
#[ignore = "Needs a reachable Typhoon OCR endpoint and credentials"]
fn test_ocr_live() {
    cmd()
        .arg("tests/fixtures/sample.png")
        .env("OCR_API_KEY", std::env::var("OCR_API_KEY").unwrap_or_default())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"markdown":"#));
}
