//! Integration tests for the `catalog` binary.
//!
//! Verifies argument handling and that startup failures are reported with a
//! non-zero exit status.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn help_lists_start_command() {
    let mut command = cargo_bin_cmd!("catalog");
    command.arg("--help");
    command.assert().success().stdout(contains("start"));
}

#[test]
fn start_help_documents_babelrc() {
    let mut command = cargo_bin_cmd!("catalog");
    command.args(["start", "--help"]);
    command
        .assert()
        .success()
        .stdout(contains("--babelrc"))
        .stdout(contains("--proxy"));
}

#[test]
fn invalid_port_is_a_usage_error() {
    let mut command = cargo_bin_cmd!("catalog");
    command.args(["start", "--port", "not-a-port"]);
    command.assert().failure().code(2);
}

#[test]
fn invalid_package_json_fails_startup() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("package.json"), "{ broken").unwrap();

    let mut command = cargo_bin_cmd!("catalog");
    command
        .current_dir(project.path())
        .env("BROWSER", "none")
        .env("NO_COLOR", "1")
        .args(["start", "--port", "0"]);

    command
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Could not start Catalog"))
        .stderr(contains("package.json"));

    assert!(!project.path().join("catalog").exists());
}

#[test]
fn malformed_config_file_fails_startup() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("catalog.config.toml"), "useBabelrc = [").unwrap();

    let mut command = cargo_bin_cmd!("catalog");
    command
        .current_dir(project.path())
        .env("BROWSER", "none")
        .env("NO_COLOR", "1")
        .args(["start", "--port", "0"]);

    command
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Could not start Catalog"))
        .stderr(contains("catalog.config.toml"));
}

#[test]
fn https_without_certificate_fails_startup() {
    let project = TempDir::new().unwrap();

    let mut command = cargo_bin_cmd!("catalog");
    command
        .current_dir(project.path())
        .env("BROWSER", "none")
        .env("NO_COLOR", "1")
        .args(["start", "--https", "--port", "0"]);

    command
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Could not start Catalog"))
        .stderr(contains("HTTPS requires a certificate"));
}

#[test]
fn summary_is_printed_before_launch() {
    let project = TempDir::new().unwrap();

    let mut command = cargo_bin_cmd!("catalog");
    command
        .current_dir(project.path())
        .env("BROWSER", "none")
        .env("NO_COLOR", "1")
        .args(["start", "--https", "--port", "0", "--no-babelrc"]);

    command
        .assert()
        .failure()
        .stderr(contains("Starting Catalog"));
}

#[test]
fn quiet_suppresses_everything_but_errors() {
    let project = TempDir::new().unwrap();

    let mut command = cargo_bin_cmd!("catalog");
    command
        .current_dir(project.path())
        .env("BROWSER", "none")
        .env("NO_COLOR", "1")
        .args(["--quiet", "start", "--https", "--port", "0"]);

    command
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Starting Catalog").not())
        .stderr(contains("Could not start Catalog"));
}
