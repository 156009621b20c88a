//! Integration tests for `redeploy config`.
//!
//! Every test points `--config` at a temp file so `~/.redeploy/config.yaml`
//! is never read.

use predicates::prelude::*;

use crate::support::{Host, redeploy};

#[test]
fn test_config_shows_defaults_for_empty_file() {
    let host = Host::new();
    redeploy()
        .arg("--config")
        .arg(&host.config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("pandapics.tar.gz"))
        .stdout(predicate::str::contains("/usr/local/bin/docker-compose"))
        .stdout(predicate::str::contains("http://localhost:3000/health"))
        .stdout(predicate::str::contains("15"));
}

#[test]
fn test_config_shows_source_path() {
    let host = Host::new();
    redeploy()
        .arg("--config")
        .arg(&host.config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(host.config.display().to_string()));
}

#[test]
fn test_config_file_values_are_applied() {
    let host = Host::new();
    std::fs::write(
        &host.config,
        "compose_file: compose.prod.yml\nhealth_timeout_secs: 42\n",
    )
    .unwrap();
    redeploy()
        .arg("--config")
        .arg(&host.config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("compose.prod.yml"))
        .stdout(predicate::str::contains("42"));
}

#[test]
fn test_cli_override_beats_config_file() {
    let host = Host::new();
    std::fs::write(&host.config, "health_url: http://from-file:1/health\n").unwrap();
    redeploy()
        .arg("--config")
        .arg(&host.config)
        .args(["--health-url", "http://from-cli:2/health", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-cli:2/health"))
        .stdout(predicate::str::contains("from-file").not());
}

#[test]
fn test_malformed_config_file_exits_two() {
    let host = Host::new();
    std::fs::write(&host.config, "health_timeout_secs: soon\n").unwrap();
    redeploy()
        .arg("--config")
        .arg(&host.config)
        .arg("config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot parse"));
}
