//! Integration tests for the rocm-smoke binary.
//!
//! These run on machines with or without ROCm installed, so they assert on
//! report structure and exit-code consistency rather than on pass/fail.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn smoke() -> Command {
    let mut cmd = Command::new(cargo_bin("rocm-smoke"));
    cmd.env_remove("ROCM_PATH").env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Runtime smoke tests for installed ROCm packages",
        ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_prints_banner_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    let output = smoke().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("ROCm Package Runtime Test"));
    assert!(stdout.contains("Running runtime tests..."));
    assert!(stdout.contains("Test Summary"));
    assert!(stdout.contains("Total tests: "));

    let code = output.status.code().unwrap_or(-1);
    assert_eq!(code == 0, !stdout.contains("✗ FAIL"));
    Ok(())
}

#[test]
fn cli_quiet_prints_only_summary() -> Result<(), Box<dyn std::error::Error>> {
    let output = smoke().args(["run", "--quiet"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(!stdout.contains("Running runtime tests..."));
    assert!(stdout.contains("Test Summary"));
    Ok(())
}

#[test]
fn cli_json_report_is_consistent() -> Result<(), Box<dyn std::error::Error>> {
    let output = smoke().args(["run", "--json"]).output()?;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(json["tool"], "rocm-smoke");
    let total = json["total"].as_u64().unwrap();
    let passed = json["passed"].as_u64().unwrap();
    let failed = json["failed"].as_u64().unwrap();
    assert_eq!(passed + failed, total);
    assert!(total >= 8);
    assert!(json["tests"]
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["message"].is_string()));
    assert_eq!(output.status.code() == Some(0), failed == 0);
    Ok(())
}

#[test]
fn cli_only_runs_selected_probe() -> Result<(), Box<dyn std::error::Error>> {
    let output = smoke().args(["run", "--only", "rocfft", "--json"]).output()?;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    let tests = json["tests"].as_array().unwrap();
    assert!(!tests.is_empty());
    assert!(tests
        .iter()
        .all(|t| t["name"].as_str().unwrap().starts_with("rocFFT")));
    Ok(())
}

#[test]
fn cli_unknown_probe_fails() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .args(["run", "--only", "cublas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown probe 'cublas'"))
        .stdout(predicate::str::contains("ROCm Package Runtime Test").not());
    Ok(())
}

#[test]
fn cli_missing_lib_dir_still_reports() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    smoke()
        .args(["run", "--only", "hsa", "--lib-dir"])
        .arg(temp.path())
        .assert()
        .stdout(predicate::str::contains("Total tests: "));
    Ok(())
}

#[test]
fn cli_list_shows_all_probes() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rocBLAS"))
        .stdout(predicate::str::contains("rocSOLVER"))
        .stdout(predicate::str::contains("(extended)"));
    Ok(())
}

#[test]
fn cli_list_standard_only_hides_extended() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .args(["list", "--standard-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(extended)").not());
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    smoke()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rocm-smoke"));
    Ok(())
}
