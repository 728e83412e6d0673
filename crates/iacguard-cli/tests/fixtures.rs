//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - a snapshot (`snapshot.json`, `stack.json`, or a `snapshots/` directory)
//! - optionally an `iacguard.toml`
//! - an `expected.report.json` with the expected report (timestamps and version use placeholders)
//!
//! These tests run the CLI against each fixture and verify:
//! 1. Exit code matches expected (0=pass, 2=fail)
//! 2. JSON output matches expected (ignoring timestamps)

use assert_cmd::Command;
use iacguard_test_util::normalize_nondeterministic;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a Command for the iacguard binary.
/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn iacguard_cmd() -> Command {
    Command::cargo_bin("iacguard").expect("iacguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("iacguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// The fixture's own config if it has one, otherwise a path that does not exist (defaults).
fn config_for(fixture: &Path, temp_dir: &TempDir) -> PathBuf {
    let cfg = fixture.join("iacguard.toml");
    if cfg.exists() {
        cfg
    } else {
        temp_dir.path().join("absent.toml")
    }
}

/// Run the CLI check command against a fixture and return the exit code and JSON report.
fn run_check_on_fixture(fixture_name: &str, snapshot: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = iacguard_cmd()
        .arg("--config")
        .arg(config_for(&fixture_path, &temp_dir))
        .arg("check")
        .arg(fixture_path.join(snapshot))
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);

    let report_content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&report_content).expect("Failed to parse report JSON");

    (exit_code, report)
}

/// Load and parse the expected report for a fixture.
fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

/// Compare two JSON values, ignoring timestamp and version differences.
fn assert_reports_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual_normalized = normalize_nondeterministic(actual);
    let expected_normalized = normalize_nondeterministic(expected);

    assert_eq!(
        actual_normalized,
        expected_normalized,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual_normalized).unwrap(),
        serde_json::to_string_pretty(&expected_normalized).unwrap()
    );
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_clean_passes() {
    let (exit_code, report) = run_check_on_fixture("clean", "snapshot.json");
    assert_eq!(exit_code, 0, "clean fixture should exit with 0 (pass)");
    assert_reports_match(report, load_expected_report("clean"), "clean");
}

#[test]
fn fixture_demo_bucket_fails() {
    let (exit_code, report) = run_check_on_fixture("demo_bucket", "snapshot.json");
    assert_eq!(exit_code, 2, "demo_bucket fixture should exit with 2 (fail)");
    assert_reports_match(report, load_expected_report("demo_bucket"), "demo_bucket");
}

#[test]
fn fixture_infra_mixed_reports_in_resource_order() {
    let (exit_code, report) = run_check_on_fixture("infra_mixed", "snapshot.json");
    assert_eq!(exit_code, 2, "infra_mixed fixture should exit with 2 (fail)");

    let names: Vec<&str> = report["violations"]
        .as_array()
        .expect("violations should be array")
        .iter()
        .map(|v| v["resource_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["temp-bucket", "index.html", "data.json", "backup.tar", "cache.bin"]
    );

    assert_reports_match(report, load_expected_report("infra_mixed"), "infra_mixed");
}

#[test]
fn fixture_stack_export_fails() {
    let (exit_code, report) = run_check_on_fixture("stack_export", "stack.json");
    assert_eq!(exit_code, 2, "stack_export fixture should exit with 2 (fail)");
    assert_reports_match(report, load_expected_report("stack_export"), "stack_export");
}

#[test]
fn fixture_security_groups_fails() {
    let (exit_code, report) = run_check_on_fixture("security_groups", "snapshot.json");
    assert_eq!(exit_code, 2, "security_groups fixture should exit with 2 (fail)");
    assert_reports_match(
        report,
        load_expected_report("security_groups"),
        "security_groups",
    );
}

#[test]
fn fixture_multi_file_directory() {
    let (exit_code, report) = run_check_on_fixture("multi_file", "snapshots");
    assert_eq!(exit_code, 2, "multi_file fixture should exit with 2 (fail)");
    assert_reports_match(report, load_expected_report("multi_file"), "multi_file");
}

#[test]
fn fixture_invalid_entry_is_runtime_error() {
    let fixture_path = fixtures_dir().join("invalid_entry");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("iacguard error:"))
        .stderr(predicate::str::contains("resource entry 1"))
        .stderr(predicate::str::contains("resource name must not be empty"));

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["verdict"]["status"], "fail");
    assert_eq!(report["verdict"]["reasons"][0], "runtime_error");
    assert!(
        report["data"]["error"]
            .as_str()
            .unwrap()
            .contains("resource entry 1")
    );
}

// ============================================================================
// CLI behavior tests
// ============================================================================

#[test]
fn check_prints_text_report() {
    let fixture_path = fixtures_dir().join("demo_bucket");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(temp_dir.path().join("report.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("🚨 Found 3 compliance violations:"))
        .stdout(predicate::str::contains("1. Resource: demo-bucket"))
        .stdout(predicate::str::contains("   Type: aws:s3/bucket:Bucket"))
        .stdout(predicate::str::contains("   Control: CC6.1"))
        .stdout(predicate::str::contains("3. Resource: config-file"));
}

#[test]
fn check_clean_prints_success_marker() {
    let fixture_path = fixtures_dir().join("clean");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(temp_dir.path().join("report.json"))
        .assert()
        .success()
        .stdout("✅ No compliance violations found!\n");
}

#[test]
fn fail_on_controls_exit_code() {
    let fixture_path = fixtures_dir().join("demo_bucket");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let run = |args: &[&str]| {
        let mut cmd = iacguard_cmd();
        cmd.arg("--config")
            .arg(temp_dir.path().join("absent.toml"))
            .args(args)
            .arg("check")
            .arg(fixture_path.join("snapshot.json"))
            .arg("--report-out")
            .arg(temp_dir.path().join("report.json"));
        cmd.assert()
    };

    run(&["--fail-on", "never"]).success();
    run(&["--fail-on", "mandatory"]).code(2);
    run(&["--enforcement", "advisory"]).success();
    run(&["--enforcement", "advisory", "--fail-on", "any"]).code(2);
}

#[test]
fn fail_on_from_config_file() {
    let fixture_path = fixtures_dir().join("demo_bucket");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let cfg = temp_dir.path().join("iacguard.toml");
    std::fs::write(&cfg, "fail_on = \"never\"\n").expect("write config");

    iacguard_cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(temp_dir.path().join("report.json"))
        .assert()
        .success();
}

#[test]
fn max_violations_truncates_report() {
    let fixture_path = fixtures_dir().join("infra_mixed");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("--max-violations")
        .arg("2")
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("🚨 Found 5 compliance violations:"))
        .stdout(predicate::str::contains("Showing 2 of 5 violations"));

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["violations"].as_array().unwrap().len(), 2);
    assert_eq!(report["data"]["violations_total"], 5);
    assert_eq!(report["verdict"]["counts"]["mandatory"], 5);
    assert_eq!(report["verdict"]["reasons"][0], "truncated");
}

#[test]
fn check_command_creates_output_file() {
    let fixture_path = fixtures_dir().join("clean");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("subdir").join("report.json");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .success();

    assert!(report_path.exists(), "Report file should be created");
}

#[test]
fn check_with_markdown_output() {
    let fixture_path = fixtures_dir().join("demo_bucket");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");
    let md_path = temp_dir.path().join("report.md");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixture_path.join("snapshot.json"))
        .arg("--report-out")
        .arg(&report_path)
        .arg("--write-markdown")
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .code(2);

    assert!(report_path.exists(), "JSON report should be created");
    let md_content =
        std::fs::read_to_string(&md_path).expect("failed to read generated markdown file");
    assert!(md_content.contains("Verdict: **FAIL**"));
    assert!(md_content.contains("`demo-bucket`"));
}

/// Write a failing report for the render subcommands to consume.
fn write_failing_report(temp_dir: &TempDir) -> PathBuf {
    let report_path = temp_dir.path().join("report.json");
    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg(fixtures_dir().join("demo_bucket").join("snapshot.json"))
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(2);
    report_path
}

#[test]
fn md_command_renders_from_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = write_failing_report(&temp_dir);

    iacguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# iacguard report"))
        .stdout(predicate::str::contains("Verdict: **FAIL**"));
}

#[test]
fn annotations_command_renders_gha_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = write_failing_report(&temp_dir);

    let output = iacguard_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .arg("--max")
        .arg("2")
        .output()
        .expect("Failed to run annotations command");

    assert!(output.status.success(), "annotations command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("::error title=s3-encryption-required::"));
}

#[test]
fn md_rejects_unknown_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("other.json");
    std::fs::write(&report_path, r#"{"schema": "other.report.v2"}"#).expect("write");

    iacguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report schema"));
}

#[test]
fn missing_snapshot_returns_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    iacguard_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("check")
        .arg("/nonexistent/path/to/snapshot.json")
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1);

    assert!(report_path.exists(), "runtime error report should still be written");
}

#[test]
fn invalid_config_returns_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let cfg = temp_dir.path().join("iacguard.toml");
    std::fs::write(&cfg, "[rules.\"no-such-rule\"]\nenabled = true\n").expect("write config");

    iacguard_cmd()
        .arg("--config")
        .arg(&cfg)
        .arg("check")
        .arg(fixtures_dir().join("clean").join("snapshot.json"))
        .arg("--report-out")
        .arg(temp_dir.path().join("report.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown rule in config: no-such-rule"));
}
