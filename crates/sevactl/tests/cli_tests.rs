//! CLI integration tests for sevactl
//!
//! Tests the CLI surface:
//! - sevactl samples            lists the demonstration codes
//! - sevactl track CODE --json  prints the normalized view
//! - exit codes for empty input, unknown codes and failed lookups
//!
//! The lookup endpoint points at a closed local port so every run exercises
//! the fallback path without network access.

use std::process::{Command, Output};

const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9/api/track-application";

fn sevactl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sevactl"))
        .args(args)
        .env("SEVA_CONFIG", "/nonexistent/seva/config.toml")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sevactl")
}

#[test]
fn test_samples_lists_codes() {
    let output = sevactl(&["samples"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BC123456"));
    assert!(stdout.contains("RC789012"));
    assert!(stdout.contains("WA345678"));
}

#[test]
fn test_track_sample_as_json() {
    let output = sevactl(&["track", "bc123456", "--json", "--endpoint", CLOSED_ENDPOINT]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["type"], "Birth Certificate");
    assert_eq!(view["status"], "Under Review");
    assert_eq!(view["expectedCompletion"], "2024-01-30");
    assert!(view.get("downloadLink").is_none());
}

#[test]
fn test_track_plain_output() {
    let output = sevactl(&["track", "RC789012", "--endpoint", CLOSED_ENDPOINT]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Residence Certificate"));
    assert!(stdout.contains("Download: /download-certificate?id=RC789012"));
    assert!(stdout.contains("Quick Actions"));
}

#[test]
fn test_empty_code_is_usage_error() {
    let output = sevactl(&["track", "   "]);
    assert_eq!(output.status.code(), Some(64));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("कृपया आवेदन संख्या दर्ज करें।"));
}

#[test]
fn test_failed_lookup_without_fallback() {
    let output = sevactl(&[
        "track",
        "BC123456",
        "--endpoint",
        CLOSED_ENDPOINT,
        "--no-fallback",
    ]);
    assert_eq!(output.status.code(), Some(69));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("आवेदन खोजने में त्रुटि हुई।"));
}

#[test]
fn test_version_flag() {
    let output = sevactl(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("sevactl"));
}
