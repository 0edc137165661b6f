use std::fs;

use auto_scrcpy::settings::DEFAULT_SETTINGS_DOCUMENT;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{fixture, run_launcher};

#[test]
fn missing_settings_file_is_written_and_run_halts() {
    let temp = tempdir().expect("can create temporary directory");
    let settings = temp.path().join("settings.toml");
    let scrcpy = temp.path().join("never-launched");

    let output = run_launcher(&settings, &scrcpy, &[]);

    assert!(
        output.status.success(),
        "first run should exit cleanly: {output:?}"
    );
    let written = fs::read_to_string(&settings).expect("default settings should exist");
    assert_eq!(written, DEFAULT_SETTINGS_DOCUMENT);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("created with the default settings"),
        "stdout: {stdout}"
    );
    assert!(!stdout.contains("[RUNNING]"), "stdout: {stdout}");
}

#[test]
fn dry_run_prints_plan_without_launching() {
    let temp = tempdir().expect("can create temporary directory");
    let scrcpy = temp.path().join("never-launched");

    let output = run_launcher(
        &fixture("tests/fixtures/settings_valid.toml"),
        &scrcpy,
        &["--dry-run"],
    );

    assert!(output.status.success(), "dry-run should succeed: {output:?}");
    let plan: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(plan["status"], "planned");
    assert_eq!(plan["max_retries"], 3);
    assert_eq!(plan["time_between_retries_secs"], 2);
    let parameters: Vec<&str> = plan["parameters"]
        .as_array()
        .expect("parameters is an array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        parameters,
        [
            "--turn-screen-off",
            "--show-touches",
            "--no-video",
            "--video-codec=h265",
            "--video-bit-rate=16m",
            "--max-fps=30",
            "--max-size=1920",
            "--no-audio",
            "--audio-codec=aac",
            "--audio-bit-rate=256k",
        ]
    );
}

#[test]
fn malformed_settings_fail_without_retry() {
    let temp = tempdir().expect("can create temporary directory");
    let scrcpy = temp.path().join("never-launched");

    let output = run_launcher(
        &fixture("tests/fixtures/settings_malformed.toml"),
        &scrcpy,
        &[],
    );

    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse settings file"),
        "stderr: {stderr}"
    );
}

#[test]
fn missing_option_fails_fast() {
    let temp = tempdir().expect("can create temporary directory");
    let scrcpy = temp.path().join("never-launched");

    let output = run_launcher(
        &fixture("tests/fixtures/settings_missing_codec.toml"),
        &scrcpy,
        &[],
    );

    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("`video.codec`"), "stderr: {stderr}");
}
