//! Integration tests for the clippa CLI.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const TRANSCRIPT: &str = r#"{
    "text": "hello world and then a new thought",
    "language": "en",
    "segments": [
        {"start": 0.0, "end": 5.0, "text": " hello", "avg_logprob": -0.1},
        {"start": 5.5, "end": 20.0, "text": " world", "avg_logprob": -0.2},
        {"start": 23.0, "end": 30.0, "text": " and then a new thought", "avg_logprob": -0.3}
    ]
}"#;

#[test]
fn test_process_transcript_writes_json_output() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("talk.json");
    std::fs::write(&input, TRANSCRIPT).expect("write transcript");

    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("--no-progress").arg(&input);

    cmd.assert().success();

    let output = dir.path().join("talk.clips.json");
    assert!(output.exists());

    let content = std::fs::read_to_string(&output).expect("read output");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("parse output");
    let clips = parsed["clips"].as_array().expect("clips array");
    // 3s gap after 20s of content ends the first clip
    assert_eq!(clips.len(), 2);
    assert_eq!(clips[0]["text"], "hello world");
    assert_eq!(clips[1]["text"], "and then a new thought");
    assert_eq!(parsed["summary"]["total_clips"], 2);
}

#[test]
fn test_csv_format_and_output_dir() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("talk.json");
    std::fs::write(&input, TRANSCRIPT).expect("write transcript");
    let out = dir.path().join("out");

    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("--no-progress")
        .arg("-f")
        .arg("csv")
        .arg("-o")
        .arg(&out)
        .arg(&input);

    cmd.assert().success();

    let content = std::fs::read_to_string(out.join("talk.clips.csv")).expect("read csv");
    assert!(content.contains("Start (s),End (s),Score,Text"));
    assert!(content.contains("hello world"));
}

#[test]
fn test_existing_output_skipped_unless_forced() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("talk.json");
    std::fs::write(&input, TRANSCRIPT).expect("write transcript");

    let run = |extra: &[&str]| {
        let mut cmd = Command::new(cargo_bin("clippa"));
        cmd.arg("--no-progress");
        for arg in extra {
            cmd.arg(arg);
        }
        cmd.arg(&input);
        cmd
    };

    run(&[]).assert().success();
    let output = dir.path().join("talk.clips.json");
    let first_mtime = std::fs::metadata(&output)
        .and_then(|m| m.modified())
        .expect("mtime");

    // Second run skips, output untouched
    run(&[]).assert().success().stdout(predicate::str::contains("Skipping"));
    let second_mtime = std::fs::metadata(&output)
        .and_then(|m| m.modified())
        .expect("mtime");
    assert_eq!(first_mtime, second_mtime);

    // Forced run reprocesses
    run(&["--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping").not());
}

#[test]
fn test_malformed_transcript_fails_with_error() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("bad.json");
    std::fs::write(
        &input,
        r#"{"segments": [{"start": 9.0, "end": 3.0, "text": "backwards"}]}"#,
    )
    .expect("write transcript");

    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("--no-progress").arg("--fail-fast").arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed segment"));
}

#[test]
fn test_nonexistent_input_is_an_error() {
    let dir = tempdir().expect("create temp dir");

    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("--no-progress")
        .arg(dir.path().join("missing.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no transcript files"));
}

#[test]
fn test_config_path_subcommand() {
    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_settings_combination_rejected() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("talk.json");
    std::fs::write(&input, TRANSCRIPT).expect("write transcript");

    // min above max fails validation after overrides are merged
    let mut cmd = Command::new(cargo_bin("clippa"));
    cmd.arg("--no-progress")
        .arg("--min-duration")
        .arg("200")
        .arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("validation"));
}
