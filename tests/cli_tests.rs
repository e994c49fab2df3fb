//! Command-line tests for the chopper binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/markers.edl";

fn chopper() -> Command {
    let mut cmd = Command::cargo_bin("chopper").unwrap();
    for var in [
        "CHOPPER_EDL",
        "CHOPPER_INPUT",
        "CHOPPER_OUTPUT",
        "CHOPPER_FPS",
        "CHOPPER_VERBOSE",
        "CHOPPER_OVERWRITE",
        "CHOPPER_JOBS",
        "CHOPPER_FFMPEG",
        "CHOPPER_LOG_LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_list_prints_segments() {
    chopper()
        .args(["list", "--edl", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 segments"))
        .stdout(predicate::str::contains("intro: 00:00.0-00:13.54"))
        .stdout(predicate::str::contains("chorus: 01:02.50-02:45.0"))
        .stdout(predicate::str::contains("end:").not());
}

#[test]
fn test_list_json_output() {
    let output = chopper()
        .args(["--log-level", "error", "list", "--edl", FIXTURE, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let segments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(segments.as_array().unwrap().len(), 3);
    assert_eq!(segments[1]["name"], "verse");
    assert_eq!(segments[1]["start"], "00:13.54");
    assert_eq!(segments[1]["stop"], "01:02.50");
}

#[test]
fn test_list_respects_frame_rate() {
    chopper()
        .args(["list", "--edl", FIXTURE, "--fps", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intro: 00:00.0-00:13.43"));
}

#[test]
fn test_chop_dry_run_prints_commands() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("clips");

    chopper()
        .args(["chop", "--dry-run", "--edl", FIXTURE, "--input", "render.mov", "--output"])
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("dividing \"render.mov\" into segments:"))
        .stdout(predicate::str::contains("  verse: 00:13.54-01:02.50"))
        .stdout(predicate::str::contains(
            "ffmpeg -hide_banner -loglevel error -i render.mov -ss 00:00.0 -to 00:13.54 -c copy -map 0",
        ))
        .stdout(predicate::str::contains("intro.mov"));

    assert!(!output_dir.exists());
}

#[test]
fn test_chop_dry_run_verbose_and_overwrite() {
    chopper()
        .args([
            "chop", "--dry-run", "--edl", FIXTURE, "--input", "render.mp4", "--verbose",
            "--overwrite", "--ffmpeg", "/opt/ffmpeg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/ffmpeg -y -i render.mp4 -ss"))
        .stdout(predicate::str::contains("-hide_banner").not())
        .stdout(predicate::str::contains("chorus.mp4"));
}

#[test]
fn test_config_file_supplies_settings() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("chopper.toml");
    fs::write(
        &config,
        format!(
            "[chopper]\nedl = \"{}\"\ninput = \"from_config.mov\"\nfps = 30.0\n",
            FIXTURE
        ),
    )
    .unwrap();

    chopper()
        .arg("--config")
        .arg(&config)
        .args(["chop", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dividing \"from_config.mov\""))
        .stdout(predicate::str::contains("intro: 00:00.0-00:13.43"));
}

#[test]
fn test_env_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("chopper.toml");
    fs::write(&config, "[chopper]\nfps = 30.0\n").unwrap();

    chopper()
        .env("CHOPPER_FPS", "24")
        .arg("--config")
        .arg(&config)
        .args(["list", "--edl", FIXTURE])
        .assert()
        .success()
        .stdout(predicate::str::contains("intro: 00:00.0-00:13.54"));
}

#[test]
fn test_env_switches_off_config_flags() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("chopper.toml");
    fs::write(&config, "[chopper]\nverbose = true\noverwrite = true\n").unwrap();

    chopper()
        .env("CHOPPER_VERBOSE", "false")
        .arg("--config")
        .arg(&config)
        .args(["chop", "--dry-run", "--edl", FIXTURE, "--overwrite=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ffmpeg -hide_banner -loglevel error -i input.mov -ss",
        ))
        .stdout(predicate::str::contains(" -y ").not());
}

#[test]
fn test_missing_config_file_fails() {
    chopper()
        .args(["--config", "does/not/exist.toml", "list", "--edl", FIXTURE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_malformed_edl_fails_before_cutting() {
    let dir = TempDir::new().unwrap();
    let edl = dir.path().join("broken.edl");
    fs::write(&edl, "TITLE: Timeline 1\nFCM: NON-DROP FRAME\n 001 V\n |M:intro |D:1\n").unwrap();

    chopper()
        .args(["chop", "--dry-run", "--edl"])
        .arg(&edl)
        .assert()
        .failure()
        .stdout(predicate::str::contains("dividing").not())
        .stderr(predicate::str::contains("Malformed EDL"));
}

#[test]
fn test_missing_edl_fails() {
    chopper()
        .args(["list", "--edl", "nowhere.edl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("EDL file not found"));
}

#[test]
fn test_invalid_frame_rate_fails() {
    chopper()
        .args(["list", "--edl", FIXTURE, "--fps=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Frame rate must be a positive number"));
}
