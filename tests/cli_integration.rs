//! Integration tests for the `aspectlens` binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn aspectlens(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aspectlens").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("ASPECTLENS_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_analyze_text_argument_as_json() {
    let dir = TempDir::new().unwrap();
    let output = aspectlens(&dir)
        .args([
            "analyze",
            "The dietitian was very supportive and caring.",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["sentences"], 1);
    assert_eq!(json["results"][0]["id"], "dietitian");
    assert_eq!(json["results"][0]["score"], 2);
    assert_eq!(json["results"][0]["sentiment"], "positive");
    assert_eq!(json["results"].as_array().unwrap().len(), 6);
}

#[test]
fn test_analyze_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let output = aspectlens(&dir)
        .args(["analyze", "--format", "json"])
        .write_stdin("The clinic was crowded but the staff was friendly.")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["results"][2]["id"], "staff");
    assert_eq!(json["results"][2]["sentiment"], "neutral");
    assert_eq!(json["results"][3]["sentiment"], "neutral");
}

#[test]
fn test_analyze_word_boundary_flag() {
    let dir = TempDir::new().unwrap();
    let output = aspectlens(&dir)
        .args([
            "analyze",
            "The new hardware works.",
            "--format",
            "json",
            "--word-boundary",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["results"][3]["id"], "infrastructure");
    assert_eq!(json["results"][3]["score"], 0);
}

#[test]
fn test_analyze_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("feedback.txt");
    let report = dir.path().join("report.md");
    fs::write(&input, "The nurse was rude.").unwrap();

    aspectlens(&dir)
        .args(["analyze", "--file"])
        .arg(&input)
        .args(["--format", "markdown", "--output"])
        .arg(&report)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.contains("# Feedback Aspect Report"));
    assert!(markdown.contains("| Care Staff | negative | -1 | 1 | 0.50 |"));
}

#[test]
fn test_batch_summary() {
    let dir = TempDir::new().unwrap();
    let batch = dir.path().join("entries.txt");
    fs::write(
        &batch,
        "The staff was friendly.\n\nThe staff was rude and slow.\nThe clinic was clean.\n",
    )
    .unwrap();

    let output = aspectlens(&dir)
        .arg("batch")
        .arg(&batch)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["documents"], 3);
    assert_eq!(json["aspects"][2]["id"], "staff");
    assert_eq!(json["aspects"][2]["positive"], 1);
    assert_eq!(json["aspects"][2]["negative"], 1);
    assert_eq!(json["aspects"][3]["positive"], 1);
}

#[test]
fn test_config_default_format_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".aspectlens.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = aspectlens(&dir)
        .args(["analyze", "Great menu."])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["results"][4]["sentiment"], "positive");
}

#[test]
fn test_init_then_validate() {
    let dir = TempDir::new().unwrap();

    aspectlens(&dir).arg("init").assert().success();
    assert!(dir.path().join(".aspectlens.toml").exists());

    aspectlens(&dir).arg("init").assert().failure();
    aspectlens(&dir).args(["init", "--force"]).assert().success();

    aspectlens(&dir).arg("validate").assert().success();
}

#[test]
fn test_validate_lists_issues_and_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(
        &config,
        "[[aspects]]\nid = \"\"\nlabel = \"\"\nkeywords = []\n",
    )
    .unwrap();

    let output = aspectlens(&dir)
        .args(["validate", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("aspects[0].id: must not be empty"));
    assert!(stdout.contains("aspects[0].label: must not be empty"));
    assert!(stdout.contains("aspects[0].keywords"));
}

#[test]
fn test_aspects_lists_catalog() {
    let dir = TempDir::new().unwrap();
    let output = aspectlens(&dir).arg("aspects").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("1. Dietitian Guidance (dietitian)"));
    assert!(stdout.contains("keywords: clinic, facility"));
}

#[test]
fn test_validate_reads_config_path_from_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[lexicon]\npositive = [\"ok\"]\nnegative = [\"ok\"]\n").unwrap();

    let output = aspectlens(&dir)
        .arg("validate")
        .env("ASPECTLENS_CONFIG", &config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("broken.toml"));
    assert!(stdout.contains("'ok' is listed as both positive and negative"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    aspectlens(&dir)
        .args(["analyze", "text", "--config", "missing.toml"])
        .assert()
        .failure();
}
