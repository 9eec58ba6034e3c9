//! Integration tests for the garble CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_text_with_full_comprehension() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello friend")
        .arg("--comprehension")
        .arg("1.0");

    cmd.assert().success().stdout("Hello friend\n");
}

#[test]
fn test_text_with_zero_comprehension() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello, world!")
        .arg("--comprehension")
        .arg("0.0");

    cmd.assert().success().stdout("[Hello], [world]!\n");
}

#[test]
fn test_negative_comprehension_garbles_everything() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello friend")
        .arg("--comprehension")
        .arg("-0.5");

    cmd.assert().success().stdout("[Hello] [friend]\n");
}

#[test]
fn test_default_comprehension_is_full() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process").arg("--text").arg("Nothing changes here.");

    cmd.assert().success().stdout("Nothing changes here.\n");
}

#[test]
fn test_stdin_input() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--comprehension")
        .arg("0.0")
        .write_stdin("doesn't matter");

    cmd.assert().success().stdout("[doesn't] [matter]\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("chat.txt");
    fs::write(&file_path, "What? Yes.").unwrap();

    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--input")
        .arg(file_path.display().to_string())
        .arg("--comprehension")
        .arg("0.0")
        .arg("--quiet");

    cmd.assert().success().stdout("[What]? [Yes].\n");
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--input")
        .arg("/nonexistent/chat.txt")
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No message files matched"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello friend")
        .arg("--comprehension")
        .arg("0.0")
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"text\""))
        .stdout(predicate::str::contains("[Hello] [friend]"))
        .stdout(predicate::str::contains("\"words_garbled\": 2"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("rendered.txt");

    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello123world")
        .arg("--comprehension")
        .arg("0.0")
        .arg("--output")
        .arg(&output_file);

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "[Hello]123[world]\n");
}

#[test]
fn test_config_file_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("garble.toml");
    fs::write(
        &config_file,
        r#"
        [processing]
        comprehension = 0.0
        open_marker = "<"
        close_marker = ">"
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello")
        .arg("--config")
        .arg(&config_file);

    cmd.assert().success().stdout("<Hello>\n");
}

#[test]
fn test_command_line_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("garble.toml");
    fs::write(
        &config_file,
        r#"
        [processing]
        comprehension = 0.0
        "#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("process")
        .arg("--text")
        .arg("Hello friend")
        .arg("--comprehension")
        .arg("1.0")
        .arg("--config")
        .arg(&config_file);

    cmd.assert().success().stdout("Hello friend\n");
}

#[test]
fn test_deterministic_output_across_runs() {
    let run = || {
        let mut cmd = Command::cargo_bin("garble").unwrap();
        cmd.arg("process")
            .arg("--text")
            .arg("The caravan arrives at dawn with fresh supplies")
            .arg("--comprehension")
            .arg("0.5");
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(), run());
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("garble").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"));
}
