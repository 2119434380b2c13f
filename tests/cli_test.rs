use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn uplcfile() -> Command {
    Command::cargo_bin("uplcfile").unwrap()
}

#[test]
fn writes_file_and_reports_size() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("validator.uplc");
    let content = "(program 1.0.0 (lam x x))";

    let assert = uplcfile().arg(&path).arg(content).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(
        stdout.contains("File size: 25 bytes"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("Content preview: (program 1.0.0 (lam x x))"),
        "stdout: {stdout}"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn long_content_preview_is_truncated() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("long.uplc");
    let content = format!("(program 1.0.0 (con bytestring #{}))", "ff".repeat(40));

    let assert = uplcfile().arg(&path).arg(&content).assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let expected: String = content.chars().take(60).collect();
    assert!(
        stdout.contains(&format!("Content preview: {expected}...")),
        "stdout: {stdout}"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn missing_content_argument_exits_one_with_usage() {
    let assert = uplcfile().arg("only_filename.uplc").assert().code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn no_arguments_exits_one_with_usage() {
    let assert = uplcfile().assert().code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn unwritable_target_exits_one() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("out.uplc");

    let assert = uplcfile()
        .arg(&path)
        .arg("(con unit ())")
        .assert()
        .code(1);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("Error creating file"), "stdout: {stdout}");
    assert!(!path.exists());
}
