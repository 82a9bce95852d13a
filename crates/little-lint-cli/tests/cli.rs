//! Integration tests: exit codes and output of the `little-lint` binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn little_lint(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_little-lint"))
        .args(args)
        .current_dir(dir.path())
        .env("LITTLE_LINT_CONFIG_DIR", dir.path().join("no-user-config"))
        .env_remove("VIRTUAL_ENV")
        .output()
        .unwrap()
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".little-lint.toml"), "").unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn clean_project_exits_zero() {
    let dir = project(&[("main.py", "import os\n")]);
    let output = little_lint(&dir, &["check", "--no-color"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 0 violation(s)"));
}

#[test]
fn violations_exit_two_and_are_listed() {
    let dir = project(&[("main.py", "import sys, os\n")]);
    let output = little_lint(&dir, &["check", "--format", "compact"]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("main.py:1: error [LL006]"));
}

#[test]
fn ignore_flag_filters_kinds() {
    let dir = project(&[("main.py", "import sys, os\n")]);
    let output = little_lint(&dir, &["check", "--ignore", "LL006"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn syntax_error_exits_one() {
    let dir = project(&[("broken.py", "def (:\n")]);
    let output = little_lint(&dir, &["check", "--no-color"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("syntax error"));
}

#[test]
fn unknown_kind_exits_one() {
    let dir = project(&[("main.py", "import os\n")]);
    let output = little_lint(&dir, &["check", "--select", "no-such-kind"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn usage_error_exits_one() {
    let dir = project(&[]);
    let output = little_lint(&dir, &["check", "--format", "xml"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    assert_eq!(little_lint(&dir, &["init"]).status.code(), Some(0));
    assert!(dir.path().join("little-lint.toml").is_file());
    assert_eq!(little_lint(&dir, &["init"]).status.code(), Some(1));
}

#[test]
fn list_rules_names_every_rule() {
    let dir = TempDir::new().unwrap();
    let output = little_lint(&dir, &["list-rules"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["max-line-length", "import-order", "top-level-spacing", "LL011"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}
