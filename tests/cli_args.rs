//! Tests for the binary: argument parsing, command input and output.

mod common;

use std::io::Write;
use std::process::{Output, Stdio};

use common::{itemlist_cmd, temp_config};
use tempfile::TempDir;

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let temp_dir = TempDir::new().unwrap();
    let mut child = itemlist_cmd(&temp_dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_help_lists_options() {
    let output = run_with_stdin(&["--help"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--script"));
    assert!(stdout.contains("--item"));
    assert!(stdout.contains("--json"));
}

#[test]
fn test_empty_input_prints_initial_list() {
    let output = run_with_stdin(&[], "");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[0] hi\n[1] hello\n");
}

#[test]
fn test_commands_from_stdin() {
    let output = run_with_stdin(
        &[],
        "add world\nadd\nselect 0\nselect 2\ndelete-selected\nmark-edited 0\n",
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error! Item cannot be empty\n[0] hello - Edited\n"
    );
}

#[test]
fn test_json_output_and_item_override() {
    let output = run_with_stdin(
        &["--json", "--item", "a", "--item", "b"],
        "{\"type\":\"EDIT_ITEM\",\"payload\":{\"index\":1,\"item\":\"B\"}}\n",
    );
    assert!(output.status.success());
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state, serde_json::json!({"items": ["a", "B"], "error": ""}));
}

#[test]
fn test_bad_line_reported_but_run_succeeds() {
    let output = run_with_stdin(&[], "bogus\ndelete 0\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1: Unknown command 'bogus'"));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[0] hello\n");
}

#[test]
fn test_script_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("edits.txt");
    std::fs::write(&script, "# tidy up\ndelete-many 1 0\nadd only\nshow\n").unwrap();

    let output = itemlist_cmd(&temp_dir)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[0] only\n[0] only\n");
}

#[test]
fn test_missing_script_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = itemlist_cmd(&temp_dir)
        .arg("--script")
        .arg(temp_dir.path().join("absent.txt"))
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to open script"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[store]\nhistory_limit = 0\n");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_itemlist"))
        .arg("--config")
        .arg(&path)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: invalid setting store.history_limit"));
}

#[test]
fn test_blank_item_override_is_rejected() {
    let output = run_with_stdin(&["--item", ""], "");
    assert_eq!(output.status.code(), Some(1));
}
