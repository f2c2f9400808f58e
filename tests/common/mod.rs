//! Shared test utilities.

#![allow(dead_code)]

use itemlist::list::ListState;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Build a state from string slices.
pub fn state(items: &[&str], error: &str) -> ListState {
    ListState {
        items: items.iter().map(|s| s.to_string()).collect(),
        error: error.to_string(),
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The built binary, pointed at a config path that does not exist so the
/// user's own config never leaks into a test.
pub fn itemlist_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_itemlist"));
    cmd.arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .env_remove("ITEMLIST_LOG")
        .env_remove("RUST_LOG");
    cmd
}
