#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn notedesk_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notedesk").unwrap();
    cmd.env_remove("NOTEDESK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a workspace in `dir`
pub fn init_workspace(dir: &Path) {
    notedesk_cmd().arg("init").arg(dir).assert().success();
}

/// Run `add` inside `dir` and return the printed note id
pub fn add_note(dir: &Path, args: &[&str]) -> String {
    let output = notedesk_cmd()
        .current_dir(dir)
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
