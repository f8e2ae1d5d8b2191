//! Integration tests for note commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_note, init_workspace, notedesk_cmd};

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let id = add_note(temp.path(), &["Shopping", "buy milk", "--category", "Home"]);
    assert_eq!(id.len(), 36);

    notedesk_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}    [Home] Shopping", id)));

    let stored = fs::read_to_string(temp.path().join(".notedesk/notes.toml")).unwrap();
    assert!(stored.contains(&id));
    assert!(stored.contains("buy milk"));
}

#[test]
fn test_add_uses_configured_default_category() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["config", "default_category", "Inbox"])
        .assert()
        .success();

    let id = add_note(temp.path(), &["Untitled thought"]);

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("category: Inbox"));
}

#[test]
fn test_add_empty_note_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["add", "   ", ""])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("title and content are both empty"));

    notedesk_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));
}

#[test]
fn test_list_orders_by_last_update() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let a = add_note(temp.path(), &["Shopping", "buy milk", "-c", "Home"]);
    let b = add_note(temp.path(), &["Work", "finish report", "-c", "Work"]);

    let output = notedesk_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find(&b).unwrap() < stdout.find(&a).unwrap());

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["edit", &a, "Shopping List", "buy milk and eggs"])
        .assert()
        .success();

    let output = notedesk_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find(&a).unwrap() < stdout.find(&b).unwrap());
    assert!(stdout.contains("[Home] Shopping List"));
}

#[test]
fn test_favorites_and_category_filters() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let a = add_note(temp.path(), &["Shopping", "buy milk", "-c", "Home"]);
    let b = add_note(temp.path(), &["Work", "finish report", "-c", "Work"]);

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["fav", &b])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked"));

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&b))
        .stdout(predicate::str::contains(&a).not());

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["list", "--category", "Home"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&a))
        .stdout(predicate::str::contains(&b).not());
}

#[test]
fn test_search_ignores_case_and_accents() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let cafe = add_note(temp.path(), &["Café", "latte order"]);
    let other = add_note(temp.path(), &["Groceries", "apples"]);

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["search", "CAFE"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&cafe))
        .stdout(predicate::str::contains(&other).not());
}

#[test]
fn test_rm_twice_reports_not_found() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let id = add_note(temp.path(), &["Temp", "scratch"]);

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["rm", &id])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn test_invalid_id_is_rejected() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["show", "not-an-id"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid note id"));
}

#[test]
fn test_stats_and_categories() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    let a = add_note(temp.path(), &["a", "", "-c", "Home"]);
    add_note(temp.path(), &["b", "", "-c", "Work"]);
    add_note(temp.path(), &["c", "", "-c", "Home"]);

    notedesk_cmd()
        .current_dir(temp.path())
        .args(["fav", &a])
        .assert()
        .success();

    notedesk_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total notes: 3"))
        .stdout(predicate::str::contains("Favorites:   1"))
        .stdout(predicate::str::contains("Home: 2"))
        .stdout(predicate::str::contains("Work: 1"));

    notedesk_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Home\nWork\n");
}

#[test]
fn test_corrupt_store_is_reported() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    fs::write(temp.path().join(".notedesk/notes.toml"), "not = [valid").unwrap();

    notedesk_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Note storage failed"))
        .stderr(predicate::str::contains("failed to parse"));
}
