//! The `docsift` binary against a real index on disk.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SITE: &str = r#"[
    {"id": 1, "title": "Auth", "content": "JWT tokens", "category": "Guides", "url": "/auth"},
    {"id": 2, "title": "Rate Limits", "content": "Per token limits.", "category": "API", "url": "/limits"},
    {"id": 3, "title": "Cache", "content": "Redis caching", "url": "/cache"}
]"#;

fn docsift(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_docsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("DOCSIFT_MAX_RESULTS")
        .env_remove("DOCSIFT_MIN_QUERY_CHARS")
        .output()
        .unwrap()
}

fn site() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, SITE).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

#[test]
fn search_json_reports_groups_and_commit() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token", "--json", "--keys", "down,down,enter"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"], "token");
    assert_eq!(json["groups"][0]["label"], "Guides");
    assert_eq!(json["groups"][1]["label"], "API");
    assert_eq!(json["steps"][1]["cursor"], 1);
    assert_eq!(json["steps"][2]["outcome"], "committed");
    assert_eq!(json["cursor"], -1);
    assert_eq!(json["committed"], "/limits");
}

#[test]
fn search_without_commit_leaves_cursor() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token", "--json", "--keys", "down,up,up"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cursor"], 0);
    assert!(json["committed"].is_null());
}

#[test]
fn search_prints_boxes() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "cache"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Other"), "{}", stdout);
    assert!(stdout.contains("Redis caching"), "{}", stdout);
}

#[test]
fn search_marks_the_highlighted_row() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token", "--keys", "down,down"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let marked: Vec<&str> = stdout.lines().filter(|l| l.contains('▶')).collect();
    assert_eq!(marked.len(), 1, "{}", stdout);
    assert!(marked[0].contains("Rate Limits"), "{}", stdout);
}

#[test]
fn search_marks_the_committed_row_after_closing() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token", "--keys", "down,enter"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let marked: Vec<&str> = stdout.lines().filter(|l| l.contains('▶')).collect();
    assert_eq!(marked.len(), 1, "{}", stdout);
    assert!(marked[0].contains("Auth"), "{}", stdout);
    assert!(stdout.contains("navigate → /auth"), "{}", stdout);
}

#[test]
fn search_without_keys_marks_nothing() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token"]);
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains('▶'));
}

#[test]
fn limit_zero_is_a_config_error() {
    let (_dir, index) = site();
    let output = docsift(&["search", &index, "token", "--limit", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid configuration"));
}

#[test]
fn inspect_lists_categories() {
    let (_dir, index) = site();
    let output = docsift(&["inspect", &index]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Documents   3"), "{}", stdout);
    assert!(stdout.contains("Guides"));
    assert!(stdout.contains("API"));
}

#[test]
fn missing_index_fails_cleanly() {
    let output = docsift(&["inspect", "/definitely/not/here.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load index"));
}
