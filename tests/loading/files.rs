//! Single-file indexes.

use docsift::{load_path, DocId, Error, IndexStore, Palette, SearchConfig};
use std::fs;
use tempfile::TempDir;

const SITE: &str = r#"[
    {"id": "start", "title": "Quick Start", "content": "Install and run.", "category": "Guides", "url": "/start"},
    {"id": 7, "title": "Auth", "content": "JWT tokens", "tags": ["security"], "url": "/auth"},
    {"id": "limits", "title": "Rate Limits", "content": "Per token limits.", "category": "API", "url": "/limits"}
]"#;

#[test]
fn loads_a_bare_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, SITE).unwrap();

    let store = load_path(&path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.position_of(&DocId::from("limits")), Some(2));
    assert_eq!(store.position_of(&DocId::from(7u64)), Some(1));
}

#[test]
fn loads_a_wrapped_documents_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, format!(r#"{{"documents": {}}}"#, SITE)).unwrap();

    let store = load_path(&path).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn null_index_is_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, "null").unwrap();

    let store = load_path(&path).unwrap();
    assert!(store.is_empty());

    let mut palette = Palette::new(&store, SearchConfig::default());
    palette.open();
    palette.set_query("anything");
    assert!(palette.matches().is_empty());
}

#[test]
fn loaded_store_searches_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, SITE).unwrap();

    let store = load_path(&path).unwrap();
    let mut palette = Palette::new(&store, SearchConfig::default());
    palette.open();
    palette.set_query("token");

    let urls: Vec<&str> = palette.matches().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, ["/auth", "/limits"]);

    let labels: Vec<&str> = palette.groups().labels().collect();
    assert_eq!(labels, ["Other", "API"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "title": "A", "content": "", "url": "/a"},
            {"id": 1, "title": "B", "content": "", "url": "/b"}
        ]"#,
    )
    .unwrap();

    let err = load_path(&path).unwrap_err();
    assert!(matches!(err, Error::DuplicateId(ref id) if *id == DocId::from(1u64)), "got {:?}", err);
    assert_eq!(err.code(), "DUPLICATE_ID");
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.json");
    fs::write(&path, r#"[{"id": 1, "title": "A"}]"#).unwrap();

    let err = load_path(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {:?}", err);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {:?}", err);
    assert_eq!(err.code(), "IO_ERROR");
}

#[test]
fn malformed_entries_give_a_working_palette_with_no_results() {
    let missing_url = serde_json::json!([
        {"id": 1, "title": "Auth", "content": "JWT tokens", "url": "/auth"},
        {"id": 2, "title": "Cache"}
    ]);
    let duplicated = serde_json::json!([
        {"id": 1, "title": "Auth", "content": "JWT tokens", "url": "/auth"},
        {"id": 1, "title": "Auth again", "content": "JWT tokens", "url": "/auth2"}
    ]);

    for value in [missing_url, duplicated, serde_json::json!({"nope": true})] {
        let store = IndexStore::from_json_value_or_empty(value);
        assert!(store.is_empty());

        let mut palette = Palette::new(&store, SearchConfig::default());
        assert!(palette.open());
        palette.set_query("jwt");
        assert!(palette.matches().is_empty());
        assert!(palette.groups().is_empty());
        assert_eq!(palette.cursor().selected(), None);
    }
}

#[test]
fn well_formed_value_loads_in_order() {
    let value: serde_json::Value = serde_json::from_str(SITE).unwrap();
    let store = IndexStore::from_json_value_or_empty(value);
    assert_eq!(store.len(), 3);
    assert_eq!(store.position_of(&DocId::from(7u64)), Some(1));
}
