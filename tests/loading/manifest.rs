//! Manifest directories: one JSON file per entry.

use docsift::store::{InputManifest, MANIFEST_FILE};
use docsift::{load_path, DocId, Error};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_entry(dir: &Path, name: &str, id: u64, title: &str) {
    let body = format!(
        r#"{{"id": {}, "title": "{}", "content": "page {}", "url": "/{}"}}"#,
        id, title, id, id
    );
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn write_manifest(dir: &Path, documents: &[&str]) {
    let manifest = serde_json::json!({ "version": 1, "documents": documents });
    fs::write(dir.join(MANIFEST_FILE), manifest.to_string()).unwrap();
}

#[test]
fn loads_in_manifest_order() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..40).rev().map(|i| format!("pages/{:02}.json", i)).collect();
    for (i, name) in names.iter().enumerate() {
        write_entry(dir.path(), name, i as u64, &format!("Page {}", i));
    }
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    write_manifest(dir.path(), &refs);

    let store = load_path(dir.path()).unwrap();
    assert_eq!(store.len(), 40);
    let ids: Vec<DocId> = store.iter().map(|e| e.id.clone()).collect();
    let expected: Vec<DocId> = (0..40u64).map(DocId::from).collect();
    assert_eq!(ids, expected);
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {:?}", err);
}

#[test]
fn missing_document_names_the_file() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "a.json", 1, "A");
    write_manifest(dir.path(), &["a.json", "gone.json"]);

    let err = load_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Manifest(_)));
    assert!(err.to_string().contains("gone.json"), "{}", err);
}

#[test]
fn unsupported_version_is_rejected() {
    let err = InputManifest::parse(r#"{"version": 9, "documents": []}"#).unwrap_err();
    assert_eq!(err.code(), "INVALID_MANIFEST");
}

#[test]
fn paths_escaping_the_directory_are_rejected() {
    for bad in ["../secret.json", "/etc/passwd", ""] {
        let json = serde_json::json!({ "version": 1, "documents": [bad] }).to_string();
        assert!(InputManifest::parse(&json).is_err(), "{:?} accepted", bad);
    }
}

#[test]
fn duplicate_ids_across_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "a.json", 1, "A");
    write_entry(dir.path(), "b.json", 1, "B");
    write_manifest(dir.path(), &["a.json", "b.json"]);

    let err = load_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::DuplicateId(_)), "got {:?}", err);
}
