//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical constructors so tests don't each invent their own.

#![doc(hidden)]

use crate::store::IndexStore;
use crate::types::{DocId, DocumentEntry};

/// Create a simple entry with no excerpt, category or tags.
pub fn make_entry(id: u64, title: &str, content: &str) -> DocumentEntry {
    DocumentEntry {
        id: DocId::from(id),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: None,
        category: None,
        tags: vec![],
        url: format!("/docs/{}", id),
    }
}

/// Create an entry in a category.
pub fn make_entry_in(id: u64, title: &str, content: &str, category: &str) -> DocumentEntry {
    DocumentEntry {
        category: Some(category.to_string()),
        ..make_entry(id, title, content)
    }
}

/// Create an entry with tags.
pub fn make_tagged_entry(id: u64, title: &str, content: &str, tags: &[&str]) -> DocumentEntry {
    DocumentEntry {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_entry(id, title, content)
    }
}

/// Build a store from entries whose ids are already known to be unique.
pub fn store_of(entries: Vec<DocumentEntry>) -> IndexStore {
    IndexStore::new(entries).expect("test entries must have unique ids")
}

/// The two-entry auth/cache index used throughout the docs and tests.
pub fn auth_cache_store() -> IndexStore {
    store_of(vec![
        make_tagged_entry(1, "Auth", "JWT tokens", &["security"]),
        make_tagged_entry(2, "Cache", "Redis caching", &["performance"]),
    ])
}

/// `count` entries that all contain "doc" in their title.
pub fn numbered_store(count: u64) -> IndexStore {
    store_of(
        (0..count)
            .map(|i| make_entry(i, &format!("Doc {}", i), &format!("Body of page {}", i)))
            .collect(),
    )
}
