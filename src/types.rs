// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document model.
//!
//! A `DocumentEntry` is one searchable unit of a documentation site: a page or
//! a section of one. Entries are produced by the host (usually at site build
//! time) and are read-only to everything in this crate.
//!
//! # Invariants
//!
//! - **DocumentEntry**: `id` is unique within one `IndexStore` snapshot.
//!   `IndexStore::new` rejects duplicates, so anything holding a store can
//!   rely on ids as keys.
//!
//! - **Optional fields**: `excerpt`, `category` and `tags` may be missing in
//!   the JSON. They are modelled as `Option`/empty `Vec` and resolved through
//!   the accessors below, never by probing for presence at the call site.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a document.
///
/// Documentation generators emit either numeric ids or slugs, and both show up
/// in the same JSON field, so this is untagged: `7`, `-1`, `1.5` and `"intro"`
/// all parse. Numbers compare by their JSON representation, so `1` and `1.0`
/// are distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Num(serde_json::Number),
    Text(String),
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Num(n) => write!(f, "{}", n),
            DocId::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId::Num(id.into())
    }
}

impl From<serde_json::Number> for DocId {
    fn from(id: serde_json::Number) -> Self {
        DocId::Num(id)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId::Text(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId::Text(id)
    }
}

/// One searchable documentation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    pub id: DocId,
    pub title: String,
    /// Full text. Searched, and the source of the excerpt fallback.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Navigation target handed to the host on commit.
    pub url: String,
}

impl DocumentEntry {
    /// The grouping label, or `fallback` when the category is missing or blank.
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.category.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => fallback,
        }
    }

    /// The excerpt to show under the title.
    ///
    /// Uses `excerpt` when present and non-empty; otherwise the first
    /// `max_chars` characters of `content`, with `...` appended when cut.
    pub fn excerpt_or_prefix(&self, max_chars: usize) -> Cow<'_, str> {
        if let Some(excerpt) = self.excerpt.as_deref().filter(|e| !e.is_empty()) {
            return Cow::Borrowed(excerpt);
        }

        match self.content.char_indices().nth(max_chars) {
            None => Cow::Borrowed(&self.content),
            Some((cut, _)) => Cow::Owned(format!("{}...", &self.content[..cut])),
        }
    }
}
