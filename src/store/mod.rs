// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Index Store: an immutable, ordered snapshot of documentation entries.
//!
//! The host builds a store once (from JSON emitted at site build time, or from
//! entries it already holds) and hands it to a palette. Cloning a store is an
//! `Arc` bump, so every palette session gets its own snapshot for free: a
//! host that later builds a new store never disturbs a session still reading
//! the old one. There is no mutation API at all.
//!
//! Each entry's searchable text is case-folded once here, at snapshot time,
//! so a keystroke only has to fold the query.
//!
//! # Invariants
//!
//! - `id`s are unique (checked by [`IndexStore::new`]).
//! - Entry order is the order the host supplied. Matching preserves it.

pub mod load;
pub mod manifest;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{DocId, DocumentEntry};
use crate::utils::fold;

pub use load::*;
pub use manifest::*;

/// Lowercased copies of the fields the matcher scans.
#[derive(Debug, Clone, Default)]
pub(crate) struct FoldedFields {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tags: Vec<String>,
}

impl FoldedFields {
    pub(crate) fn of(entry: &DocumentEntry, strip_diacritics: bool) -> Self {
        FoldedFields {
            title: fold(&entry.title, strip_diacritics),
            content: fold(&entry.content, strip_diacritics),
            tags: entry
                .tags
                .iter()
                .map(|tag| fold(tag, strip_diacritics))
                .collect(),
        }
    }

    /// The matching rule: title, then content, then any tag.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.content.contains(needle)
            || self.tags.iter().any(|tag| tag.contains(needle))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct StoredEntry {
    pub(crate) entry: DocumentEntry,
    pub(crate) folded: FoldedFields,
}

#[derive(Debug, Default)]
struct Snapshot {
    entries: Vec<StoredEntry>,
    positions: HashMap<DocId, usize>,
    strips_diacritics: bool,
}

/// An immutable, cheaply clonable collection of entries.
///
/// `IndexStore::default()` is the empty store, which is also how an absent
/// index is represented: searching it yields nothing.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    inner: Arc<Snapshot>,
}

/// Accepted JSON shapes: a bare array, `{"documents": [...]}`, or `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StorePayload {
    Entries(Vec<DocumentEntry>),
    Wrapped { documents: Vec<DocumentEntry> },
}

impl IndexStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(entries: Vec<DocumentEntry>) -> Result<Self> {
        Self::build(entries, false)
    }

    /// The empty store.
    pub fn empty() -> Self {
        Self::default()
    }

    fn build(entries: Vec<DocumentEntry>, strip_diacritics: bool) -> Result<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            match positions.entry(entry.id.clone()) {
                Entry::Occupied(_) => {
                    log::warn!(
                        "rejecting index store: id {} appears more than once (second at position {})",
                        entry.id,
                        position
                    );
                    return Err(Error::DuplicateId(entry.id.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let entries = entries
            .into_iter()
            .map(|entry| {
                let folded = FoldedFields::of(&entry, strip_diacritics);
                StoredEntry { entry, folded }
            })
            .collect();

        Ok(IndexStore {
            inner: Arc::new(Snapshot {
                entries,
                positions,
                strips_diacritics: strip_diacritics,
            }),
        })
    }

    /// Parse a store from JSON. `null` gives the empty store.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_payload(serde_json::from_str(json)?)
    }

    /// Build a store from an already decoded JSON value, same shapes as
    /// [`IndexStore::from_json_str`].
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Self::from_payload(serde_json::from_value(value)?)
    }

    /// Like [`IndexStore::from_json_value`], but a malformed index becomes
    /// the empty store, so searching it yields no results instead of failing.
    pub fn from_json_value_or_empty(value: serde_json::Value) -> Self {
        Self::from_json_value(value).unwrap_or_else(|err| {
            log::warn!("ignoring malformed index store ({}): {}", err.code(), err);
            Self::empty()
        })
    }

    fn from_payload(payload: Option<StorePayload>) -> Result<Self> {
        let entries = match payload {
            None => Vec::new(),
            Some(StorePayload::Entries(entries)) => entries,
            Some(StorePayload::Wrapped { documents }) => documents,
        };
        Self::new(entries)
    }

    /// This store with fields folded for the given diacritic mode.
    ///
    /// Returns a cheap clone when the mode already matches.
    pub fn with_folding(&self, strip_diacritics: bool) -> Self {
        if self.inner.strips_diacritics == strip_diacritics {
            return self.clone();
        }
        let entries = self
            .inner
            .entries
            .iter()
            .map(|stored| StoredEntry {
                entry: stored.entry.clone(),
                folded: FoldedFields::of(&stored.entry, strip_diacritics),
            })
            .collect();

        IndexStore {
            inner: Arc::new(Snapshot {
                entries,
                positions: self.inner.positions.clone(),
                strips_diacritics: strip_diacritics,
            }),
        }
    }

    /// Whether the pre-folded fields have diacritics stripped.
    pub fn strips_diacritics(&self) -> bool {
        self.inner.strips_diacritics
    }

    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&DocumentEntry> {
        self.inner.entries.get(position).map(|stored| &stored.entry)
    }

    pub fn position_of(&self, id: &DocId) -> Option<usize> {
        self.inner.positions.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentEntry> + '_ {
        self.inner.entries.iter().map(|stored| &stored.entry)
    }

    pub(crate) fn stored(&self) -> &[StoredEntry] {
        &self.inner.entries
    }

    /// Category labels in first-seen order with their entry counts.
    pub fn categories(&self, fallback: &str) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in self.iter() {
            let label = entry.category_or(fallback);
            match counts.iter_mut().find(|(seen, _)| seen == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
        counts
    }

    /// Number of distinct tags across the store.
    pub fn tag_count(&self) -> usize {
        let mut tags: Vec<&str> = self
            .iter()
            .flat_map(|entry| entry.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags.len()
    }
}
