// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query matcher.
//!
//! Deliberately simple: case-insensitive substring containment over title,
//! content and tags, a stable filter in store order, and a hard cap. No
//! scoring. On a documentation site with a few hundred pages, store order
//! (which is the site's own navigation order) is already a good ranking, and
//! it means results never reshuffle as the user types another letter.
//!
//! ```text
//! query ──trim──▶ too short? ──yes──▶ []
//!                     │no
//!                     ▼
//!               fold case ──▶ scan store in order ──▶ take(max_results)
//! ```
//!
//! Pure: same query, same store, same config, same output.

use crate::config::SearchConfig;
use crate::store::{FoldedFields, IndexStore};
use crate::types::DocumentEntry;
use crate::utils::fold_query;

/// Whether the trimmed query is long enough to search.
pub fn query_is_searchable(query: &str, config: &SearchConfig) -> bool {
    query.trim().chars().count() >= config.min_query_chars.max(1)
}

/// Store positions of the entries matching `query`, in store order, capped at
/// `config.max_results`.
pub fn match_positions(query: &str, store: &IndexStore, config: &SearchConfig) -> Vec<usize> {
    if store.is_empty() || !query_is_searchable(query, config) {
        return Vec::new();
    }

    let needle = fold_query(query, config.fold_diacritics);
    let prefolded = store.strips_diacritics() == config.fold_diacritics;

    store
        .stored()
        .iter()
        .enumerate()
        .filter(|(_, stored)| {
            if prefolded {
                stored.folded.contains(&needle)
            } else {
                FoldedFields::of(&stored.entry, config.fold_diacritics).contains(&needle)
            }
        })
        .map(|(position, _)| position)
        .take(config.max_results)
        .collect()
}

/// The matching entries themselves.
pub fn find_matches<'a>(
    query: &str,
    store: &'a IndexStore,
    config: &SearchConfig,
) -> Vec<&'a DocumentEntry> {
    match_positions(query, store, config)
        .into_iter()
        .filter_map(|position| store.get(position))
        .collect()
}

/// Test one entry against an already-folded query.
///
/// For callers holding entries outside a store. Folds the entry on every
/// call; prefer [`match_positions`] for repeated searching.
pub fn entry_matches(folded_query: &str, entry: &DocumentEntry, strip_diacritics: bool) -> bool {
    !folded_query.is_empty() && FoldedFields::of(entry, strip_diacritics).contains(folded_query)
}
