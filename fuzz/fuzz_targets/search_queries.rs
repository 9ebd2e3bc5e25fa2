// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query matching.
//!
//! Arbitrary strings go in as queries, against a fixed site. Matching must
//! never panic, never exceed the cap, and only ever return entries that
//! contain the query.

#![no_main]

use docsift::testing::{make_entry_in, make_tagged_entry, store_of};
use docsift::{find_matches, IndexStore, SearchConfig};
use libfuzzer_sys::fuzz_target;

fn site() -> &'static IndexStore {
    static STORE: std::sync::OnceLock<IndexStore> = std::sync::OnceLock::new();
    STORE.get_or_init(|| {
        store_of(vec![
            make_entry_in(1, "Quick Start", "Install and run the wizard.", "Guides"),
            make_entry_in(2, "Straße", "Ünïcödé content with İ and ß.", "Reference"),
            make_tagged_entry(3, "Emoji 🔍", "Search 🔍 with emoji", &["🔥", "ǅ"]),
            make_entry_in(4, "", "", "  "),
        ])
    })
}

fuzz_target!(|query: &str| {
    let store = site();

    for fold in [false, true] {
        let config = SearchConfig::default().with_fold_diacritics(fold);
        let matches = find_matches(query, store, &config);
        assert!(matches.len() <= config.max_results);

        if query.trim().chars().count() < config.min_query_chars {
            assert!(matches.is_empty(), "short query {:?} matched", query);
        }
        if !fold {
            let needle = query.trim().to_lowercase();
            for entry in matches {
                assert!(
                    entry.title.to_lowercase().contains(&needle)
                        || entry.content.to_lowercase().contains(&needle)
                        || entry.tags.iter().any(|t| t.to_lowercase().contains(&needle)),
                    "{:?} does not contain {:?}",
                    entry.title,
                    query
                );
            }
        }
    }
});
