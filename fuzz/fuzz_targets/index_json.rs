// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index JSON parsing.
//!
//! Whatever the site generator emits, parsing either fails with an error or
//! yields a store with unique ids in document order. It never panics.

#![no_main]

use docsift::IndexStore;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|json: &str| {
    let Ok(store) = IndexStore::from_json_str(json) else {
        return;
    };

    for (position, entry) in store.iter().enumerate() {
        assert_eq!(store.position_of(&entry.id), Some(position));
        let _ = entry.excerpt_or_prefix(150);
    }
});
