// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory documentation search with keyboard navigation.
//!
//! This crate is the search palette of a documentation site: type a query,
//! get the matching pages grouped by category, arrow through them, hit enter
//! to go there. It runs natively (library + `docsift` CLI) and in the browser
//! (the `wasm` feature).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   store/     │────▶│   search/    │
//! │ (Document-  │     │ (IndexStore, │     │ matcher      │
//! │  Entry,     │     │  loaders,    │     │ group        │
//! │  DocId)     │     │  manifest)   │     │ cursor, keys │
//! └─────────────┘     └──────────────┘     │ session      │
//!                                          └──────┬───────┘
//!                        config.rs ───────────────┤
//!                                                 ▼
//!                                  cli/ (native)   runtime/wasm.rs (browser)
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{IndexStore, Palette, SearchConfig, Key, KeyEvent, KeyOutcome};
//!
//! let store = IndexStore::from_json_str(r#"[
//!     {"id": 1, "title": "Auth", "content": "JWT tokens", "tags": ["security"], "url": "/auth"},
//!     {"id": 2, "title": "Cache", "content": "Redis caching", "url": "/cache"}
//! ]"#).unwrap();
//!
//! let mut palette = Palette::new(&store, SearchConfig::default());
//! palette.open();
//! palette.set_query("jwt");
//! assert_eq!(palette.matches().len(), 1);
//!
//! let mut visited = Vec::new();
//! palette.handle_key(KeyEvent::plain(Key::ArrowDown), &mut |url: &str| visited.push(url.to_string()));
//! let outcome = palette.handle_key(KeyEvent::plain(Key::Enter), &mut |url: &str| visited.push(url.to_string()));
//!
//! assert_eq!(outcome, KeyOutcome::Committed("/auth".to_string()));
//! assert_eq!(visited, ["/auth"]);
//! assert!(!palette.is_open());
//! ```

pub mod config;
pub mod error;
pub mod runtime;
pub mod search;
pub mod store;
pub mod testing;
pub mod types;
mod utils;

// Re-exports for public API
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use search::{
    entry_matches, find_matches, group_by_category, match_positions, query_is_searchable, Cursor,
    GroupedResults, Key, KeyEvent, KeyOutcome, Modifiers, Navigator, Palette, QueryState,
    ResultGroup, Shortcut, ShortcutModifier,
};
pub use store::{load_path, IndexStore};
pub use types::{DocId, DocumentEntry};
pub use utils::{fold, fold_query};
