// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and navigate: everything between a keystroke and a url.
//!
//! The matcher and grouper are pure functions over an `IndexStore`. The cursor
//! is a small clamped state machine. The palette ties them together into a
//! session that opens, recomputes on every query change, and closes.

pub mod cursor;
pub mod group;
pub mod keys;
pub mod matcher;
pub mod session;

pub use cursor::Cursor;
pub use group::{group_by_category, GroupedResults, ResultGroup};
pub use keys::{Key, KeyEvent, Modifiers, Shortcut, ShortcutModifier};
pub use matcher::{entry_matches, find_matches, match_positions, query_is_searchable};
pub use session::{KeyOutcome, Navigator, Palette, QueryState};
