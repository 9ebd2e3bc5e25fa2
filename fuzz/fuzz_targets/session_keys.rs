// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the palette's keyboard contract.
//!
//! Drives a palette with arbitrary interleavings of typing, key presses,
//! hovers and clicks, checking after every step that the cursor stays in
//! range and that a commit always closes the palette.

#![no_main]

use arbitrary::Arbitrary;
use docsift::testing::numbered_store;
use docsift::{Key, KeyEvent, KeyOutcome, Modifiers, Palette, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Action {
    Type(String),
    Down,
    Up,
    Enter,
    Escape,
    Shortcut { ctrl: bool, meta: bool },
    Char(char),
    Hover(u8),
    Click(u8),
    Close,
}

fuzz_target!(|actions: Vec<Action>| {
    let store = numbered_store(25);
    let mut palette = Palette::new(&store, SearchConfig::default());
    let mut navigate = |url: &str| assert!(url.starts_with("/docs/"));

    for action in actions {
        let outcome = match action {
            Action::Type(text) => {
                palette.set_query(&text);
                KeyOutcome::Ignored
            }
            Action::Down => palette.handle_key(KeyEvent::plain(Key::ArrowDown), &mut navigate),
            Action::Up => palette.handle_key(KeyEvent::plain(Key::ArrowUp), &mut navigate),
            Action::Enter => palette.handle_key(KeyEvent::plain(Key::Enter), &mut navigate),
            Action::Escape => palette.handle_key(KeyEvent::plain(Key::Escape), &mut navigate),
            Action::Shortcut { ctrl, meta } => {
                let modifiers = Modifiers {
                    ctrl,
                    meta,
                    ..Modifiers::NONE
                };
                palette.handle_key(KeyEvent { key: Key::Char('k'), modifiers }, &mut navigate)
            }
            Action::Char(c) => palette.handle_key(KeyEvent::plain(Key::Char(c)), &mut navigate),
            Action::Hover(row) => {
                palette.hover(row as usize);
                KeyOutcome::Ignored
            }
            Action::Click(row) => palette.click(row as usize, &mut navigate),
            Action::Close => {
                palette.close();
                KeyOutcome::Closed
            }
        };

        if matches!(outcome, KeyOutcome::Committed(_) | KeyOutcome::Closed) {
            assert!(!palette.is_open());
        }

        let cursor = palette.cursor();
        assert_eq!(cursor.len(), palette.matches().len());
        assert!(cursor.selected().map_or(true, |row| row < cursor.len()));
        assert!(palette.matches().len() <= palette.config().max_results);
    }
});
