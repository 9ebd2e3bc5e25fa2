// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The palette: open/close lifecycle, query state, and the keyboard contract.
//!
//! A `Palette` is the search surface. Closed, it holds nothing but the store
//! and config and listens for one thing, the open shortcut. Open, it owns a
//! `QueryState` (query text, matches, cursor) that lives exactly as long as
//! the session: closing drops it, reopening builds a fresh empty one.
//!
//! Every transition is synchronous. Typing recomputes matches immediately and
//! resets the cursor, so the matches and the cursor can never disagree.
//!
//! | state  | key                 | effect                                 |
//! |--------|---------------------|----------------------------------------|
//! | closed | shortcut            | open, empty session                    |
//! | closed | anything else       | ignored                                |
//! | open   | ArrowDown / ArrowUp | move cursor (clamped)                  |
//! | open   | Enter               | navigate to highlighted url, close     |
//! | open   | Escape              | close                                  |
//! | open   | anything else       | ignored (text goes through set_query)  |

use crate::config::SearchConfig;
use crate::store::IndexStore;
use crate::types::DocumentEntry;

use super::cursor::Cursor;
use super::group::{group_by_category, GroupedResults};
use super::keys::{Key, KeyEvent};
use super::matcher::match_positions;

/// Receives the url of a committed result.
///
/// Whether navigation succeeds is the host's business. Closures work:
/// `palette.handle_key(event, &mut |url: &str| router.push(url))`.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, url: &str) {
        self(url)
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The palette was opened.
    Opened,
    /// The cursor moved (or stayed, clamped). `None` only with no results.
    Moved(Option<usize>),
    /// A result was committed; the navigator got this url and the palette closed.
    Committed(String),
    /// The palette was closed without a selection.
    Closed,
    /// Nothing happened.
    Ignored,
}

impl KeyOutcome {
    /// Lowercase name for hosts that only need the kind of outcome.
    pub fn name(&self) -> &'static str {
        match self {
            KeyOutcome::Opened => "opened",
            KeyOutcome::Moved(_) => "moved",
            KeyOutcome::Committed(_) => "committed",
            KeyOutcome::Closed => "closed",
            KeyOutcome::Ignored => "ignored",
        }
    }
}

/// Per-session state. Exists only while the palette is open.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    query: String,
    /// Store positions of the matches, in match order.
    matches: Vec<usize>,
    cursor: Cursor,
}

impl QueryState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_positions(&self) -> &[usize] {
        &self.matches
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

/// The search surface.
#[derive(Debug, Clone)]
pub struct Palette {
    store: IndexStore,
    config: SearchConfig,
    session: Option<QueryState>,
}

impl Palette {
    /// A closed palette over `store`.
    ///
    /// The store is snapshotted (an `Arc` clone), folded to match the
    /// config's diacritic mode once, up front.
    pub fn new(store: &IndexStore, config: SearchConfig) -> Self {
        Palette {
            store: store.with_folding(config.fold_diacritics),
            config,
            session: None,
        }
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open with an empty session. Already open: no change, the current
    /// query survives.
    pub fn open(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        log::debug!("palette opened over {} documents", self.store.len());
        self.session = Some(QueryState::default());
        true
    }

    /// Close and discard the session.
    pub fn close(&mut self) -> bool {
        let was_open = self.session.take().is_some();
        if was_open {
            log::debug!("palette closed");
        }
        was_open
    }

    /// Close button or backdrop click. Same as Escape: nothing is committed.
    pub fn dismiss(&mut self) -> bool {
        self.close()
    }

    /// Replace the query text and recompute matches. Ignored while closed.
    pub fn set_query(&mut self, text: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let matches = match_positions(text, &self.store, &self.config);
        *session = QueryState {
            query: text.to_string(),
            cursor: Cursor::new(matches.len()),
            matches,
        };
    }

    pub fn session(&self) -> Option<&QueryState> {
        self.session.as_ref()
    }

    /// Current query text; empty while closed.
    pub fn query(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.query.as_str())
    }

    /// Current matches, most relevant first; empty while closed.
    pub fn matches(&self) -> Vec<&DocumentEntry> {
        self.session
            .as_ref()
            .map(|s| {
                s.matches
                    .iter()
                    .filter_map(|&position| self.store.get(position))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The cursor; a cursor over nothing while closed.
    pub fn cursor(&self) -> Cursor {
        self.session.as_ref().map(|s| s.cursor).unwrap_or_default()
    }

    /// The highlighted entry, if any.
    pub fn selected(&self) -> Option<&DocumentEntry> {
        let session = self.session.as_ref()?;
        let row = session.cursor.selected()?;
        self.store.get(*session.matches.get(row)?)
    }

    /// Matches grouped by category for sectioned display.
    pub fn groups(&self) -> GroupedResults<'_> {
        group_by_category(self.matches(), &self.config.fallback_category)
    }

    /// The excerpt to show for `entry` under this palette's config.
    pub fn excerpt_for<'e>(&self, entry: &'e DocumentEntry) -> std::borrow::Cow<'e, str> {
        entry.excerpt_or_prefix(self.config.excerpt_chars)
    }

    /// Feed a key press through the keyboard contract.
    pub fn handle_key<N: Navigator + ?Sized>(
        &mut self,
        event: KeyEvent,
        navigator: &mut N,
    ) -> KeyOutcome {
        let Some(session) = self.session.as_mut() else {
            if self.config.shortcut.matches(&event) {
                self.open();
                return KeyOutcome::Opened;
            }
            return KeyOutcome::Ignored;
        };

        match event.key {
            Key::ArrowDown => KeyOutcome::Moved(session.cursor.move_down()),
            Key::ArrowUp => KeyOutcome::Moved(session.cursor.move_up()),
            Key::Enter => match session.cursor.selected() {
                Some(row) => self.commit(row, navigator),
                None => KeyOutcome::Ignored,
            },
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Char(_) | Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Pointer entered result `row`. Returns whether the cursor moved there.
    pub fn hover(&mut self, row: usize) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.cursor.hover(row))
    }

    /// Result `row` was clicked.
    pub fn click<N: Navigator + ?Sized>(&mut self, row: usize, navigator: &mut N) -> KeyOutcome {
        match self.session.as_ref() {
            Some(session) if row < session.matches.len() => self.commit(row, navigator),
            _ => KeyOutcome::Ignored,
        }
    }

    fn commit<N: Navigator + ?Sized>(&mut self, row: usize, navigator: &mut N) -> KeyOutcome {
        let url = self
            .session
            .as_ref()
            .and_then(|session| session.matches.get(row))
            .and_then(|&position| self.store.get(position))
            .map(|entry| entry.url.clone());

        match url {
            Some(url) => {
                log::debug!("palette committed {}", url);
                navigator.navigate(&url);
                self.close();
                KeyOutcome::Committed(url)
            }
            None => KeyOutcome::Ignored,
        }
    }
}
