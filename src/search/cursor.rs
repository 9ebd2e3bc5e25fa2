// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The selection cursor: which result row is highlighted.
//!
//! ```text
//!            ArrowDown               ArrowDown            ArrowDown
//!   None ───────────────▶ Some(0) ──────────────▶ ... ──▶ Some(N-1) ─┐
//!     │                     ▲  │                            ▲        │
//!     │       ArrowUp       │  │ ArrowUp (clamps at 0)      └────────┘
//!     └─────────────────────┘  └──▶ Some(0)               (clamps, no wrap)
//! ```
//!
//! Hover moves the same cursor as the keyboard. With no results every move is
//! a no-op and the cursor stays `None`.

/// Cursor over a result list of fixed length.
///
/// The length is captured when the cursor is created; a new match list means
/// a new cursor, which is how "reset to nothing highlighted on every
/// recomputation" falls out of the types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    selected: Option<usize>,
    len: usize,
}

impl Cursor {
    /// A cursor over `len` rows with nothing highlighted.
    pub fn new(len: usize) -> Self {
        Cursor {
            selected: None,
            len,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted row, or -1 when nothing is highlighted.
    pub fn as_index(&self) -> isize {
        self.selected.map_or(-1, |i| i as isize)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// ArrowDown. Steps forward, stopping on the last row.
    pub fn move_down(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.len - 1),
        });
        self.selected
    }

    /// ArrowUp. Steps back, stopping on the first row. From nothing
    /// highlighted it lands on the first row.
    pub fn move_up(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => 0,
            Some(i) => i - 1,
        });
        self.selected
    }

    /// Pointer entered `row`. Returns false (and leaves the cursor alone) when
    /// the row doesn't exist.
    pub fn hover(&mut self, row: usize) -> bool {
        if row < self.len {
            self.selected = Some(row);
            true
        } else {
            false
        }
    }
}
