// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard input as the palette sees it.
//!
//! Hosts hand us whatever their event system produces. Browsers give
//! `KeyboardEvent.key` names, terminals give their own enums; both are
//! flattened into `KeyEvent` before reaching the session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The keys the palette reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// Modifier state at the time of the key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers held.
    pub fn plain(key: Key) -> Self {
        KeyEvent {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn from_dom_key(name: &str, modifiers: Modifiers) -> Self {
        KeyEvent {
            key: Key::from_dom_key(name),
            modifiers,
        }
    }
}

/// Which modifier the open shortcut needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutModifier {
    Ctrl,
    Meta,
    /// Ctrl or Meta: Ctrl+K on Linux/Windows, Cmd+K on macOS.
    Platform,
}

/// The "open search from anywhere" combination.
///
/// Serialized as `"mod+k"`, `"ctrl+p"`, `"meta+/"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    pub modifier: ShortcutModifier,
    pub key: char,
}

impl Default for Shortcut {
    fn default() -> Self {
        Shortcut {
            modifier: ShortcutModifier::Platform,
            key: 'k',
        }
    }
}

impl Shortcut {
    /// Whether `event` triggers this shortcut. Letters compare case-insensitively
    /// because Shift or Caps Lock may be active.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let Key::Char(c) = event.key else {
            return false;
        };
        if !c.eq_ignore_ascii_case(&self.key) {
            return false;
        }
        let m = event.modifiers;
        match self.modifier {
            ShortcutModifier::Ctrl => m.ctrl,
            ShortcutModifier::Meta => m.meta,
            ShortcutModifier::Platform => m.ctrl || m.meta,
        }
    }
}

impl FromStr for Shortcut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let (modifier, key) = normalized
            .split_once('+')
            .ok_or_else(|| Error::Config(format!("shortcut {:?} is not MODIFIER+KEY", s)))?;

        let modifier = match modifier {
            "ctrl" | "control" => ShortcutModifier::Ctrl,
            "meta" | "cmd" | "super" => ShortcutModifier::Meta,
            "mod" => ShortcutModifier::Platform,
            other => {
                return Err(Error::Config(format!(
                    "unknown shortcut modifier {:?} (expected ctrl|meta|mod)",
                    other
                )))
            }
        };

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) if !key.is_whitespace() => Ok(Shortcut { modifier, key }),
            _ => Err(Error::Config(format!(
                "shortcut key {:?} must be a single character",
                key
            ))),
        }
    }
}

impl TryFrom<String> for Shortcut {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        shortcut.to_string()
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = match self.modifier {
            ShortcutModifier::Ctrl => "ctrl",
            ShortcutModifier::Meta => "meta",
            ShortcutModifier::Platform => "mod",
        };
        write!(f, "{}+{}", modifier, self.key)
    }
}
