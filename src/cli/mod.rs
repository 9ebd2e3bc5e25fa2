// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `search` runs a query through the same palette the
//! browser uses (optionally replaying a key script against the results), and
//! `inspect` summarises an index. Useful for checking what a generated index
//! will do before shipping it to the site.

pub mod display;

use std::str::FromStr;

use clap::{Parser, Subcommand};
use docsift::{Key, KeyEvent};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Documentation search palette: query and inspect docsift indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and display grouped results
    Search {
        /// Index JSON file, or a directory containing manifest.json
        index: String,

        /// Search query
        query: String,

        /// Maximum number of results (overrides DOCSIFT_MAX_RESULTS)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Key script replayed after the query, comma separated
        ///
        /// Steps: down, up, enter, esc, hover:N
        #[arg(long, value_delimiter = ',')]
        keys: Vec<ScriptStep>,

        /// Print results as JSON instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Summarise an index: document count, categories, tags
    Inspect {
        /// Index JSON file, or a directory containing manifest.json
        index: String,
    },
}

/// One step of a `--keys` script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Press(Key),
    Hover(usize),
}

impl ScriptStep {
    pub fn key_event(self) -> Option<KeyEvent> {
        match self {
            ScriptStep::Press(key) => Some(KeyEvent::plain(key)),
            ScriptStep::Hover(_) => None,
        }
    }
}

impl FromStr for ScriptStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let step = s.trim().to_ascii_lowercase();
        if let Some(row) = step.strip_prefix("hover:") {
            return row
                .parse()
                .map(ScriptStep::Hover)
                .map_err(|_| format!("invalid hover row {:?}", row));
        }
        match step.as_str() {
            "down" | "arrowdown" => Ok(ScriptStep::Press(Key::ArrowDown)),
            "up" | "arrowup" => Ok(ScriptStep::Press(Key::ArrowUp)),
            "enter" => Ok(ScriptStep::Press(Key::Enter)),
            "esc" | "escape" => Ok(ScriptStep::Press(Key::Escape)),
            other => Err(format!(
                "unknown key {:?} (expected down, up, enter, esc, hover:N)",
                other
            )),
        }
    }
}
