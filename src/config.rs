// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! The palette's behaviour hangs on a handful of presentation constants: the
//! two-character minimum before matching starts, the ten-result cap, the
//! "Other" group label. They are defaults here rather than literals in the
//! matcher so hosts can tune them without forking.
//!
//! Sources, lowest precedence first: `Default`, a JSON/JS options object
//! (camelCase, every field optional), then `DOCSIFT_*` environment variables
//! via [`SearchConfig::from_env`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::search::keys::Shortcut;

pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Other";
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

const ENV_MIN_QUERY_CHARS: &str = "DOCSIFT_MIN_QUERY_CHARS";
const ENV_MAX_RESULTS: &str = "DOCSIFT_MAX_RESULTS";
const ENV_FALLBACK_CATEGORY: &str = "DOCSIFT_FALLBACK_CATEGORY";
const ENV_EXCERPT_CHARS: &str = "DOCSIFT_EXCERPT_CHARS";
const ENV_FOLD_DIACRITICS: &str = "DOCSIFT_FOLD_DIACRITICS";
const ENV_SHORTCUT: &str = "DOCSIFT_SHORTCUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Trimmed queries shorter than this (in characters) match nothing.
    pub min_query_chars: usize,
    /// Upper bound on the number of matches.
    pub max_results: usize,
    /// Group label for entries without a category.
    pub fallback_category: String,
    /// Length of the excerpt cut from `content` when an entry has none.
    pub excerpt_chars: usize,
    /// Strip diacritics from query and fields before matching.
    pub fold_diacritics: bool,
    /// Combination that opens the palette.
    pub shortcut: Shortcut,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: DEFAULT_MAX_RESULTS,
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            fold_diacritics: false,
            shortcut: Shortcut::default(),
        }
    }
}

impl SearchConfig {
    /// Defaults overlaid with `DOCSIFT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|name| std::env::var(name).ok())
    }

    /// Overlay variables from `lookup` onto `self`.
    ///
    /// Unparsable numbers fall back to the current value; values that parse
    /// but can't work (a zero result cap, a malformed shortcut) are errors.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(n) = read(ENV_MIN_QUERY_CHARS).and_then(|raw| raw.parse().ok()) {
            self.min_query_chars = n;
        }
        if let Some(n) = read(ENV_MAX_RESULTS).and_then(|raw| raw.parse().ok()) {
            self.max_results = n;
        }
        if let Some(label) = read(ENV_FALLBACK_CATEGORY) {
            self.fallback_category = label;
        }
        if let Some(n) = read(ENV_EXCERPT_CHARS).and_then(|raw| raw.parse().ok()) {
            self.excerpt_chars = n;
        }
        if let Some(raw) = read(ENV_FOLD_DIACRITICS) {
            self.fold_diacritics = parse_flag(&raw);
        }
        if let Some(raw) = read(ENV_SHORTCUT) {
            self.shortcut = raw.parse()?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reject configurations the palette can't use.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::Config(format!(
                "{} must be at least 1",
                ENV_MAX_RESULTS
            )));
        }
        if self.fallback_category.trim().is_empty() {
            return Err(Error::Config("fallback category must not be blank".to_string()));
        }
        Ok(())
    }

    pub fn with_min_query_chars(mut self, chars: usize) -> Self {
        self.min_query_chars = chars;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_fallback_category(mut self, label: impl Into<String>) -> Self {
        self.fallback_category = label.into();
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    pub fn with_shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = shortcut;
        self
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enabled"
    )
}
