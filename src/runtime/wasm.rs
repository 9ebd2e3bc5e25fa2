// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the docsift palette.
//!
//! This is the browser-facing API. The page owns the DOM; we own the search
//! state. The page forwards input changes and key presses, reads back results
//! to render, and passes a `navigate` function that we call on commit.
//!
//! # Usage
//!
//! ```js
//! const palette = new DocsiftPalette(entries, { maxResults: 10 });
//! const navigate = (url) => router.push(url);
//!
//! window.addEventListener("keydown", (e) => {
//!     const outcome = palette.keyDown(e.key, e.ctrlKey, e.metaKey, e.altKey, e.shiftKey, navigate);
//!     if (outcome !== "ignored") e.preventDefault();
//!     render();
//! });
//! input.addEventListener("input", (e) => { palette.setQuery(e.target.value); render(); });
//!
//! function render() {
//!     for (const group of palette.groups()) { /* group.label, group.entries */ }
//!     highlight(palette.cursor()); // -1 when nothing is highlighted
//! }
//! ```
//!
//! Everything runs on the UI thread. There is nothing asynchronous to await.

use crate::config::SearchConfig;
use crate::search::keys::{KeyEvent, Modifiers};
use crate::search::session::{KeyOutcome, Navigator, Palette};
use crate::store::IndexStore;
use crate::types::DocumentEntry;
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Result row for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsResult<'a> {
    title: &'a str,
    url: &'a str,
    excerpt: String,
    category: &'a str,
}

#[derive(Serialize)]
struct JsGroup<'a> {
    label: &'a str,
    entries: Vec<JsResult<'a>>,
}

/// Adapts a JS function to `Navigator`. Exceptions thrown by the host's
/// router are the host's problem; we log and carry on closing the palette.
struct JsNavigator<'f>(&'f Function);

impl Navigator for JsNavigator<'_> {
    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.0.call1(&JsValue::NULL, &JsValue::from_str(url)) {
            log::warn!("navigate callback threw for {}: {:?}", url, err);
        }
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM palette - thin wrapper around `Palette`.
#[wasm_bindgen]
pub struct DocsiftPalette {
    palette: Palette,
}

#[wasm_bindgen]
impl DocsiftPalette {
    /// Create a closed palette.
    ///
    /// `entries`: array of `{id, title, content, excerpt?, category?, tags?, url}`,
    /// or `null`/`undefined` for an empty index. Entries that do not parse,
    /// or that repeat an id, leave the palette working over an empty index.
    /// `options`: optional `{minQueryChars, maxResults, fallbackCategory,
    /// excerptChars, foldDiacritics, shortcut}`. Bad options throw.
    #[wasm_bindgen(constructor)]
    pub fn new(entries: JsValue, options: JsValue) -> Result<DocsiftPalette, JsValue> {
        let store = if entries.is_undefined() || entries.is_null() {
            IndexStore::empty()
        } else {
            match serde_wasm_bindgen::from_value::<serde_json::Value>(entries) {
                Ok(value) => IndexStore::from_json_value_or_empty(value),
                Err(err) => {
                    log::warn!("ignoring index store that is not JSON data: {}", err);
                    IndexStore::empty()
                }
            }
        };
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };
        config.validate().map_err(js_error)?;

        Ok(DocsiftPalette {
            palette: Palette::new(&store, config),
        })
    }

    /// Number of documents in the index.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.palette.store().len()
    }

    #[wasm_bindgen]
    pub fn open(&mut self) -> bool {
        self.palette.open()
    }

    /// Close button or backdrop click.
    #[wasm_bindgen]
    pub fn close(&mut self) -> bool {
        self.palette.dismiss()
    }

    #[wasm_bindgen(js_name = "isOpen")]
    pub fn is_open(&self) -> bool {
        self.palette.is_open()
    }

    #[wasm_bindgen(js_name = "setQuery")]
    pub fn set_query(&mut self, query: &str) {
        self.palette.set_query(query);
    }

    #[wasm_bindgen]
    pub fn query(&self) -> String {
        self.palette.query().to_string()
    }

    /// Forward a `keydown`. Returns what happened: `"opened"`, `"moved"`,
    /// `"committed"`, `"closed"` or `"ignored"`.
    #[wasm_bindgen(js_name = "keyDown")]
    pub fn key_down(
        &mut self,
        key: &str,
        ctrl: bool,
        meta: bool,
        alt: bool,
        shift: bool,
        navigate: &Function,
    ) -> String {
        let event = KeyEvent::from_dom_key(
            key,
            Modifiers {
                ctrl,
                meta,
                alt,
                shift,
            },
        );
        let outcome = self.palette.handle_key(event, &mut JsNavigator(navigate));
        outcome.name().to_string()
    }

    /// Pointer entered result `row`.
    #[wasm_bindgen]
    pub fn hover(&mut self, row: usize) -> bool {
        self.palette.hover(row)
    }

    /// Result `row` was clicked. Returns whether navigation happened.
    #[wasm_bindgen]
    pub fn click(&mut self, row: usize, navigate: &Function) -> bool {
        matches!(
            self.palette.click(row, &mut JsNavigator(navigate)),
            KeyOutcome::Committed(_)
        )
    }

    /// Highlighted row, -1 when none.
    #[wasm_bindgen]
    pub fn cursor(&self) -> i32 {
        self.palette.cursor().as_index() as i32
    }

    /// Flat result list in match order.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<JsResult<'_>> = self
            .palette
            .matches()
            .into_iter()
            .map(|entry| self.to_js_result(entry))
            .collect();
        to_value(&rows).map_err(js_error)
    }

    /// Results grouped by category: `[{label, entries: [...]}, ...]`.
    #[wasm_bindgen]
    pub fn groups(&self) -> Result<JsValue, JsValue> {
        let groups: Vec<JsGroup<'_>> = self
            .palette
            .groups()
            .into_iter()
            .map(|group| JsGroup {
                label: group.label,
                entries: group
                    .entries
                    .into_iter()
                    .map(|entry| self.to_js_result(entry))
                    .collect(),
            })
            .collect();
        to_value(&groups).map_err(js_error)
    }

    fn to_js_result<'a>(&'a self, entry: &'a DocumentEntry) -> JsResult<'a> {
        JsResult {
            title: &entry.title,
            url: &entry.url,
            excerpt: self.palette.excerpt_for(entry).into_owned(),
            category: entry.category_or(&self.palette.config().fallback_category),
        }
    }
}
