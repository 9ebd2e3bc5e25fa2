// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading an Index Store from disk.
//!
//! Two layouts. A single JSON file holding every entry (what most static-site
//! generators emit), or a directory with a `manifest.json` listing one file per
//! entry (what you get when each page's entry is written next to the page).
//!
//! Directory loads parse documents in parallel with rayon when the `parallel`
//! feature is on. `collect` on an indexed parallel iterator keeps input order,
//! so the store comes out in manifest order no matter which file finishes
//! first. Store order is search-result order, so this matters.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::{Error, Result};
use crate::types::DocumentEntry;

use super::manifest::{InputManifest, MANIFEST_FILE};
use super::IndexStore;

/// Progress callback: `(documents loaded so far, total)`.
pub type LoadProgress<'a> = &'a (dyn Fn(usize, usize) + Sync);

/// Load a store from a JSON file or a manifest directory.
pub fn load_path(path: &Path) -> Result<IndexStore> {
    load_path_reporting(path, &|_, _| {})
}

/// [`load_path`], advancing `progress` as manifest documents are parsed.
#[cfg(feature = "parallel")]
pub fn load_path_with_progress(path: &Path, progress: &ProgressBar) -> Result<IndexStore> {
    load_path_reporting(path, &|done, total| {
        progress.set_length(total as u64);
        progress.set_position(done as u64);
        if done % 10 == 0 || done == total {
            progress.set_message(format!("{}/{}", done, total));
        }
    })
}

pub fn load_path_reporting(path: &Path, progress: LoadProgress<'_>) -> Result<IndexStore> {
    let store = if path.is_dir() {
        let manifest_path = path.join(MANIFEST_FILE);
        let manifest = InputManifest::parse(&fs::read_to_string(&manifest_path)?)?;
        let entries = load_documents(path, &manifest, progress)?;
        IndexStore::new(entries)?
    } else {
        let store = IndexStore::from_json_str(&fs::read_to_string(path)?)?;
        progress(store.len(), store.len());
        store
    };

    log::info!("loaded {} documents from {}", store.len(), path.display());
    Ok(store)
}

/// Read and parse every document the manifest lists, in manifest order.
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: LoadProgress<'_>,
) -> Result<Vec<DocumentEntry>> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let load_one = |filename: &String| -> Result<DocumentEntry> {
        let path = input_dir.join(filename);
        let content = fs::read_to_string(&path).map_err(|e| {
            Error::Manifest(format!("failed to read {}: {}", path.display(), e))
        })?;
        let entry = serde_json::from_str::<DocumentEntry>(&content).map_err(|e| {
            log::warn!("failed to parse {}: {}", path.display(), e);
            Error::Manifest(format!("invalid JSON in {}: {}", filename, e))
        })?;

        let done = counter.fetch_add(1, Ordering::Relaxed) + 1;
        progress(done, total);
        Ok(entry)
    };

    #[cfg(feature = "parallel")]
    let entries = manifest.documents.par_iter().map(load_one).collect();
    #[cfg(not(feature = "parallel"))]
    let entries = manifest.documents.iter().map(load_one).collect();

    entries
}
