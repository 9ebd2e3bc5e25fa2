// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges of the crate.
//!
//! Searching never fails. A short query, an empty store, or a query that
//! matches nothing are all ordinary outcomes that produce an empty result
//! list. The only things that can go wrong are getting documents *into* a
//! store (I/O, JSON, manifests, duplicate ids) and reading configuration.

use thiserror::Error;

use crate::types::DocId;

/// Result type for docsift operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The manifest is readable but says something we can't honour.
    #[error("invalid manifest: {0}")]
    Manifest(String),

    /// Two entries in one store share an id.
    #[error("duplicate document id {0} in index store")]
    DuplicateId(DocId),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Stable machine-readable code, used by the browser binding.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Manifest(_) => "INVALID_MANIFEST",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::Config(_) => "INVALID_CONFIG",
        }
    }
}
