use serde::Deserialize;
use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Manifest versions this crate knows how to read.
pub const SUPPORTED_MANIFEST_VERSION: u32 = 1;

/// File name looked up when a directory is given as an index source.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` of an index directory: the documents, in store order.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}

impl InputManifest {
    pub fn parse(json: &str) -> Result<Self> {
        let manifest: InputManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the version and that every document path stays inside the
    /// index directory.
    pub fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_MANIFEST_VERSION {
            return Err(Error::Manifest(format!(
                "unsupported version {} (expected {})",
                self.version, SUPPORTED_MANIFEST_VERSION
            )));
        }
        for document in &self.documents {
            let escapes = Path::new(document)
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
            if document.is_empty() || escapes {
                return Err(Error::Manifest(format!(
                    "document path {:?} must be relative to the index directory",
                    document
                )));
            }
        }
        Ok(())
    }
}
