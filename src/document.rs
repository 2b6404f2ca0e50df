//! Persisted document model.
//!
//! A [`Document`] is the pure-data projection of a scene: the real-world
//! scale, the item payloads in draw order (no ids, no transient state), and
//! the rulers. Decoding is lenient about optional fields - text defaults
//! and flags fill in - but strict about structure: an unknown item kind is
//! an error reported to the caller, not a silent drop.

use crate::constants::DEFAULT_METERS_PER_GRID;
use crate::types::{ItemContent, Ruler};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur reading or writing a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_meters_per_grid")]
    pub meters_per_grid: f32,
    #[serde(default)]
    pub items: Vec<ItemContent>,
    #[serde(default)]
    pub rulers: Vec<Ruler>,
}

fn default_meters_per_grid() -> f32 {
    DEFAULT_METERS_PER_GRID
}

impl Default for Document {
    fn default() -> Self {
        Self {
            meters_per_grid: DEFAULT_METERS_PER_GRID,
            items: Vec::new(),
            rulers: Vec::new(),
        }
    }
}

impl Document {
    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> DocumentResult<Document> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save_to_path(&self, path: &Path) -> DocumentResult<()> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), items = self.items.len(), "saved document");
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> DocumentResult<Document> {
        let doc = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), items = doc.items.len(), "loaded document");
        Ok(doc)
    }
}
