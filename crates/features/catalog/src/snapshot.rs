//! In-memory copy of an exported document tree.

use crate::catalog::InfoCatalog;
use crate::error::{CatalogError, CatalogErrorExt};
use crate::listing::ExperienceCatalog;
use apb_domain::config::CatalogConfig;
use serde_json::Value;
use std::fs;
use std::path::Path;

static MISSING: Value = Value::Null;

/// A fully materialized JSON export of the document store.
///
/// Both catalogs are read out of the same tree; nothing is fetched incrementally.
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    root: Value,
}

impl DocumentSnapshot {
    #[must_use]
    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Reads and parses a JSON export from disk.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the file cannot be read and [`CatalogError::Serde`]
    /// if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).context(format!("Reading {}", path.display()))?;
        let root = serde_json::from_str(&raw).context(format!("Parsing {}", path.display()))?;

        tracing::info!(path = %path.display(), "Document snapshot loaded");
        Ok(Self { root })
    }

    /// The node at a JSON pointer, or `Null` (with a warning) when absent.
    #[must_use]
    pub fn node(&self, pointer: &str) -> &Value {
        self.root.pointer(pointer).unwrap_or_else(|| {
            tracing::warn!(pointer, "Snapshot node not found, treating it as empty");
            &MISSING
        })
    }

    /// # Errors
    /// Returns [`CatalogError::Snapshot`] when the experiences node has the wrong shape.
    pub fn experiences(&self, config: &CatalogConfig) -> Result<ExperienceCatalog, CatalogError> {
        ExperienceCatalog::from_document(self.node(&config.experiences_pointer()))
    }

    /// # Errors
    /// Returns [`CatalogError::Snapshot`] when the info node has the wrong shape.
    pub fn info_catalog(&self, config: &CatalogConfig) -> Result<InfoCatalog, CatalogError> {
        InfoCatalog::from_document(self.node(&config.info_pointer()))
    }
}
