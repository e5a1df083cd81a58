use crate::constants::{DEFAULT_PROJECT_ID, EXPERIENCES_NODE, INFO_NODE, LANGUAGES};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the catalog lives inside an exported document tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON export of the document store.
    pub snapshot: PathBuf,
    pub project_id: String,
    pub experiences_node: String,
    pub info_node: String,
    /// `main_id` that marks language facts.
    pub language_key: String,
}

impl CatalogConfig {
    /// JSON pointer of the experiences node.
    #[must_use]
    pub fn experiences_pointer(&self) -> String {
        format!("/projects/{}/data/{}", self.project_id, self.experiences_node)
    }

    /// JSON pointer of the info catalog node.
    #[must_use]
    pub fn info_pointer(&self) -> String {
        format!("/projects/{}/data/{}", self.project_id, self.info_node)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Enables rolling file output when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
            project_id: DEFAULT_PROJECT_ID.to_owned(),
            experiences_node: EXPERIENCES_NODE.to_owned(),
            info_node: INFO_NODE.to_owned(),
            language_key: LANGUAGES.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
