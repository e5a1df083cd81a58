use crate::document::children;
use crate::error::CatalogError;
use crate::rank::parse_rank;
use apb_domain::info::InfoRecord;
use fxhash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

/// The shared info catalog, indexed by `info_id`.
#[derive(Debug, Clone, Default)]
pub struct InfoCatalog {
    records: FxHashMap<String, InfoRecord>,
}

impl InfoCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records, indexing each by its own `info_id`.
    ///
    /// A later record with an already indexed id replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = InfoRecord>) -> Self {
        let records = records.into_iter().map(|record| (record.info_id.clone(), record));
        Self { records: records.collect() }
    }

    /// Builds a catalog from the raw info node of a document tree.
    ///
    /// Children are indexed by their document key, which is the `info_id`; a record
    /// without an `info_id` field inherits its key. Children that are not info records
    /// are skipped with a warning, so references to them later count as dangling.
    ///
    /// # Errors
    /// Returns [`CatalogError::Snapshot`] when the node is neither a collection nor `null`.
    pub fn from_document(node: &Value) -> Result<Self, CatalogError> {
        let mut records = FxHashMap::default();

        for (key, child) in children(node, "info catalog")? {
            match InfoRecord::deserialize(child) {
                Ok(mut record) => {
                    if record.info_id.is_empty() {
                        record.info_id.clone_from(&key);
                    } else if record.info_id != key {
                        tracing::debug!(
                            key = %key,
                            info_id = %record.info_id,
                            "Info record id differs from its document key"
                        );
                    }
                    records.insert(key, record);
                },
                Err(e) => tracing::warn!(key = %key, error = %e, "Skipping malformed info record"),
            }
        }

        tracing::debug!(records = records.len(), "Info catalog loaded");
        Ok(Self { records })
    }

    #[must_use]
    pub fn get(&self, info_id: &str) -> Option<&InfoRecord> {
        self.records.get(info_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted by `info_id`.
    pub fn records(&self) -> impl Iterator<Item = &InfoRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| a.info_id.cmp(&b.info_id));
        records.into_iter()
    }

    /// Lists rank problems that would make the pipeline reject a record.
    ///
    /// Language records are skipped since their ranks are never read. The catalog itself
    /// is left untouched; this is a reporting aid for editors.
    #[must_use]
    pub fn validate(&self, language_key: &str) -> Vec<CatalogError> {
        self.records()
            .filter(|record| !record.is_language(language_key))
            .flat_map(|record| {
                [
                    parse_rank(record.order.as_ref(), &record.info_id, "order").err(),
                    parse_rank(record.item_order.as_ref(), &record.info_id, "item_order").err(),
                ]
            })
            .flatten()
            .collect()
    }
}
