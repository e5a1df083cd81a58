//! The experience listing: normalization, lookup by slug and search.

use crate::document::children;
use crate::error::CatalogError;
use apb_domain::experience::Experience;
use serde::Deserialize;
use serde_json::Value;

/// Listable experiences in document key order.
#[derive(Debug, Clone, Default)]
pub struct ExperienceCatalog {
    experiences: Vec<Experience>,
}

impl ExperienceCatalog {
    /// Keeps only listable experiences (see [`Experience::is_listable`]).
    pub fn new(experiences: impl IntoIterator<Item = Experience>) -> Self {
        Self { experiences: experiences.into_iter().filter(Experience::is_listable).collect() }
    }

    /// Normalizes the raw experiences node of a document tree.
    ///
    /// Wrongly typed optional fields fall back to their empty values. Children that are
    /// not objects, or lack a product id, name or slug, are left out with a debug event.
    ///
    /// # Errors
    /// Returns [`CatalogError::Snapshot`] when the node is neither a collection nor `null`.
    pub fn from_document(node: &Value) -> Result<Self, CatalogError> {
        let mut experiences = Vec::new();

        for (key, child) in children(node, "experiences")? {
            match Experience::deserialize(child) {
                Ok(experience) if experience.is_listable() => experiences.push(experience),
                Ok(_) => tracing::debug!(key = %key, "Skipping experience without identity fields"),
                Err(e) => tracing::debug!(key = %key, error = %e, "Skipping malformed experience"),
            }
        }

        tracing::debug!(experiences = experiences.len(), "Experiences loaded");
        Ok(Self { experiences })
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Experience> {
        self.experiences.iter().find(|experience| experience.slug == slug)
    }

    /// Case-insensitive substring search over the name, the location fields and the
    /// composed [`Experience::location`] (`"San Francisco, Cundinamarca"`).
    ///
    /// A blank term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Experience> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.experiences.iter().collect();
        }

        self.experiences
            .iter()
            .filter(|experience| {
                // The composed location already covers zone_state.
                let location = experience.location();
                [&experience.name, &experience.zone, &experience.state, &location]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }
}
