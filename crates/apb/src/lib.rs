//! Facade crate for Appueblear features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `apb` with the desired feature flags (`catalog` is on by default).
//! - Call [`init`] with the loaded [`domain::config::AppConfig`] to get the catalogs.

pub use apb_domain as domain;
pub use apb_kernel as kernel;

#[cfg(feature = "catalog")]
pub use apb_catalog as catalog;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "catalog")]
        "catalog",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Both catalogs of one project, read from the same snapshot.
#[cfg(feature = "catalog")]
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub experiences: catalog::ExperienceCatalog,
    pub info: catalog::InfoCatalog,
}

/// Loads the configured snapshot and extracts both catalogs.
///
/// # Errors
/// Returns an error if the snapshot cannot be read or parsed, or if one of the catalog
/// nodes is not a keyed collection.
#[cfg(feature = "catalog")]
pub fn init(config: &domain::config::AppConfig) -> Result<Catalogs, catalog::CatalogError> {
    let snapshot = catalog::DocumentSnapshot::load(&config.catalog.snapshot)?;
    let catalogs = Catalogs {
        experiences: snapshot.experiences(&config.catalog)?,
        info: snapshot.info_catalog(&config.catalog)?,
    };

    tracing::info!(
        project = %config.catalog.project_id,
        experiences = catalogs.experiences.len(),
        info_records = catalogs.info.len(),
        "Catalogs initialized"
    );
    Ok(catalogs)
}
