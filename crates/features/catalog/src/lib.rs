//! # Experience Catalog
//!
//! Turns the loosely typed experience documents of the store into what the listing and
//! detail pages render.
//!
//! ## Info aggregation
//!
//! Experiences do not embed their facts. Each carries a sparse map of references into a
//! shared info catalog, and the detail page needs those facts resolved, split and sorted:
//!
//! 1.  **Resolution ([`resolver`]):** references are looked up in the [`InfoCatalog`] in
//!     reference-key order. Dangling ones are dropped.
//! 2.  **Grouping ([`grouping`]):** language facts are split off; the rest are grouped by
//!     title, given icons through an injected [`IconResolver`], and sorted by their
//!     numeric ranks.
//!
//! [`InfoPipeline`] wires both stages. The whole pass is pure: it borrows its inputs,
//! reports data-quality findings to an [`InfoObserver`] instead of logging, and fails only
//! on ranks that are not integers.
//!
//! ```rust
//! use apb_catalog::{IconRegistry, InfoCatalog, SilentObserver, build_experience_info};
//! use apb_domain::experience::Experience;
//! use apb_domain::info::{InfoRecord, InfoReference};
//!
//! let catalog = InfoCatalog::from_records([InfoRecord {
//!     info_id: "i-1".into(),
//!     main_id: "languages".into(),
//!     product_info: "Español".into(),
//!     ..InfoRecord::default()
//! }]);
//! let mut experience = Experience::default();
//! experience.info.insert("a".into(), InfoReference::new("i-1", "languages"));
//!
//! let icons = IconRegistry::lucide();
//! let info = build_experience_info(&experience, &catalog, &icons, SilentObserver).unwrap();
//! assert_eq!(info.languages_spoken, ["Español"]);
//! assert!(info.additional_info.is_empty());
//! ```
//!
//! ## Listing and detail
//!
//! [`ExperienceCatalog`] normalizes experience documents and answers slug lookups and
//! searches; [`ExperienceDetail`] bundles one experience with its info, ordered
//! [`plan`] and formatted price. Both catalogs load from a [`DocumentSnapshot`].

mod catalog;
mod detail;
mod document;
mod error;
pub mod grouping;
pub mod icons;
mod listing;
pub mod observer;
mod pipeline;
pub mod plan;
mod rank;
pub mod resolver;
mod snapshot;

pub use crate::catalog::InfoCatalog;
pub use crate::detail::{ExperienceDetail, MeetingPoint};
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::grouping::{ExperienceInfo, GroupedInfo, InfoItem};
pub use crate::icons::{IconRegistry, IconResolver};
pub use crate::listing::ExperienceCatalog;
pub use crate::observer::{InfoObserver, SilentObserver, TracingObserver};
pub use crate::pipeline::{InfoPipeline, build_experience_info};
pub use crate::snapshot::DocumentSnapshot;
pub use apb_domain as domain;
