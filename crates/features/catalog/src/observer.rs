//! Diagnostics emitted while aggregating experience info.
//!
//! The pipeline itself never logs. Everything worth reporting about upstream data quality
//! goes through an [`InfoObserver`] supplied by the caller, so tests can run silently or
//! record events, and applications can route them to `tracing`.

use apb_domain::info::{InfoRecord, InfoReference};

/// Receives non-fatal data-quality events from the pipeline. All methods default to no-ops.
pub trait InfoObserver {
    /// A reference points at an `info_id` absent from the catalog; it was dropped.
    fn dangling_reference(&self, key: &str, reference: &InfoReference) {
        let _ = (key, reference);
    }

    /// A record's icon name is not in the registry; the item was dropped from its group.
    fn unresolved_icon(&self, record: &InfoRecord) {
        let _ = record;
    }

    /// A record disagrees with the `order` its group was created with; the first one was kept.
    fn rank_conflict(&self, record: &InfoRecord, kept: i64, found: i64) {
        let _ = (record, kept, found);
    }
}

impl<O: InfoObserver + ?Sized> InfoObserver for &O {
    fn dangling_reference(&self, key: &str, reference: &InfoReference) {
        (**self).dangling_reference(key, reference);
    }

    fn unresolved_icon(&self, record: &InfoRecord) {
        (**self).unresolved_icon(record);
    }

    fn rank_conflict(&self, record: &InfoRecord, kept: i64, found: i64) {
        (**self).rank_conflict(record, kept, found);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl InfoObserver for SilentObserver {}

/// Forwards events to `tracing`: dangling references at `debug`, the rest at `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InfoObserver for TracingObserver {
    fn dangling_reference(&self, key: &str, reference: &InfoReference) {
        tracing::debug!(
            key,
            info_id = %reference.info_id,
            main_id = %reference.main_id,
            "Dropping dangling info reference"
        );
    }

    fn unresolved_icon(&self, record: &InfoRecord) {
        tracing::warn!(
            info_id = %record.info_id,
            icon = %record.icon,
            title = %record.product_info_title,
            "Icon not found in registry, skipping item"
        );
    }

    fn rank_conflict(&self, record: &InfoRecord, kept: i64, found: i64) {
        tracing::warn!(
            info_id = %record.info_id,
            title = %record.product_info_title,
            kept,
            found,
            "Group order disagrees with the record that created the group"
        );
    }
}
