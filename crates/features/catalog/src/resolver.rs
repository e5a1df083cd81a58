//! Reference resolution: experience info pointers -> catalog records.

use crate::catalog::InfoCatalog;
use crate::observer::InfoObserver;
use apb_domain::info::{InfoRecord, InfoReference};
use std::collections::BTreeMap;

/// Resolves an experience's info references against the catalog.
///
/// Output order is the iteration order of `references` (ascending reference key). A
/// reference whose `info_id` is not in the catalog is dropped and reported through
/// `observer`; it never fails the call. No references, or an empty catalog, give an empty
/// result.
pub fn resolve<'c, O>(
    references: &BTreeMap<String, InfoReference>,
    catalog: &'c InfoCatalog,
    observer: &O,
) -> Vec<&'c InfoRecord>
where
    O: InfoObserver + ?Sized,
{
    references
        .iter()
        .filter_map(|(key, reference)| {
            let record = catalog.get(&reference.info_id);
            if record.is_none() {
                observer.dangling_reference(key, reference);
            }
            record
        })
        .collect()
}
