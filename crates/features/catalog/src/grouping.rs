//! Grouping & ordering of resolved info records into display sections.

use crate::error::CatalogError;
use crate::icons::IconResolver;
use crate::observer::InfoObserver;
use crate::rank::parse_rank;
use apb_domain::info::InfoRecord;
use fxhash::FxHashMap;
use serde::Serialize;
use std::collections::hash_map::Entry;

/// Display-ready info of one experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInfo<I> {
    /// `product_info` of every language record, in resolution order, duplicates kept.
    pub languages_spoken: Vec<String>,
    /// Non-language records grouped by title; ascending by `order`.
    pub additional_info: Vec<GroupedInfo<I>>,
}

impl<I> ExperienceInfo<I> {
    /// True when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages_spoken.is_empty() && self.additional_info.is_empty()
    }
}

impl<I> Default for ExperienceInfo<I> {
    fn default() -> Self {
        Self { languages_spoken: Vec::new(), additional_info: Vec::new() }
    }
}

/// A titled section of info items; items ascend by `item_order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedInfo<I> {
    pub title: String,
    pub order: i64,
    pub items: Vec<InfoItem<I>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoItem<I> {
    pub icon: I,
    pub product_info: String,
    pub item_order: i64,
}

/// Partitions and groups resolved records.
///
/// 1. Records whose `main_id` is `language_key` only feed `languages_spoken`.
/// 2. Every other record has both ranks parsed first; a rank that is missing or not an
///    integer fails the whole call with [`CatalogError::MalformedOrder`].
/// 3. The first record of a title creates its group and fixes the group `order`. Later
///    records of that title with another `order` are reported as rank conflicts.
/// 4. Records whose icon does not resolve are dropped (and reported); groups left empty
///    are not emitted.
/// 5. Items sort by `item_order`, groups by `order`; both sorts are stable, so ties keep
///    resolution order.
///
/// # Errors
/// Returns [`CatalogError::MalformedOrder`] for the first non-language record with an
/// unparseable rank.
pub fn group<'a, R, O>(
    records: impl IntoIterator<Item = &'a InfoRecord>,
    icons: &R,
    observer: &O,
    language_key: &str,
) -> Result<ExperienceInfo<R::Icon>, CatalogError>
where
    R: IconResolver + ?Sized,
    O: InfoObserver + ?Sized,
{
    let mut languages_spoken = Vec::new();
    let mut groups: Vec<GroupedInfo<R::Icon>> = Vec::new();
    let mut by_title: FxHashMap<&'a str, usize> = FxHashMap::default();

    for record in records {
        if record.is_language(language_key) {
            languages_spoken.push(record.product_info.clone());
            continue;
        }

        let order = parse_rank(record.order.as_ref(), &record.info_id, "order")?;
        let item_order = parse_rank(record.item_order.as_ref(), &record.info_id, "item_order")?;

        let index = match by_title.entry(record.product_info_title.as_str()) {
            Entry::Occupied(slot) => {
                let index = *slot.get();
                let kept = groups[index].order;
                if kept != order {
                    observer.rank_conflict(record, kept, order);
                }
                index
            },
            Entry::Vacant(slot) => {
                groups.push(GroupedInfo {
                    title: record.product_info_title.clone(),
                    order,
                    items: Vec::new(),
                });
                *slot.insert(groups.len() - 1)
            },
        };

        let Some(icon) = icons.resolve(&record.icon) else {
            observer.unresolved_icon(record);
            continue;
        };

        groups[index].items.push(InfoItem {
            icon,
            product_info: record.product_info.clone(),
            item_order,
        });
    }

    groups.retain(|group| !group.items.is_empty());
    for group in &mut groups {
        group.items.sort_by_key(|item| item.item_order);
    }
    groups.sort_by_key(|group| group.order);

    Ok(ExperienceInfo { languages_spoken, additional_info: groups })
}
