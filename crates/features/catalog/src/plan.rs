//! Itinerary ordering.

use crate::error::CatalogError;
use crate::rank::parse_rank;
use apb_domain::experience::Experience;
use serde::Serialize;

/// One itinerary step, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub title: String,
    pub description: String,
    pub order: i64,
}

/// Returns the experience's plan sorted by `order`, ties in key order.
///
/// # Errors
/// Returns [`CatalogError::MalformedOrder`] naming the plan key when a step's `order` is
/// missing or not an integer.
pub fn ordered_plan(experience: &Experience) -> Result<Vec<PlanStep>, CatalogError> {
    let mut steps = experience
        .plan
        .iter()
        .map(|(key, entry)| {
            Ok(PlanStep {
                title: entry.title.clone(),
                description: entry.description.clone(),
                order: parse_rank(entry.order.as_ref(), key, "order")?,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    steps.sort_by_key(|step| step.order);
    Ok(steps)
}

/// Non-empty attraction reasons in key order.
#[must_use]
pub fn attraction_reasons(experience: &Experience) -> Vec<String> {
    experience
        .attraction_cards
        .values()
        .map(|card| card.reason.trim())
        .filter(|reason| !reason.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Non-empty expectation image URLs in key order.
#[must_use]
pub fn expectation_images(experience: &Experience) -> Vec<String> {
    experience
        .expectation_images
        .values()
        .map(|image| image.image.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_owned)
        .collect()
}
