use crate::info::InfoReference;
use crate::lenient::{count, float, keyed, or_default, text};
use crate::rank::RawRank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bookable experience document.
///
/// Every field except the identity triple (`product_id`, `name`, `slug`) is optional
/// upstream and falls back to its empty value here, including when it holds a value of
/// the wrong type. Numeric fields also accept numeric text (`"12"`, `"4.97"`).
///
/// Keyed children (`plan`, `info`, ...) are `BTreeMap`s, so they enumerate in ascending
/// key order like the document store does. They may arrive as objects or, when every key
/// is a small integer, as arrays with `null` holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "text")]
    pub product_id: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub slug: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "text")]
    pub image: String,
    #[serde(deserialize_with = "or_default")]
    pub price: Option<Price>,
    #[serde(deserialize_with = "text")]
    pub zone: String,
    #[serde(deserialize_with = "text")]
    pub state: String,
    #[serde(deserialize_with = "text")]
    pub project_name: String,
    #[serde(deserialize_with = "text")]
    pub zone_state: String,
    #[serde(deserialize_with = "text")]
    pub category: String,

    #[serde(deserialize_with = "text")]
    pub meeting_point: String,
    #[serde(deserialize_with = "text")]
    pub meeting_point_details: String,
    #[serde(deserialize_with = "float")]
    pub meeting_point_latitude: f64,
    #[serde(deserialize_with = "float")]
    pub meeting_point_longitude: f64,
    #[serde(deserialize_with = "text")]
    pub meeting_time: String,
    #[serde(deserialize_with = "text")]
    pub address: String,
    #[serde(deserialize_with = "text")]
    pub address_details: String,
    #[serde(deserialize_with = "text")]
    pub address_zone: String,

    #[serde(deserialize_with = "text")]
    pub expectations: String,
    #[serde(deserialize_with = "text")]
    pub includes_food: String,
    #[serde(deserialize_with = "text")]
    pub duration: String,
    #[serde(deserialize_with = "text")]
    pub duration_type: String,
    #[serde(deserialize_with = "count")]
    pub maximum_visitors: u32,

    #[serde(deserialize_with = "keyed")]
    pub attraction_cards: BTreeMap<String, AttractionCard>,
    #[serde(deserialize_with = "keyed")]
    pub expectation_images: BTreeMap<String, ExpectationImage>,
    #[serde(deserialize_with = "keyed")]
    pub plan: BTreeMap<String, PlanEntry>,
    /// References into the info catalog, keyed by an arbitrary document key.
    #[serde(deserialize_with = "keyed")]
    pub info: BTreeMap<String, InfoReference>,
}

impl Experience {
    /// Whether the identity fields needed for listing and routing are present.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        [&self.product_id, &self.name, &self.slug].iter().all(|field| !field.trim().is_empty())
    }

    /// Human-readable location, e.g. `"San Francisco, Cundinamarca"`.
    #[must_use]
    pub fn location(&self) -> String {
        if !self.zone_state.is_empty() {
            return self.zone_state.clone();
        }
        match (self.zone.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}, {}", self.zone, self.state),
            (false, true) => self.zone.clone(),
            (true, _) => self.state.clone(),
        }
    }
}

/// Price as entered upstream: usually a number, sometimes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractionCard {
    #[serde(deserialize_with = "text")]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectationImage {
    #[serde(deserialize_with = "text")]
    pub image: String,
}

/// One itinerary step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanEntry {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    pub order: Option<RawRank>,
}
