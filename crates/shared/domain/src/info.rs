use crate::lenient::{or_default, text};
use crate::rank::RawRank;
use serde::{Deserialize, Serialize};

/// One entry of the shared info catalog (`z_btc_info`), keyed by [`InfoRecord::info_id`].
///
/// Records are grouped for display by `product_info_title`; several records share a title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoRecord {
    #[serde(deserialize_with = "text")]
    pub info_id: String,
    /// Category key. [`crate::constants::LANGUAGES`] marks spoken languages.
    #[serde(deserialize_with = "text")]
    pub main_id: String,
    /// Display group title.
    #[serde(deserialize_with = "text")]
    pub product_info_title: String,
    /// The human-readable fact.
    #[serde(deserialize_with = "text")]
    pub product_info: String,
    /// Symbolic icon name.
    #[serde(deserialize_with = "text")]
    pub icon: String,
    /// Rank of the record's group.
    pub order: Option<RawRank>,
    /// Rank of the record inside its group.
    pub item_order: Option<RawRank>,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub info_main_title: Option<String>,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub info_name: Option<String>,
    #[serde(deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub main_name: Option<String>,
}

impl InfoRecord {
    #[must_use]
    pub fn is_language(&self, language_key: &str) -> bool {
        self.main_id == language_key
    }
}

/// A pointer from an experience into the info catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoReference {
    #[serde(deserialize_with = "text")]
    pub info_id: String,
    #[serde(deserialize_with = "text")]
    pub main_id: String,
}

impl InfoReference {
    pub fn new(info_id: impl Into<String>, main_id: impl Into<String>) -> Self {
        Self { info_id: info_id.into(), main_id: main_id.into() }
    }
}
