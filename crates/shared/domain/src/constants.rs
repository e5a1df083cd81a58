//! Well-known keys of the experience document store.

/// `main_id` value marking an info record as a spoken language.
pub const LANGUAGES: &str = "languages";

/// Project whose data tree holds the published catalog.
pub const DEFAULT_PROJECT_ID: &str = "proj_rsK6jYGJzKf9mkbruz2oe6";

/// Child of `data` holding experience documents.
pub const EXPERIENCES_NODE: &str = "experiences";

/// Child of `data` holding the shared info catalog.
pub const INFO_NODE: &str = "z_btc_info";

/// Placeholder rendered for prices that are absent or not numeric.
pub const PRICE_UNAVAILABLE: &str = "N/A";
