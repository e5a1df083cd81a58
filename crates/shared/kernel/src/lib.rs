//! Kernel utilities shared across features and applications.
//! Keep this crate lightweight: layered config loading and presentation helpers that
//! have no business logic of their own.
//!
//! ## Price formatting
//! ```rust
//! use apb_kernel::format::format_price;
//! use apb_kernel::domain::experience::Price;
//!
//! assert_eq!(format_price(Some(&Price::Amount(140_000.0))), "$140.000");
//! assert_eq!(format_price(None), "N/A");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use apb_kernel::config::load_config;
//! use apb_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("appueblear.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod format;

pub use apb_domain as domain;
