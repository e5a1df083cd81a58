//! # Domain Models
//!
//! Pure data types mirroring the documents of the experience store, with `serde` as the
//! only dependency. Keep it lean: no I/O or heavy logic, just data and simple helpers.
//!
//! Upstream documents are loosely typed: fields go missing, hold `null`, or carry numbers
//! encoded as text. The models here accept all of that and leave validation to the
//! feature crates.

pub mod config;
pub mod constants;
pub mod experience;
pub mod info;
mod lenient;
pub mod rank;
