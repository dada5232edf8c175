// crates/nearcity-core/src/model/mod.rs

//! # Data Model
//!
//! - [`LargeCityRecord`]: one immutable dataset entry.
//! - [`ProximityIndex`]: the loaded, deduplicated record set.
//! - [`Nearby`]: a query hit, i.e. a borrowed record plus its distance.

pub mod convert;
mod index;
mod record;

pub use index::ProximityIndex;
pub use record::{LargeCityRaw, LargeCityRecord, Nearby};
