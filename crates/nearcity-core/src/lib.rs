// crates/nearcity-core/src/lib.rs

//! # nearcity-core
//!
//! An in-memory proximity index over "large cities" (name, citystate code,
//! population, coordinates). Load the dataset once, then ask for the `k`
//! nearest cities to a point, every city within a radius, or both in one
//! pass.
//!
//! ```no_run
//! use nearcity_core::prelude::*;
//!
//! let index = ProximityIndex::load_from_path(ProximityIndex::default_dataset_path())?;
//! let irvine = Coordinates::new(33.6846, -117.8265)?;
//!
//! for hit in index.find_k_nearest(&irvine, 3)? {
//!     println!("{hit}"); // "Santa Ana, CA (8km)"
//! }
//! let (within, nearest) = index.find_k_nearest_and_within_radius(&irvine, 3, 250.0)?;
//! println!("{} large cities within 250km, closest {}", within.len(), nearest[0]);
//! # Ok::<(), NearCityError>(())
//! ```

pub mod citystate;
pub mod common;
pub mod error;
pub mod geo;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod search; // ProximitySearch impl
pub mod summary;
pub mod traits;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::error::{NearCityError, Result};
pub use crate::geo::{great_circle_km, Coordinates};
pub use crate::loader::LazyIndex;
pub use crate::model::{LargeCityRecord, Nearby, ProximityIndex};
pub use crate::summary::{NearbyEntry, NearbySummary};
// Queries are trait methods; importing the trait brings them into scope.
pub use crate::traits::{ProximitySearch, MAX_COMBINED_K, MAX_K};
