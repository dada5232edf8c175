//! nearcity prelude: bring common types and traits into scope.

pub use crate::citystate::{from_citystate, to_citystate, validate_citystate};
pub use crate::error::{NearCityError, Result};
pub use crate::geo::Coordinates;
pub use crate::loader::LazyIndex;
pub use crate::model::{LargeCityRecord, Nearby, ProximityIndex};
pub use crate::summary::{NearbySummary, DEFAULT_NEARBY_K, DEFAULT_NEARBY_RADIUS_KM};
pub use crate::traits::ProximitySearch;
