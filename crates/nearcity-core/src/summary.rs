// crates/nearcity-core/src/summary.rs

//! Display fields for a city detail page: the "Closest Major Cities" line
//! and the "Nearby Major Cities" count.

use crate::model::Nearby;
use serde::{Deserialize, Serialize};

/// Default number of closest cities shown on a detail page.
pub const DEFAULT_NEARBY_K: usize = 3;
/// Default radius for the nearby count, in kilometers.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 250.0;

/// Owned, serializable copy of a [`Nearby`] hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyEntry {
    pub display_name: String,
    pub citystate_code: String,
    pub population: u64,
    pub distance_km: f64,
}

impl From<&Nearby<'_>> for NearbyEntry {
    fn from(hit: &Nearby<'_>) -> Self {
        NearbyEntry {
            display_name: hit.record.display_name.clone(),
            citystate_code: hit.record.citystate_code.clone(),
            population: hit.record.population,
            distance_km: hit.distance_km,
        }
    }
}

/// Result of a combined query, detached from the index so it can be cached
/// or serialized by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySummary {
    /// Closest cities, ascending by distance.
    pub closest: Vec<NearbyEntry>,
    /// Every city within `radius_km`.
    pub nearby: Vec<NearbyEntry>,
    pub radius_km: f64,
}

impl NearbySummary {
    pub fn from_hits(closest: &[Nearby<'_>], nearby: &[Nearby<'_>], radius_km: f64) -> Self {
        NearbySummary {
            closest: closest.iter().map(NearbyEntry::from).collect(),
            nearby: nearby.iter().map(NearbyEntry::from).collect(),
            radius_km,
        }
    }

    /// `"Los Angeles, CA (56km), San Diego, CA (124km)"`
    pub fn closest_display(&self) -> String {
        self.closest
            .iter()
            .map(|e| format!("{} ({:.0}km)", e.display_name, e.distance_km))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn nearby_count(&self) -> usize {
        self.nearby.len()
    }
}
