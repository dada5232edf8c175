// crates/nearcity-core/src/traits.rs
use crate::common::IndexStats;
use crate::error::{NearCityError, Result};
use crate::geo::Coordinates;
use crate::model::{LargeCityRecord, Nearby};
use crate::summary::NearbySummary;

/// Largest `k` accepted by [`ProximitySearch::find_k_nearest`].
pub const MAX_K: usize = 20;

/// Largest `k` accepted by [`ProximitySearch::find_k_nearest_and_within_radius`].
/// That call feeds a short display list.
pub const MAX_COMBINED_K: usize = 5;

/// Hits from the combined query: `(within_radius, k_nearest)`.
pub type CombinedHits<'a> = (Vec<Nearby<'a>>, Vec<Nearby<'a>>);

/// Query operations over a loaded set of large cities.
///
/// Every query is pure: same index, same arguments, same answer. A record
/// whose coordinates equal the query point exactly is never returned.
pub trait ProximitySearch {
    fn stats(&self) -> IndexStats;

    /// All records, in source order.
    fn records(&self) -> &[LargeCityRecord];

    /// Exact lookup by citystate code, ignoring ASCII case.
    ///
    /// ```no_run
    /// use nearcity_core::prelude::*;
    ///
    /// let index = ProximityIndex::load_from_path(ProximityIndex::default_dataset_path())?;
    /// if let Some(city) = index.find_by_code("irvine-ca") {
    ///     println!("{} at {}", city.name(), city.coordinates);
    /// }
    /// # Ok::<(), NearCityError>(())
    /// ```
    fn find_by_code(&self, code: &str) -> Option<&LargeCityRecord>;

    /// The `k` records closest to `query`, ascending by distance.
    ///
    /// Returns `min(k, n)` hits, where `n` counts records other than the
    /// query point itself. Equal distances keep source order.
    ///
    /// # Errors
    /// [`NearCityError::InvalidArgument`] unless `1 <= k <= 20`.
    fn find_k_nearest(&self, query: &Coordinates, k: usize) -> Result<Vec<Nearby<'_>>>;

    /// Every record within `radius_km` of `query` (boundary inclusive).
    ///
    /// The result is a set: each record appears at most once. It is returned
    /// in source order, but callers must not rely on any order.
    ///
    /// # Errors
    /// [`NearCityError::InvalidArgument`] unless `radius_km` is finite and > 0.
    fn find_all_within_radius(&self, query: &Coordinates, radius_km: f64)
        -> Result<Vec<Nearby<'_>>>;

    /// Both of the above in a single pass: `(within_radius, k_nearest)`.
    ///
    /// # Errors
    /// [`NearCityError::InvalidArgument`] unless `1 <= k <= 5` and the radius
    /// is finite and > 0.
    fn find_k_nearest_and_within_radius(
        &self,
        query: &Coordinates,
        k: usize,
        radius_km: f64,
    ) -> Result<CombinedHits<'_>>;

    /// Like [`find_by_code`](Self::find_by_code), but unknown codes are an error.
    fn city(&self, code: &str) -> Result<&LargeCityRecord> {
        self.find_by_code(code)
            .ok_or_else(|| NearCityError::UnknownCity(code.trim().to_string()))
    }

    /// The `k` large cities nearest to the dataset city `code`, itself excluded.
    fn nearest_to_city(&self, code: &str, k: usize) -> Result<Vec<Nearby<'_>>> {
        let city = self.city(code)?;
        self.find_k_nearest(&city.coordinates, k)
    }

    /// Display summary for an arbitrary point.
    fn summary_at(&self, query: &Coordinates, k: usize, radius_km: f64) -> Result<NearbySummary> {
        let (within, nearest) = self.find_k_nearest_and_within_radius(query, k, radius_km)?;
        Ok(NearbySummary::from_hits(&nearest, &within, radius_km))
    }

    /// Display summary for the dataset city `code`, itself excluded.
    fn summary_for_city(&self, code: &str, k: usize, radius_km: f64) -> Result<NearbySummary> {
        let city = self.city(code)?;
        self.summary_at(&city.coordinates, k, radius_km)
    }
}
