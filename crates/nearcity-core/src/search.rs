// crates/nearcity-core/src/search.rs

//! Query implementation: one linear pass over the records with a bounded
//! max-heap for the k nearest. O(n log k), no full sort of the dataset.

use crate::common::IndexStats;
use crate::error::{NearCityError, Result};
use crate::geo::{great_circle_km, Coordinates};
use crate::model::{LargeCityRecord, Nearby, ProximityIndex};
use crate::traits::{CombinedHits, ProximitySearch, MAX_COMBINED_K, MAX_K};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry. Ordered by distance, then by source position, so the heap top
/// is the current worst candidate and ties evict the later record first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance_km: f64,
    idx: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.distance_km.total_cmp(&other.distance_km) {
            Ordering::Equal => self.idx.cmp(&other.idx),
            ord => ord,
        }
    }
}

fn check_k(k: usize, max: usize) -> Result<()> {
    if (1..=max).contains(&k) {
        Ok(())
    } else {
        Err(NearCityError::invalid(format!(
            "k must be between 1 and {max}, got {k}"
        )))
    }
}

fn check_radius(radius_km: f64) -> Result<()> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(())
    } else {
        Err(NearCityError::invalid(format!(
            "radius_km must be a positive number, got {radius_km}"
        )))
    }
}

impl ProximityIndex {
    /// The single pass behind every query.
    ///
    /// `k == 0` skips the heap, `radius_km == None` skips the radius set.
    /// Returns `(within_radius, k_nearest)`.
    fn scan(&self, query: &Coordinates, k: usize, radius_km: Option<f64>) -> CombinedHits<'_> {
        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k);
        let mut within = Vec::new();

        for (idx, record) in self.records.iter().enumerate() {
            // Don't recommend a city to itself.
            if record.coordinates == *query {
                continue;
            }

            let distance_km = great_circle_km(query, &record.coordinates);

            if let Some(radius) = radius_km {
                if distance_km <= radius {
                    within.push(Nearby {
                        record,
                        distance_km,
                    });
                }
            }

            if k == 0 {
                continue;
            }
            let candidate = Candidate { distance_km, idx };
            if heap.len() < k {
                heap.push(candidate);
            } else if let Some(mut worst) = heap.peek_mut() {
                if candidate < *worst {
                    *worst = candidate;
                }
            }
        }

        let nearest = heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| Nearby {
                record: &self.records[c.idx],
                distance_km: c.distance_km,
            })
            .collect();

        (within, nearest)
    }
}

impl ProximitySearch for ProximityIndex {
    fn stats(&self) -> IndexStats {
        self.compute_stats()
    }

    fn records(&self) -> &[LargeCityRecord] {
        &self.records
    }

    fn find_by_code(&self, code: &str) -> Option<&LargeCityRecord> {
        let code = code.trim();
        // Linear scan is fine for a few thousand records.
        self.records
            .iter()
            .find(|r| r.citystate_code.eq_ignore_ascii_case(code))
    }

    fn find_k_nearest(&self, query: &Coordinates, k: usize) -> Result<Vec<Nearby<'_>>> {
        check_k(k, MAX_K)?;
        query.validate()?;
        Ok(self.scan(query, k, None).1)
    }

    fn find_all_within_radius(
        &self,
        query: &Coordinates,
        radius_km: f64,
    ) -> Result<Vec<Nearby<'_>>> {
        check_radius(radius_km)?;
        query.validate()?;
        Ok(self.scan(query, 0, Some(radius_km)).0)
    }

    fn find_k_nearest_and_within_radius(
        &self,
        query: &Coordinates,
        k: usize,
        radius_km: f64,
    ) -> Result<CombinedHits<'_>> {
        check_k(k, MAX_COMBINED_K)?;
        check_radius(radius_km)?;
        query.validate()?;
        Ok(self.scan(query, k, Some(radius_km)))
    }
}
