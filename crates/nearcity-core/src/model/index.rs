// crates/nearcity-core/src/model/index.rs
use crate::common::IndexStats;
use crate::error::{NearCityError, Result};
use crate::model::LargeCityRecord;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The loaded set of large cities.
///
/// Built once, never mutated afterwards, so a shared `&ProximityIndex` can be
/// queried from any number of threads. Queries live on the
/// [`ProximitySearch`](crate::traits::ProximitySearch) trait.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProximityIndex {
    /// Records in source order; no two share a coordinate pair.
    pub(crate) records: Vec<LargeCityRecord>,
}

impl ProximityIndex {
    /// Builds an index from in-memory records.
    ///
    /// Every coordinate pair is validated; a bad one fails the build with
    /// [`NearCityError::DatasetLoad`]. Records are deduplicated by
    /// coordinate identity: the first occurrence wins and later ones are
    /// dropped with a warning.
    pub fn from_records(records: Vec<LargeCityRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            record.coordinates.validate().map_err(|e| {
                NearCityError::DatasetLoad(format!("{}: {e}", record.display_name))
            })?;

            if seen.insert(record.coordinates.identity_key()) {
                kept.push(record);
            } else {
                warn!(
                    "Dropping duplicate record {} at {}",
                    record.display_name, record.coordinates
                );
            }
        }

        debug!("Proximity index built with {} records", kept.len());
        Ok(ProximityIndex { records: kept })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn compute_stats(&self) -> IndexStats {
        IndexStats {
            cities: self.records.len(),
            total_population: self.records.iter().map(|r| r.population).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;

    fn rec(name: &str, lat: f64, lng: f64) -> LargeCityRecord {
        LargeCityRecord {
            display_name: name.to_string(),
            citystate_code: crate::citystate::to_citystate(name),
            population: 100_000,
            coordinates: Coordinates::new(lat, lng).unwrap(),
        }
    }

    #[test]
    fn duplicates_by_coordinates_are_dropped() {
        let index = ProximityIndex::from_records(vec![
            rec("Irvine, CA", 33.6846, -117.8265),
            rec("Irvine Copy, CA", 33.6846, -117.8265),
            rec("Los Angeles, CA", 34.0522, -118.2437),
        ])
        .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.records[0].display_name, "Irvine, CA");
    }

    #[test]
    fn stats_sum_population() {
        let index = ProximityIndex::from_records(vec![
            rec("Irvine, CA", 33.6846, -117.8265),
            rec("Los Angeles, CA", 34.0522, -118.2437),
        ])
        .unwrap();
        let stats = index.compute_stats();
        assert_eq!(stats.cities, 2);
        assert_eq!(stats.total_population, 200_000);
    }

    #[test]
    fn out_of_range_record_is_a_load_error() {
        let mut bad = rec("Nowhere, XX", 0.0, 0.0);
        bad.coordinates = Coordinates::new_unchecked(95.0, 0.0);
        let err = ProximityIndex::from_records(vec![rec("Irvine, CA", 33.6846, -117.8265), bad])
            .unwrap_err();
        assert!(matches!(err, NearCityError::DatasetLoad(_)), "{err}");
        assert!(err.is_load_error());
        assert!(err.to_string().contains("Nowhere, XX"));
    }

    #[test]
    fn empty_index_is_valid() {
        let index = ProximityIndex::from_records(Vec::new()).unwrap();
        assert!(index.is_empty());
    }
}
