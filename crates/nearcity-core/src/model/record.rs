// crates/nearcity-core/src/model/record.rs
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw record as it appears in the dataset file.
///
/// ```json
/// {"display_name": "Irvine, CA", "citystate_code": "irvine-ca",
///  "population": 307670, "coordinates": [33.6846, -117.8265]}
/// ```
///
/// `citystate_code` is optional and derived from `display_name` when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargeCityRaw {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citystate_code: Option<String>,
    #[serde(default)]
    pub population: u64,
    pub coordinates: [f64; 2],
}

/// A large city entry.
///
/// Records never change once an index is built. The coordinate pair doubles
/// as the record's identity: a query made from exactly these coordinates
/// never returns this record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LargeCityRecord {
    /// "City, ST"
    pub display_name: String,
    /// "city-st"
    pub citystate_code: String,
    /// Informational only; never used for ranking.
    pub population: u64,
    pub coordinates: Coordinates,
}

impl LargeCityRecord {
    pub fn name(&self) -> &str {
        &self.display_name
    }

    pub fn code(&self) -> &str {
        &self.citystate_code
    }
}

impl fmt::Display for LargeCityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {}, {}",
            self.display_name, self.citystate_code, self.population, self.coordinates
        )
    }
}

/// A query hit: the matched record and its distance from the query point.
///
/// The distance belongs to the query, so it lives here rather than on the
/// stored record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearby<'a> {
    pub record: &'a LargeCityRecord,
    pub distance_km: f64,
}

impl<'a> Nearby<'a> {
    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn code(&self) -> &'a str {
        self.record.code()
    }
}

/// Renders as `Los Angeles, CA (56km)`.
impl fmt::Display for Nearby<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0}km)", self.record.display_name, self.distance_km)
    }
}
