// crates/nearcity-core/src/geo.rs

//! Coordinates and great-circle distance.

use crate::error::{NearCityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius (IUGG), in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Serialized as a two-element array `[lat, lng]`, which is also the shape
/// used by the dataset file. Decoding goes through [`Coordinates::new`], so
/// an out-of-range pair fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting non-finite or out-of-range values.
    ///
    /// ```rust
    /// use nearcity_core::Coordinates;
    ///
    /// let irvine = Coordinates::new(33.6846, -117.8265).unwrap();
    /// assert_eq!(irvine.lat(), 33.6846);
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let c = Coordinates { lat, lng };
        c.validate()?;
        Ok(c)
    }

    /// Skips validation so tests can build values `new` would reject.
    #[cfg(test)]
    pub(crate) fn new_unchecked(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Checks the range invariant: finite, `lat` in `[-90, 90]`, `lng` in
    /// `[-180, 180]`.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(NearCityError::invalid(format!(
                "coordinates must be finite, got ({}, {})",
                self.lat, self.lng
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(NearCityError::invalid(format!(
                "latitude must be within [-90, 90], got {}",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(NearCityError::invalid(format!(
                "longitude must be within [-180, 180], got {}",
                self.lng
            )));
        }
        Ok(())
    }

    /// Identity key for exact-equality matching (`-0.0` folds onto `0.0`).
    pub(crate) fn identity_key(&self) -> (u64, u64) {
        ((self.lat + 0.0).to_bits(), (self.lng + 0.0).to_bits())
    }

    /// Great-circle distance to `other`, in kilometers.
    #[inline]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        great_circle_km(self, other)
    }
}

impl TryFrom<[f64; 2]> for Coordinates {
    type Error = NearCityError;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self> {
        Coordinates::new(lat, lng)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Haversine distance between two points on a sphere of radius
/// [`EARTH_RADIUS_KM`].
pub fn great_circle_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (b.lng - a.lng).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinates::new(-90.5, 0.0).is_err());
        assert!(Coordinates::new(0.0, 180.1).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinates::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn distance_is_zero_for_same_point() {
        let p = c(33.6846, -117.8265);
        assert_eq!(great_circle_km(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let la = c(34.0522, -118.2437);
        let sd = c(32.7157, -117.1611);
        assert!((great_circle_km(&la, &sd) - great_circle_km(&sd, &la)).abs() < 1e-9);
    }

    #[test]
    fn known_distances() {
        let irvine = c(33.6846, -117.8265);
        let la = c(34.0522, -118.2437);
        let sd = c(32.7157, -117.1611);
        let d_la = great_circle_km(&irvine, &la);
        let d_sd = great_circle_km(&irvine, &sd);
        assert!((d_la - 56.0).abs() < 2.0, "Irvine -> LA was {d_la}");
        assert!((d_sd - 124.0).abs() < 3.0, "Irvine -> SD was {d_sd}");

        // Quarter meridian.
        let d = great_circle_km(&c(0.0, 0.0), &c(90.0, 0.0));
        assert!((d - 10_007.5).abs() < 1.0);
    }

    #[test]
    fn negative_zero_has_same_identity() {
        assert_eq!(c(0.0, -0.0).identity_key(), c(-0.0, 0.0).identity_key());
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_as_pair() {
        let json = serde_json::to_string(&c(1.5, -2.25)).unwrap();
        assert_eq!(json, "[1.5,-2.25]");
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c(1.5, -2.25));
    }

    #[cfg(feature = "json")]
    #[test]
    fn out_of_range_pair_fails_to_deserialize() {
        assert!(serde_json::from_str::<Coordinates>("[91.0, 0.0]").is_err());
        assert!(serde_json::from_str::<Coordinates>("[0.0, -181.0]").is_err());
    }

    #[test]
    fn try_from_array_validates() {
        assert_eq!(Coordinates::try_from([33.6846, -117.8265]).unwrap(), c(33.6846, -117.8265));
        assert!(matches!(
            Coordinates::try_from([0.0, 200.0]),
            Err(NearCityError::InvalidArgument(_))
        ));
    }
}
