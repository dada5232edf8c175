// crates/nearcity-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! specific parsers (JSON source vs bincode snapshot).
//!
//! Loading is a startup concern: every failure here is a load error
//! ([`NearCityError::is_load_error`]) and the process should not start
//! serving queries until it is fixed.

use crate::error::Result;
#[cfg(not(any(feature = "json", feature = "binary")))]
use crate::error::NearCityError;
use crate::model::ProximityIndex;
use std::path::{Path, PathBuf};

#[cfg(any(feature = "json", feature = "binary"))]
mod common_io;
mod lazy;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "binary")]
mod binary;

#[cfg(feature = "binary")]
pub use binary::{CompressionMode, CACHE_SUFFIX};
pub use lazy::LazyIndex;

pub const DEFAULT_DATASET_FILENAME: &str = "large_cities.json";

impl ProximityIndex {
    /// Directory holding the dataset bundled with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DEFAULT_DATASET_FILENAME
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// **Standard Loader:** picks the best strategy for the enabled features.
    ///
    /// - `json` + `binary`: JSON source with a bincode cache beside it
    ///   ([`ProximityIndex::load_cached`]).
    /// - `json` only: parse the source every time.
    /// - `binary` only: `path` must point at a snapshot.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(all(feature = "json", feature = "binary"))]
        return Self::load_cached(path);

        #[cfg(all(feature = "json", not(feature = "binary")))]
        return Self::load_raw_json(path);

        #[cfg(all(not(feature = "json"), feature = "binary"))]
        return Self::load_binary_file(path);

        #[cfg(not(any(feature = "json", feature = "binary")))]
        Err(NearCityError::DatasetLoad(format!(
            "cannot load {}: neither 'json' nor 'binary' is enabled",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_path_points_into_crate() {
        let path = ProximityIndex::default_dataset_path();
        assert!(path.ends_with("data/large_cities.json"));
        assert!(path.exists(), "missing bundled dataset at {}", path.display());
    }
}
