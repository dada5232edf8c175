// crates/nearcity-core/src/loader/lazy.rs
use crate::error::Result;
use crate::model::ProximityIndex;
use log::debug;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// A dataset path plus the index loaded from it, at most once.
///
/// This is the explicit handle a server keeps for its whole lifetime instead
/// of a process-wide static. The first [`LazyIndex::get`] loads the dataset;
/// concurrent first callers block on that single load and then share the
/// result. A failed load leaves the handle empty, so the next caller retries
/// and sees the same error if the file is still broken.
///
/// ```no_run
/// use nearcity_core::prelude::*;
///
/// let cities = LazyIndex::bundled();
/// let irvine = Coordinates::new(33.6846, -117.8265)?;
/// let hits = cities.get()?.find_k_nearest(&irvine, 3)?;
/// # Ok::<(), NearCityError>(())
/// ```
#[derive(Debug)]
pub struct LazyIndex {
    source: PathBuf,
    cell: OnceCell<ProximityIndex>,
}

impl LazyIndex {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        LazyIndex {
            source: source.into(),
            cell: OnceCell::new(),
        }
    }

    /// Handle on the dataset shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(ProximityIndex::default_dataset_path())
    }

    /// Wrap an index that is already in memory.
    pub fn preloaded(index: ProximityIndex) -> Self {
        LazyIndex {
            source: PathBuf::new(),
            cell: OnceCell::with_value(index),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The loaded index, loading it on first use.
    pub fn get(&self) -> Result<&ProximityIndex> {
        self.cell.get_or_try_init(|| {
            debug!("Loading proximity index from {}", self.source.display());
            ProximityIndex::load_from_path(&self.source)
        })
    }
}
