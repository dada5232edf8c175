// crates/nearcity-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded index.
///
/// Returned by [`ProximitySearch::stats`](crate::traits::ProximitySearch::stats);
/// counts reflect the index after deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub cities: usize,
    pub total_population: u64,
}
