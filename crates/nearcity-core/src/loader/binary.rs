// crates/nearcity-core/src/loader/binary.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'binary' feature (see loader/mod.rs).
// ---------------------------------------------------------------------------

use super::common_io;
#[cfg(not(feature = "compact"))]
use crate::error::NearCityError;
use crate::error::Result;
use crate::model::ProximityIndex;
use bincode::Options;
#[cfg(feature = "json")]
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Suffix of the snapshot written next to a JSON source.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

/// Snapshots larger than this are refused when decoding.
const SNAPSHOT_LIMIT_BYTES: u64 = 64 * 1024 * 1024;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when built with 'compact', plain otherwise.
    pub fn active() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT_BYTES)
}

/// Identifies the exact source file a cache was built from.
///
/// Any change in length or modification time, forwards or backwards,
/// invalidates the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SourceFingerprint {
    len: u64,
    modified_secs: u64,
    modified_nanos: u32,
}

#[cfg_attr(not(feature = "json"), allow(dead_code))]
impl SourceFingerprint {
    /// `None` when the file is missing or has no usable mtime.
    fn of(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        let modified = meta.modified().ok()?.duration_since(UNIX_EPOCH).ok()?;
        Some(SourceFingerprint {
            len: meta.len(),
            modified_secs: modified.as_secs(),
            modified_nanos: modified.subsec_nanos(),
        })
    }
}

/// On-disk layout. `source` is `None` for snapshots written by
/// [`ProximityIndex::save_as`].
#[derive(Deserialize)]
struct Snapshot {
    source: Option<SourceFingerprint>,
    index: ProximityIndex,
}

/// Borrowing twin of [`Snapshot`]; encodes to the same bytes.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    source: Option<SourceFingerprint>,
    index: &'a ProximityIndex,
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let gzip = CompressionMode::active() == CompressionMode::Gzip;
    let reader = common_io::open_stream(path, gzip)?;
    Ok(snapshot_options().deserialize_from(reader)?)
}

// -----------------------------------------------------------------------------
// RUNTIME HELPERS
// -----------------------------------------------------------------------------

impl ProximityIndex {
    /// Write a bincode snapshot of this index.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let snapshot = SnapshotRef {
            source: None,
            index: self,
        };
        write_generic(path.as_ref(), &snapshot, CompressionMode::active())
    }

    /// Load a snapshot written by [`ProximityIndex::save_as`] or by
    /// [`ProximityIndex::load_cached`].
    ///
    /// Records are re-validated on the way in; a snapshot is a file like any
    /// other and may be corrupt.
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let snapshot = read_snapshot(path.as_ref())?;
        Self::from_records(snapshot.index.records)
    }

    /// **Smart Load:** checks the snapshot cache, loads it or parses the source.
    ///
    /// The cache lives at `<source>.<CACHE_SUFFIX>` and records the length
    /// and modification time of the source it was built from. It is used
    /// only while the source still matches exactly; otherwise, or when the
    /// cache is unreadable, the source is parsed and the cache rewritten.
    /// Failing to write the cache only logs a warning.
    #[cfg(feature = "json")]
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);
        let fingerprint = SourceFingerprint::of(path);

        // 1. Check Cache
        if fingerprint.is_some() && cache_path.exists() {
            match read_snapshot(&cache_path) {
                Ok(snapshot) if snapshot.source == fingerprint => {
                    let index = Self::from_records(snapshot.index.records)?;
                    debug!("Loaded {} records from {}", index.len(), cache_path.display());
                    return Ok(index);
                }
                Ok(_) => debug!("Cache {} is stale, rebuilding", cache_path.display()),
                Err(e) => warn!("Ignoring unreadable cache {}: {e}", cache_path.display()),
            }
        }

        // 2. Build
        let index = Self::load_raw_json(path)?;

        // 3. Cache (best effort)
        let snapshot = SnapshotRef {
            source: fingerprint,
            index: &index,
        };
        match write_generic(&cache_path, &snapshot, CompressionMode::active()) {
            Ok(()) => debug!("Wrote cache {}", cache_path.display()),
            Err(e) => warn!("Could not write cache {}: {e}", cache_path.display()),
        }

        Ok(index)
    }
}

// -----------------------------------------------------------------------------
// GENERIC WRITER
// -----------------------------------------------------------------------------

fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(NearCityError::DatasetLoad(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    snapshot_options().serialize_into(&mut encoder, value)?;
    encoder.flush()?;
    Ok(())
}
