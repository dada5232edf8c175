// crates/nearcity-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'json' feature (see loader/mod.rs).
// ---------------------------------------------------------------------------

use super::common_io;
use crate::error::Result;
use crate::model::{convert, LargeCityRaw, ProximityIndex};
use log::debug;
use std::io::{Read, Write};
use std::path::Path;

impl ProximityIndex {
    /// **Source Loader:** parse a JSON dataset (`.json` or `.json.gz`).
    pub fn load_raw_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Parsing dataset {}", path.display());
        let reader = common_io::open_stream(path, common_io::is_gzip_path(path))?;
        Self::from_json_reader(reader)
    }

    /// Parse a JSON array of records from any reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<LargeCityRaw> = serde_json::from_reader(reader)?;
        let records = convert::from_raw(raw)?;
        Self::from_records(records)
    }

    /// Write the records back out as a (pretty) JSON dataset.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &convert::to_raw(&self.records))?;
        Ok(())
    }
}
