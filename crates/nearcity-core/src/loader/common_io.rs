// crates/nearcity-core/src/loader/common_io.rs
use crate::error::{NearCityError, Result};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        NearCityError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(NearCityError::DatasetLoad(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// `large_cities.json.gz` -> true
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Cache file next to the source: `large_cities.json` -> `large_cities.json.<suffix>`.
#[cfg_attr(not(all(feature = "json", feature = "binary")), allow(dead_code))]
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = source.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip_path(Path::new("data/large_cities.json.gz")));
        assert!(is_gzip_path(Path::new("data/LARGE.GZ")));
        assert!(!is_gzip_path(Path::new("data/large_cities.json")));
    }

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/tmp/large_cities.json"), "bin");
        assert_eq!(p, PathBuf::from("/tmp/large_cities.json.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json"), false)
            .err()
            .unwrap();
        assert!(matches!(err, NearCityError::NotFound(_)));
    }
}
