// crates/nearcity-core/src/error.rs
use thiserror::Error;

/// Errors produced by the proximity index.
///
/// Two families matter to callers:
/// - load errors ([`NearCityError::is_load_error`]) happen while reading the
///   dataset and mean the process should not start serving;
/// - [`NearCityError::InvalidArgument`] and [`NearCityError::UnknownCity`]
///   are per-query rejections that can be surfaced to the client as-is.
#[derive(Debug, Error)]
pub enum NearCityError {
    /// The dataset file does not exist or cannot be opened.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    /// The dataset was readable but a record has the wrong shape.
    #[error("Dataset load error: {0}")]
    DatasetLoad(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source dataset is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(String),

    /// Binary snapshot could not be encoded or decoded.
    #[error("Bincode error: {0}")]
    Bincode(String),

    /// `k`, radius, coordinates or citystate code outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No record carries the requested citystate code.
    #[error("Unknown city: {0}")]
    UnknownCity(String),
}

impl NearCityError {
    /// True for failures that happen while loading the dataset.
    pub fn is_load_error(&self) -> bool {
        !matches!(
            self,
            NearCityError::InvalidArgument(_) | NearCityError::UnknownCity(_)
        )
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        NearCityError::InvalidArgument(msg.into())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for NearCityError {
    fn from(e: serde_json::Error) -> Self {
        NearCityError::Json(e.to_string())
    }
}

#[cfg(feature = "binary")]
impl From<bincode::Error> for NearCityError {
    fn from(e: bincode::Error) -> Self {
        NearCityError::Bincode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NearCityError>;
