//! Catalogue-subsystem error type.

use thiserror::Error;

/// Errors produced by `tc-catalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("bus route references unknown stop {0:?}")]
    UnknownStop(String),

    #[error("bus route {0:?} has no stops")]
    EmptyRoute(String),

    #[error("loop route {0:?} does not start and end at the same stop")]
    LoopEndpointMismatch(String),

    #[error("distance {meters} between {src:?} and {dst:?} must be positive")]
    NonPositiveDistance { src: String, dst: String, meters: i64 },

    #[error("distance between {src:?} and {dst:?} is not defined")]
    DistanceUndefined { src: String, dst: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
