//! I/O-subsystem error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] tc_catalog::CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IoResult<T> = Result<T, IoError>;
