//! Router-subsystem error type.

use thiserror::Error;

/// Errors produced by `tc-router`.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Catalog(#[from] tc_catalog::CatalogError),
}

pub type RouterResult<T> = Result<T, RouterError>;
