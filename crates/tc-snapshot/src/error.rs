//! Snapshot codec error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot decode error: {0}")]
    Decode(#[from] bincode::Error),

    #[error("snapshot format version mismatch: expected {expected}, found {found}")]
    BadVersion { expected: u32, found: u32 },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;
