//! `tc-snapshot` — bit-exact binary serialization of the sealed catalogue,
//! router, and render settings, via `serde` + `bincode`.
//!
//! | Module      | Contents                                   |
//! |-------------|-----------------------------------------------|
//! | [`snapshot`]| `write_snapshot`, `read_snapshot`            |
//! | [`error`]   | `SnapshotError`, `SnapshotResult`             |

pub mod error;
pub mod snapshot;

pub use error::{SnapshotError, SnapshotResult};
pub use snapshot::{read_snapshot, write_snapshot};
