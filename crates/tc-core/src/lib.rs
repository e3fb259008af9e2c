//! `tc-core` — foundational types shared by every `tc-*` crate.
//!
//! This crate is a dependency of every other crate in the workspace. It
//! intentionally has no `tc-*` dependencies and no external ones besides an
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module  | Contents                               |
//! |---------|-----------------------------------------|
//! | [`ids`] | `StopId`, `BusId`, `EdgeId`             |
//! | [`geo`] | `GeoPoint`, great-circle distance       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |
//!           | Required by `tc-snapshot` and `tc-io`.               |

pub mod geo;
pub mod ids;

pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId};
