//! `tc-graph` — directed weighted graph and all-pairs shortest-path engine.
//!
//! | Module            | Contents                                         |
//! |-------------------|---------------------------------------------------|
//! | [`graph`]         | `Graph`, `Edge`                                  |
//! | [`shortest_paths`]| `ShortestPaths`, `RouteInfo`                     |
//!
//! There is no fallible-operation error type here: an out-of-range vertex or
//! negative edge weight is a programmer error caught by `debug_assert!`, not
//! a condition a caller recovers from at runtime.

pub mod graph;
pub mod shortest_paths;

pub use graph::{Edge, Graph};
pub use shortest_paths::{RawCell, RouteInfo, ShortestPaths};
