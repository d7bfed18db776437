//! Linear-time planarity testing.
//!
//! Modules
//! - `graph`: undirected host graph (`Graph`, `Edge`, `NodeId`).
//! - `algorithm`: run-once lifecycle shared by graph algorithms.
//! - `lr`: the left-right planarity test (orientation DFS, nesting-depth
//!   ordering, conflict-pair testing DFS).
//! - `families`: named and seeded graph families for tests, benches and tools.
//!
//! API Policy
//! - The curated surface lives in `api`; module paths may move between versions.

pub mod algorithm;
pub mod api;
pub mod families;
pub mod graph;
pub mod lr;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithm::Algorithm;
pub use graph::{Edge, Graph, GraphError, NodeId};
pub use lr::{is_planar, LeftRightPlanarityTest, PlanarityError};
