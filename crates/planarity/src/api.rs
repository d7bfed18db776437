//! Curated API surface (UNSTABLE).
//!
//! Prefer these re-exports in tools and bindings; internal module paths are
//! free to move.

// Host graph
pub use crate::graph::{Edge, Graph, GraphError, NodeId};
// Planarity test
pub use crate::algorithm::Algorithm;
pub use crate::lr::{is_planar, EdgeId, LeftRightPlanarityTest, OrientedGraph, PlanarityError};
// Graph families
pub use crate::families::{
    complete, complete_bipartite, cycle, grid, hypercube, path, petersen, random_graph,
    random_permutation, random_tree, stacked_triangulation, subdivide, wheel, GeneratorError,
};
