//! Left-right planarity test.
//!
//! Purpose
//! - Decide whether an undirected graph is planar in linear time using the
//!   left-right criterion: one DFS orients the graph and computes low points,
//!   a second DFS over the nesting-depth ordered orientation tracks which
//!   return edges must lie on opposite sides of each tree path.
//!
//! Layout
//! - `types.rs` (ids, oriented graph, per-edge attributes), `orient.rs`
//!   (orientation DFS), `order.rs` (bucket sort by nesting depth),
//!   `interval.rs` (conflict-interval algebra), `testing.rs` (testing DFS).
//!
//! Only the verdict is computed; no embedding and no Kuratowski certificate.

mod interval;
mod order;
mod orient;
mod testing;
mod types;

use std::fmt;

use crate::algorithm::Algorithm;
use crate::graph::{Graph, NodeId};

pub use types::{EdgeId, OrientedGraph};

use order::sort_by_nesting_depth;
use orient::orient;
use testing::LrTester;
use types::Orientation;

/// Misuse of [`LeftRightPlanarityTest`]; distinct from a non-planar verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanarityError {
    /// A result was requested before `run`.
    NotRun,
}

impl fmt::Display for PlanarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRun => write!(f, "planarity test has not been run"),
        }
    }
}

impl std::error::Error for PlanarityError {}

/// Run-once planarity test over a borrowed graph.
///
/// ```
/// use planarity::{Algorithm, Graph, LeftRightPlanarityTest};
///
/// let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let mut test = LeftRightPlanarityTest::new(&g);
/// test.run();
/// assert_eq!(test.is_planar(), Ok(true));
/// ```
#[derive(Debug)]
pub struct LeftRightPlanarityTest<'g> {
    graph: &'g Graph,
    orientation: Option<Orientation>,
    planar: Option<bool>,
}

impl<'g> LeftRightPlanarityTest<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            orientation: None,
            planar: None,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn is_planar(&self) -> Result<bool, PlanarityError> {
        self.planar.ok_or(PlanarityError::NotRun)
    }

    /// The DFS orientation with out-edges in nesting-depth order.
    pub fn dfs_graph(&self) -> Result<&OrientedGraph, PlanarityError> {
        Ok(&self.orientation()?.dfs)
    }

    /// One DFS root per connected component, in discovery order.
    pub fn roots(&self) -> Result<&[NodeId], PlanarityError> {
        Ok(&self.orientation()?.roots)
    }

    /// DFS height of `x` (roots have height 0).
    ///
    /// # Panics
    /// If `x` is not a node of the graph.
    pub fn height(&self, x: NodeId) -> Result<usize, PlanarityError> {
        Ok(self.orientation()?.height[x])
    }

    /// Lowest and second-lowest return heights of oriented edge `e`.
    ///
    /// # Panics
    /// If `e` is not an edge of [`dfs_graph`](Self::dfs_graph).
    pub fn low_points(&self, e: EdgeId) -> Result<(usize, usize), PlanarityError> {
        let o = self.orientation()?;
        Ok((o.lowpt[e.0], o.lowpt2[e.0]))
    }

    /// Sort key of `e` among the out-edges of its source.
    ///
    /// # Panics
    /// If `e` is not an edge of [`dfs_graph`](Self::dfs_graph).
    pub fn nesting_depth(&self, e: EdgeId) -> Result<usize, PlanarityError> {
        Ok(self.orientation()?.nesting_depth[e.0])
    }

    fn orientation(&self) -> Result<&Orientation, PlanarityError> {
        self.orientation.as_ref().ok_or(PlanarityError::NotRun)
    }
}

impl Algorithm for LeftRightPlanarityTest<'_> {
    fn run(&mut self) {
        let mut o = orient(self.graph);
        sort_by_nesting_depth(&mut o.dfs, &o.nesting_depth);
        let n = o.dfs.number_of_nodes();
        let m = o.dfs.number_of_edges();
        let planar = if n > 2 && m > 3 * n - 6 {
            tracing::debug!(nodes = n, edges = m, "edge count exceeds 3n-6");
            false
        } else {
            match LrTester::new(&o).run() {
                Ok(()) => true,
                Err(conflict) => {
                    let (s, t) = o.dfs.edge_ends()[conflict.edge.0];
                    tracing::debug!(source = s, target = t, "conflicting return edges");
                    false
                }
            }
        };
        self.orientation = Some(o);
        self.planar = Some(planar);
    }

    fn has_finished(&self) -> bool {
        self.planar.is_some()
    }
}

/// Convenience wrapper: build, run and read the verdict.
pub fn is_planar(graph: &Graph) -> bool {
    let mut test = LeftRightPlanarityTest::new(graph);
    test.run();
    test.is_planar() == Ok(true)
}
