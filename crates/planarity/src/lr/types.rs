//! Data types for the DFS orientation and the testing pass.
//!
//! Kept small and explicit so `orient`, `order` and `testing` read easily.

use crate::graph::NodeId;

/// Index of an oriented edge in [`OrientedGraph`]. Per-edge attributes are
/// dense vectors indexed by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Directed copy of the input built by the orientation DFS: every undirected
/// edge appears exactly once, pointing away from the root along tree edges and
/// upwards (towards an ancestor) for back edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrientedGraph {
    ends: Vec<(NodeId, NodeId)>,
    out: Vec<Vec<EdgeId>>, // outgoing edges of each node, in traversal order
}

impl OrientedGraph {
    pub fn new(n: usize) -> Self {
        Self {
            ends: Vec::new(),
            out: vec![Vec::new(); n],
        }
    }

    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        let id = EdgeId(self.ends.len());
        self.ends.push((source, target));
        self.out[source].push(id);
        id
    }

    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    pub fn source(&self, e: EdgeId) -> NodeId {
        self.ends[e.0].0
    }

    #[inline]
    pub fn target(&self, e: EdgeId) -> NodeId {
        self.ends[e.0].1
    }

    /// Outgoing edges of `x`. After the reordering step these are sorted by
    /// ascending nesting depth.
    #[inline]
    pub fn out_edges(&self, x: NodeId) -> &[EdgeId] {
        &self.out[x]
    }

    /// All edges as `(source, target)` pairs, indexed by [`EdgeId`].
    #[inline]
    pub fn edge_ends(&self) -> &[(NodeId, NodeId)] {
        &self.ends
    }

    pub(crate) fn out_lists_mut(&mut self) -> &mut [Vec<EdgeId>] {
        &mut self.out
    }
}

/// Per-node and per-edge attributes produced by the orientation DFS.
///
/// After orientation every node has a height and every edge its low points
/// and nesting depth; nothing here changes afterwards.
#[derive(Clone, Debug)]
pub(crate) struct Orientation {
    pub dfs: OrientedGraph,
    pub height: Vec<usize>,
    pub lowpt: Vec<usize>,
    pub lowpt2: Vec<usize>,
    pub nesting_depth: Vec<usize>,
    pub parent_edge: Vec<Option<EdgeId>>,
    pub roots: Vec<NodeId>,
}

impl Orientation {
    /// True if `e` is the edge by which its target was discovered.
    #[inline]
    pub fn is_tree_edge(&self, e: EdgeId) -> bool {
        self.parent_edge[self.dfs.target(e)] == Some(e)
    }
}

/// A merge step that cannot keep both sides consistent; proof of non-planarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Conflict {
    /// Edge whose constraints could not be added.
    pub edge: EdgeId,
}
