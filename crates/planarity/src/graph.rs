//! Undirected host graph handed to the planarity test.
//!
//! Purpose
//! - Store nodes `0..n` and undirected edges with per-node adjacency lists.
//! - Keep the surface small: the test only needs node count, neighbour
//!   iteration and stable ids. Relabeling and disjoint unions exist so callers
//!   can build permuted or multi-component inputs without touching internals.
//!
//! Self-loops and parallel edges are stored as given; the planarity test skips
//! self-loops and classifies a parallel pair only once.

use std::fmt;

/// Node identifier, an index in `0..number_of_nodes()`.
pub type NodeId = usize;

/// Undirected edge value. Endpoints are normalised so that `u <= v`, which makes
/// equality and hashing independent of the order the endpoints were given in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
}

impl Edge {
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// The endpoint opposite to `x` (`x` itself for a self-loop).
    #[inline]
    pub fn other(&self, x: NodeId) -> NodeId {
        if self.u == x {
            self.v
        } else {
            self.u
        }
    }
}

/// Errors raised while building or transforming a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    NodeOutOfRange { node: NodeId, num_nodes: usize },
    InvalidPermutation { reason: String },
}

impl GraphError {
    fn permutation(reason: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, num_nodes } => {
                write!(f, "node {node} out of range for graph with {num_nodes} nodes")
            }
            Self::InvalidPermutation { reason } => write!(f, "invalid permutation: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected graph with adjacency lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<NodeId>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Graph with `n` isolated nodes.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Build a graph on `n` nodes from an edge iterator.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut g = Self::new(n);
        for (a, b) in edges {
            g.add_edge(a, b)?;
        }
        Ok(g)
    }

    pub fn add_node(&mut self) -> NodeId {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.adj[a].push(b);
        if a != b {
            self.adj[b].push(a);
        }
        self.edges.push(Edge::new(a, b));
        Ok(())
    }

    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Neighbours of `x` in insertion order (with repetition for parallel edges).
    #[inline]
    pub fn neighbors(&self, x: NodeId) -> &[NodeId] {
        &self.adj[x]
    }

    #[inline]
    pub fn degree(&self, x: NodeId) -> usize {
        self.adj[x].len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        if a >= self.number_of_nodes() || b >= self.number_of_nodes() {
            return false;
        }
        // scan the shorter list
        let (x, y) = if self.degree(a) <= self.degree(b) {
            (a, b)
        } else {
            (b, a)
        };
        self.adj[x].contains(&y)
    }

    /// Copy of the graph with node `x` renamed to `perm[x]`.
    pub fn relabel(&self, perm: &[NodeId]) -> Result<Graph, GraphError> {
        let n = self.number_of_nodes();
        if perm.len() != n {
            return Err(GraphError::permutation(format!(
                "expected {n} entries, got {}",
                perm.len()
            )));
        }
        let mut seen = vec![false; n];
        for &p in perm {
            if p >= n {
                return Err(GraphError::permutation(format!("image {p} >= {n}")));
            }
            if std::mem::replace(&mut seen[p], true) {
                return Err(GraphError::permutation(format!("image {p} repeated")));
            }
        }
        Graph::from_edges(n, self.edges.iter().map(|e| (perm[e.u], perm[e.v])))
    }

    /// Disjoint union; nodes of `other` are shifted by `self.number_of_nodes()`.
    pub fn disjoint_union(&self, other: &Graph) -> Graph {
        let shift = self.number_of_nodes();
        let mut g = self.clone();
        g.adj
            .extend(other.adj.iter().map(|ns| ns.iter().map(|&x| x + shift).collect()));
        g.edges
            .extend(other.edges.iter().map(|e| Edge::new(e.u + shift, e.v + shift)));
        g
    }

    #[inline]
    fn check_node(&self, x: NodeId) -> Result<(), GraphError> {
        if x < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: x,
                num_nodes: self.number_of_nodes(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_equality_ignores_orientation() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        assert_eq!(Edge::new(3, 1).u, 1);
        assert_eq!(Edge::new(2, 5).other(5), 2);
        assert!(Edge::new(4, 4).is_self_loop());
    }

    #[test]
    fn add_edge_rejects_unknown_nodes() {
        let mut g = Graph::new(2);
        assert_eq!(
            g.add_edge(0, 2),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            })
        );
        g.add_edge(0, 1).unwrap();
        assert!(g.has_edge(1, 0));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut g = Graph::new(1);
        g.add_edge(0, 0).unwrap();
        assert_eq!(g.neighbors(0), &[0]);
    }

    #[test]
    fn relabel_checks_permutation() {
        let g = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let h = g.relabel(&[2, 0, 1]).unwrap();
        assert!(h.has_edge(2, 0));
        assert!(h.has_edge(0, 1));
        assert!(!h.has_edge(2, 1));
        assert!(g.relabel(&[0, 0, 1]).is_err());
        assert!(g.relabel(&[0, 1]).is_err());
        assert!(g.relabel(&[0, 1, 3]).is_err());
    }

    #[test]
    fn disjoint_union_shifts_ids() {
        let a = Graph::from_edges(2, [(0, 1)]).unwrap();
        let b = Graph::from_edges(3, [(0, 2)]).unwrap();
        let u = a.disjoint_union(&b);
        assert_eq!(u.number_of_nodes(), 5);
        assert_eq!(u.number_of_edges(), 2);
        assert!(u.has_edge(2, 4));
        assert!(!u.has_edge(0, 2));
    }
}
