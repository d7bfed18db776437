//! Reproducible graph families for tests, benches and the CLI.
//!
//! Purpose
//! - Named planar and non-planar families (paths, grids, Kuratowski graphs,
//!   hypercubes, Petersen) with fixed node numbering.
//! - Seeded random families: trees, stacked triangulations (maximal planar),
//!   uniform simple graphs, permutations and edge subdivisions. The same seed
//!   always yields the same graph.
//!
//! Deterministic families that cannot fail return a `Graph` directly; the
//! others validate their parameters and return `GeneratorError`.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph, NodeId};

/// Error type shared by all generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Build from edges whose endpoints are known to be in range.
fn build(n: usize, edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Graph {
    Graph::from_edges(n, edges).expect("generators only emit ids below n")
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Graph {
    build(n, (1..n).map(|k| (k - 1, k)))
}

/// Cycle on `n >= 3` nodes.
pub fn cycle(n: usize) -> Result<Graph, GeneratorError> {
    if n < 3 {
        return Err(GeneratorError::invalid("cycle needs at least 3 nodes"));
    }
    Ok(build(n, (0..n).map(|k| (k, (k + 1) % n))))
}

/// Complete graph K_n.
pub fn complete(n: usize) -> Graph {
    build(n, (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))))
}

/// Complete bipartite graph K_{a,b}; nodes `0..a` on one side, `a..a+b` on the other.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    build(a + b, (0..a).flat_map(|x| (a..a + b).map(move |y| (x, y))))
}

/// Wheel: hub `0` joined to every node of a rim cycle `1..=rim`.
pub fn wheel(rim: usize) -> Result<Graph, GeneratorError> {
    if rim < 3 {
        return Err(GeneratorError::invalid("wheel rim needs at least 3 nodes"));
    }
    let spokes = (1..=rim).map(|k| (0, k));
    let rim_edges = (0..rim).map(|k| (1 + k, 1 + (k + 1) % rim));
    Ok(build(rim + 1, spokes.chain(rim_edges)))
}

/// `rows x cols` grid; node `(r, c)` is `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let id = |r: usize, c: usize| r * cols + c;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((id(r, c), id(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((id(r, c), id(r + 1, c)));
            }
        }
    }
    build(rows * cols, edges)
}

/// Skeleton of the `dim`-cube: nodes are bit strings, edges flip one bit.
/// Planar for `dim <= 3`.
pub fn hypercube(dim: u32) -> Result<Graph, GeneratorError> {
    if dim > 20 {
        return Err(GeneratorError::invalid("hypercube dimension must be <= 20"));
    }
    let n = 1usize << dim;
    let edges = (0..n).flat_map(|x| {
        (0..dim)
            .map(move |bit| (x, x ^ (1 << bit)))
            .filter(|&(x, y)| x < y)
    });
    Ok(build(n, edges))
}

/// Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`, spokes `k - k+5`.
pub fn petersen() -> Graph {
    let outer = (0..5).map(|k| (k, (k + 1) % 5));
    let inner = (0..5).map(|k| (5 + k, 5 + (k + 2) % 5));
    let spokes = (0..5).map(|k| (k, k + 5));
    build(10, outer.chain(inner).chain(spokes))
}

/// Uniform random recursive tree: node `k` attaches to a random earlier node.
pub fn random_tree(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    build(n, (1..n).map(|k| (rng.gen_range(0..k), k)).collect::<Vec<_>>())
}

/// Stacked triangulation (Apollonian network) on `n >= 3` nodes: start from a
/// triangle and repeatedly place a node inside a random face, joining it to the
/// three face corners. Maximal planar with `3n - 6` edges.
pub fn stacked_triangulation(n: usize, seed: u64) -> Result<Graph, GeneratorError> {
    if n < 3 {
        return Err(GeneratorError::invalid("triangulation needs at least 3 nodes"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = vec![(0, 1), (1, 2), (2, 0)];
    // both sides of the initial triangle are faces
    let mut faces: Vec<[NodeId; 3]> = vec![[0, 1, 2], [0, 1, 2]];
    for x in 3..n {
        let k = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(k);
        edges.extend([(a, x), (b, x), (c, x)]);
        faces.extend([[a, b, x], [b, c, x], [a, c, x]]);
    }
    Ok(build(n, edges))
}

/// Uniform simple graph with `n` nodes and exactly `m` edges.
pub fn random_graph(n: usize, m: usize, seed: u64) -> Result<Graph, GeneratorError> {
    let max = n * n.saturating_sub(1) / 2;
    if m > max {
        return Err(GeneratorError::invalid(format!(
            "{m} edges exceed the {max} possible on {n} nodes"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chosen = HashSet::with_capacity(m);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b && chosen.insert(Edge::new(a, b)) {
            edges.push((a, b));
        }
    }
    Ok(build(n, edges))
}

/// Uniform random permutation of `0..n`, usable with [`Graph::relabel`].
pub fn random_permutation(n: usize, seed: u64) -> Vec<NodeId> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<NodeId> = (0..n).collect();
    perm.shuffle(&mut rng);
    perm
}

/// Subdivide `rounds` random edges: each chosen edge `a - b` becomes
/// `a - x - b` with a fresh node `x`. Planarity is preserved both ways.
pub fn subdivide(g: &Graph, rounds: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<Edge> = g.edges().to_vec();
    let mut n = g.number_of_nodes();
    if edges.is_empty() {
        return g.clone();
    }
    for _ in 0..rounds {
        let k = rng.gen_range(0..edges.len());
        let e = edges.swap_remove(k);
        let x = n;
        n += 1;
        edges.push(Edge::new(e.u, x));
        edges.push(Edge::new(x, e.v));
    }
    build(n, edges.into_iter().map(|e| (e.u, e.v)))
}
