//! Orientation DFS: tree/back edge classification, heights, low points and
//! nesting depths.
//!
//! Every undiscovered node starts a new DFS tree (height 0). Edges are
//! oriented in the direction they are first traversed, so tree edges point
//! away from the root and back edges point towards an ancestor. The walk uses
//! explicit frames so that long paths do not grow the call stack.

use std::collections::HashSet;

use crate::graph::{Edge, Graph, NodeId};

use super::types::{EdgeId, OrientedGraph, Orientation};

/// One node on the explicit DFS stack and the index of its next neighbour.
struct Frame {
    node: NodeId,
    next: usize,
}

impl Frame {
    fn new(node: NodeId) -> Self {
        Self { node, next: 0 }
    }
}

/// Mutable state of the orientation walk.
struct Orienter<'a> {
    g: &'a Graph,
    dfs: OrientedGraph,
    height: Vec<Option<usize>>,
    lowpt: Vec<usize>,
    lowpt2: Vec<usize>,
    nesting_depth: Vec<usize>,
    parent_edge: Vec<Option<EdgeId>>,
    classified: HashSet<Edge>,
    roots: Vec<NodeId>,
}

/// Orient `g` along a DFS forest and compute all per-edge attributes.
pub(crate) fn orient(g: &Graph) -> Orientation {
    let n = g.number_of_nodes();
    let m = g.number_of_edges();
    let mut o = Orienter {
        g,
        dfs: OrientedGraph::new(n),
        height: vec![None; n],
        lowpt: Vec::with_capacity(m),
        lowpt2: Vec::with_capacity(m),
        nesting_depth: Vec::with_capacity(m),
        parent_edge: vec![None; n],
        classified: HashSet::with_capacity(m),
        roots: Vec::new(),
    };
    for root in 0..n {
        if o.height[root].is_none() {
            o.height[root] = Some(0);
            o.roots.push(root);
            o.walk(root);
        }
    }
    tracing::debug!(
        nodes = n,
        edges = o.dfs.number_of_edges(),
        roots = o.roots.len(),
        "dfs orientation"
    );
    let height = o
        .height
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .expect("orientation visits every node");
    Orientation {
        dfs: o.dfs,
        height,
        lowpt: o.lowpt,
        lowpt2: o.lowpt2,
        nesting_depth: o.nesting_depth,
        parent_edge: o.parent_edge,
        roots: o.roots,
    }
}

impl Orienter<'_> {
    #[inline]
    fn height_of(&self, x: NodeId) -> usize {
        self.height[x].expect("height is set when a node is discovered")
    }

    fn walk(&mut self, root: NodeId) {
        let mut frames = vec![Frame::new(root)];
        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            let Some(&w) = self.g.neighbors(v).get(frame.next) else {
                frames.pop();
                // v is done; its tree edge can now be folded into the parent.
                if let Some(e) = self.parent_edge[v] {
                    self.finish_edge(e);
                }
                continue;
            };
            frame.next += 1;
            if v == w || !self.classified.insert(Edge::new(v, w)) {
                continue;
            }
            let hv = self.height_of(v);
            let vw = self.dfs.add_edge(v, w);
            self.lowpt.push(hv);
            self.lowpt2.push(hv);
            self.nesting_depth.push(0);
            match self.height[w] {
                None => {
                    // tree edge
                    self.parent_edge[w] = Some(vw);
                    self.height[w] = Some(hv + 1);
                    frames.push(Frame::new(w));
                }
                Some(hw) => {
                    // back edge
                    self.lowpt[vw.0] = hw;
                    self.finish_edge(vw);
                }
            }
        }
    }

    /// Fix the nesting depth of `vw` (its low points are final) and fold its
    /// low points into the tree edge entering `v`.
    fn finish_edge(&mut self, vw: EdgeId) {
        let v = self.dfs.source(vw);
        let hv = self.height_of(v);
        let (low, low2) = (self.lowpt[vw.0], self.lowpt2[vw.0]);
        // chordal edges (two distinct return heights below v) nest outside
        self.nesting_depth[vw.0] = 2 * low + usize::from(low2 < hv);
        let Some(e) = self.parent_edge[v] else {
            return;
        };
        let (elow, elow2) = (self.lowpt[e.0], self.lowpt2[e.0]);
        if low < elow {
            self.lowpt2[e.0] = elow.min(low2);
            self.lowpt[e.0] = low;
        } else if low > elow {
            self.lowpt2[e.0] = elow2.min(low);
        } else {
            self.lowpt2[e.0] = elow2.min(low2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_all_tree_edges() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let o = orient(&g);
        assert_eq!(o.roots, vec![0]);
        assert_eq!(o.height, vec![0, 1, 2, 3]);
        assert_eq!(o.dfs.number_of_edges(), 3);
        for k in 0..3 {
            let e = EdgeId(k);
            assert!(o.is_tree_edge(e));
            assert_eq!(o.dfs.source(e), k);
            assert_eq!(o.dfs.target(e), k + 1);
            // no return edges: both low points stay at the source height
            assert_eq!(o.lowpt[k], k);
            assert_eq!(o.lowpt2[k], k);
            assert_eq!(o.nesting_depth[k], 2 * k);
        }
    }

    #[test]
    fn triangle_back_edge_lowers_parent_edges() {
        let g = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let o = orient(&g);
        assert_eq!(o.height, vec![0, 1, 2]);
        // edges in creation order: 0->1, 1->2, 2->0
        assert_eq!(o.dfs.edge_ends(), &[(0, 1), (1, 2), (2, 0)]);
        assert!(!o.is_tree_edge(EdgeId(2)));
        assert_eq!(o.lowpt, vec![0, 0, 0]);
        assert_eq!(o.lowpt2, vec![0, 1, 2]);
        // back edge 2->0: lowpt 0, lowpt2 = height(2) -> not chordal
        assert_eq!(o.nesting_depth[2], 0);
        assert_eq!(o.nesting_depth[1], 0);
        assert_eq!(o.nesting_depth[0], 0);
    }

    #[test]
    fn chordal_edge_gets_parity_bit() {
        // 0-1-2-3 path with back edges 3->0 and 3->1.
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (3, 1)]).unwrap();
        let o = orient(&g);
        assert_eq!(o.height, vec![0, 1, 2, 3]);
        // tree edge 2->3 is EdgeId(2): returns to heights 0 and 1, both below 2
        assert_eq!(o.lowpt[2], 0);
        assert_eq!(o.lowpt2[2], 1);
        assert_eq!(o.nesting_depth[2], 1);
        // tree edge 1->2: lowpt2 = 1, not below height(1)
        assert_eq!(o.lowpt[1], 0);
        assert_eq!(o.lowpt2[1], 1);
        assert_eq!(o.nesting_depth[1], 0);
    }

    #[test]
    fn forest_restarts_heights_per_root() {
        let g = Graph::from_edges(5, [(0, 1), (2, 3), (3, 4)]).unwrap();
        let o = orient(&g);
        assert_eq!(o.roots, vec![0, 2]);
        assert_eq!(o.height, vec![0, 1, 0, 1, 2]);
        assert_eq!(o.parent_edge[0], None);
        assert_eq!(o.parent_edge[2], None);
    }

    #[test]
    fn self_loops_and_parallel_edges_are_classified_once() {
        let g = Graph::from_edges(2, [(0, 0), (0, 1), (1, 0), (0, 1)]).unwrap();
        let o = orient(&g);
        assert_eq!(o.dfs.number_of_edges(), 1);
        assert_eq!(o.dfs.out_edges(0), &[EdgeId(0)]);
        assert!(o.dfs.out_edges(1).is_empty());
    }

    #[test]
    fn heights_increase_along_tree_edges() {
        let g = crate::families::grid(6, 7);
        let o = orient(&g);
        for (k, &(s, t)) in o.dfs.edge_ends().iter().enumerate() {
            if o.is_tree_edge(EdgeId(k)) {
                assert_eq!(o.height[t], o.height[s] + 1);
                assert!(o.lowpt[k] <= o.lowpt2[k]);
            } else {
                assert!(o.height[t] < o.height[s]);
            }
        }
    }
}
