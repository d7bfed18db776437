//! Constrained testing DFS over the reordered orientation.
//!
//! Walks each DFS tree again, visiting out-edges in nesting-depth order. Every
//! back edge pushes a conflict pair; when an edge returns, its return edges
//! are merged into the constraints of its siblings (`add_constraints`), and
//! when a node is left, return edges ending at its parent are trimmed
//! (`remove_back_edges`). The first merge that cannot keep both sides
//! consistent yields `Err(Conflict)`, which ends the run.
//!
//! The conflict stack is a plain `Vec`; the stack bottom of an edge is the
//! stack length at the moment the edge is entered.

use crate::graph::NodeId;

use super::interval::{ConflictPair, Interval};
use super::types::{Conflict, EdgeId, Orientation};

struct Frame {
    node: NodeId,
    next: usize,
}

/// Testing-pass state carried through the walk.
pub(crate) struct LrTester<'a> {
    o: &'a Orientation,
    lowpt_edge: Vec<Option<EdgeId>>,
    refs: Vec<Option<EdgeId>>,
    stack_bottom: Vec<usize>,
    stack: Vec<ConflictPair>,
}

impl<'a> LrTester<'a> {
    pub fn new(o: &'a Orientation) -> Self {
        let m = o.dfs.number_of_edges();
        Self {
            o,
            lowpt_edge: vec![None; m],
            refs: vec![None; m],
            stack_bottom: vec![0; m],
            stack: Vec::new(),
        }
    }

    /// Test every DFS tree; `Err` carries the edge that exposed the conflict.
    pub fn run(mut self) -> Result<(), Conflict> {
        for &root in &self.o.roots {
            self.stack.clear();
            self.test_tree(root)?;
        }
        Ok(())
    }

    fn test_tree(&mut self, root: NodeId) -> Result<(), Conflict> {
        let o = self.o;
        let mut frames = vec![Frame {
            node: root,
            next: 0,
        }];
        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            let Some(&ei) = o.dfs.out_edges(v).get(frame.next) else {
                frames.pop();
                if let Some(e) = o.parent_edge[v] {
                    self.remove_back_edges(e);
                    // resume the parent right after its tree edge `e`
                    self.integrate(o.dfs.source(e), e)?;
                }
                continue;
            };
            frame.next += 1;
            self.stack_bottom[ei.0] = self.stack.len();
            if o.is_tree_edge(ei) {
                frames.push(Frame {
                    node: o.dfs.target(ei),
                    next: 0,
                });
                continue;
            }
            self.lowpt_edge[ei.0] = Some(ei);
            self.stack.push(ConflictPair::back_edge(ei));
            self.integrate(v, ei)?;
        }
        Ok(())
    }

    /// Fold the return edges of the finished out-edge `ei` of `v` into the
    /// constraints of the tree edge entering `v`.
    fn integrate(&mut self, v: NodeId, ei: EdgeId) -> Result<(), Conflict> {
        let o = self.o;
        if o.lowpt[ei.0] >= o.height[v] {
            // no return edge below v
            return Ok(());
        }
        let e = o.parent_edge[v].expect("a node with return edges below it is not a root");
        if o.dfs.out_edges(v).first() == Some(&ei) {
            self.lowpt_edge[e.0] = self.lowpt_edge[ei.0];
            Ok(())
        } else {
            self.add_constraints(ei, e)
        }
    }

    #[inline]
    fn lowpt_of(&self, x: Option<EdgeId>) -> usize {
        let x = x.expect("non-empty interval has both ends");
        self.o.lowpt[x.0]
    }

    #[inline]
    fn set_ref(&mut self, x: Option<EdgeId>, to: Option<EdgeId>) {
        if let Some(x) = x {
            self.refs[x.0] = to;
        }
    }

    fn add_constraints(&mut self, ei: EdgeId, e: EdgeId) -> Result<(), Conflict> {
        let o = self.o;
        let lowpt = o.lowpt.as_slice();
        let mut p = ConflictPair::default();

        // merge return edges of ei into p.right
        loop {
            let mut q = self
                .stack
                .pop()
                .expect("ei left its return edges on the conflict stack");
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return Err(Conflict { edge: ei });
            }
            if self.lowpt_of(q.right.low) > lowpt[e.0] {
                if p.right.is_empty() {
                    p.right = q.right;
                } else {
                    self.set_ref(p.right.low, q.right.high);
                }
                p.right.low = q.right.low;
            } else {
                // align with the lowest return edge of e
                self.set_ref(q.right.low, self.lowpt_edge[e.0]);
            }
            if self.stack.len() == self.stack_bottom[ei.0] {
                break;
            }
        }

        // merge conflicting return edges of earlier siblings into p.left
        while let Some(top) = self.stack.last() {
            if !(top.left.conflicting(ei, lowpt) || top.right.conflicting(ei, lowpt)) {
                break;
            }
            let mut q = self.stack.pop().expect("top was just inspected");
            if q.right.conflicting(ei, lowpt) {
                q.swap();
            }
            if q.right.conflicting(ei, lowpt) {
                return Err(Conflict { edge: ei });
            }
            self.set_ref(p.right.low, q.right.high);
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left = q.left;
            } else {
                self.set_ref(p.left.low, q.left.high);
            }
            p.left.low = q.left.low;
        }

        if !p.is_empty() {
            self.stack.push(p);
        }
        Ok(())
    }

    /// Drop return edges ending at the parent `u` of `e = (u, v)` and record
    /// the highest remaining return edge of `e` as its reference.
    fn remove_back_edges(&mut self, e: EdgeId) {
        let o = self.o;
        let u = o.dfs.source(e);
        let hu = o.height[u];

        // whole pairs whose lowest return edge ends at u
        while self.stack.last().and_then(|p| p.lowest(&o.lowpt)) == Some(hu) {
            self.stack.pop();
        }

        // one more pair may end partially at u
        if let Some(mut p) = self.stack.pop() {
            self.trim(&mut p.left, p.right.low, u);
            self.trim(&mut p.right, p.left.low, u);
            self.stack.push(p);
        }

        if o.lowpt[e.0] < hu {
            let top = self
                .stack
                .last()
                .expect("return edges of e remain on the conflict stack");
            let (hl, hr) = (top.left.high, top.right.high);
            self.refs[e.0] = match (hl, hr) {
                (Some(l), Some(r)) if o.lowpt[l.0] > o.lowpt[r.0] => Some(l),
                (Some(l), None) => Some(l),
                _ => hr,
            };
        }
    }

    /// Move the high end of `side` down past return edges ending at `u`; if
    /// nothing is left, empty the side and link its low end to `other_low`.
    fn trim(&mut self, side: &mut Interval, other_low: Option<EdgeId>, u: NodeId) {
        while let Some(h) = side.high {
            if self.o.dfs.target(h) != u {
                break;
            }
            side.high = self.refs[h.0];
        }
        if side.high.is_none() && side.low.is_some() {
            self.set_ref(side.low, other_low);
            side.low = None;
        }
    }
}
