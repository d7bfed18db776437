//! Adjacency reordering by nesting depth.
//!
//! Counting sort over all oriented edges: nesting depths are below `2n`, so one
//! bucket per value keeps the pass linear. Edges are visited in id order, which
//! makes the sort stable per node.

use super::types::{EdgeId, OrientedGraph};

pub(crate) fn sort_by_nesting_depth(dfs: &mut OrientedGraph, nesting_depth: &[usize]) {
    let Some(&max_depth) = nesting_depth.iter().max() else {
        return;
    };
    let mut buckets: Vec<Vec<EdgeId>> = vec![Vec::new(); max_depth + 1];
    for (k, &d) in nesting_depth.iter().enumerate() {
        buckets[d].push(EdgeId(k));
    }
    let sources: Vec<_> = (0..dfs.number_of_edges())
        .map(|k| dfs.source(EdgeId(k)))
        .collect();
    let out = dfs.out_lists_mut();
    for list in out.iter_mut() {
        list.clear();
    }
    for e in buckets.into_iter().flatten() {
        out[sources[e.0]].push(e);
    }
}
