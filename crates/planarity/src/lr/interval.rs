//! Conflict-interval algebra.
//!
//! Pure helpers over [`Interval`] and [`ConflictPair`]; no traversal logic.
//! Low points are looked up in the `lowpt` table produced by the orientation
//! pass, indexed by [`EdgeId`].

use super::types::EdgeId;

/// Range of return edges forced onto one side of the current tree path.
/// `low` is the return edge with the lowest low point, `high` the one with
/// the highest. Empty when both ends are absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Interval {
    pub low: Option<EdgeId>,
    pub high: Option<EdgeId>,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        low: None,
        high: None,
    };

    #[inline]
    pub fn new(low: EdgeId, high: EdgeId) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// True if the interval is non-empty and its highest return edge reaches
    /// strictly above `lowpt[b]`, i.e. `b` cannot be placed on the same side.
    #[inline]
    pub fn conflicting(&self, b: EdgeId, lowpt: &[usize]) -> bool {
        match self.high {
            Some(h) => lowpt[h.0] > lowpt[b.0],
            None => false,
        }
    }
}

/// Two intervals whose return edges must lie on opposite sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ConflictPair {
    pub left: Interval,
    pub right: Interval,
}

impl ConflictPair {
    /// Pair for a freshly seen back edge: the edge alone on the right.
    #[inline]
    pub fn back_edge(e: EdgeId) -> Self {
        Self {
            left: Interval::EMPTY,
            right: Interval::new(e, e),
        }
    }

    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Lowest low point over the low ends of both sides; `None` for an empty pair.
    pub fn lowest(&self, lowpt: &[usize]) -> Option<usize> {
        let l = self.left.low.map(|e| lowpt[e.0]);
        let r = self.right.low.map(|e| lowpt[e.0]);
        match (l, r) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // edge k has low point LOWPT[k]
    const LOWPT: [usize; 5] = [0, 1, 1, 3, 2];

    fn e(k: usize) -> EdgeId {
        EdgeId(k)
    }

    #[test]
    fn empty_interval() {
        assert!(Interval::EMPTY.is_empty());
        assert!(Interval::default().is_empty());
        assert!(!Interval::new(e(0), e(0)).is_empty());
        // half-open states count as non-empty
        let half = Interval {
            low: Some(e(1)),
            high: None,
        };
        assert!(!half.is_empty());
    }

    #[test]
    fn interval_equality_is_structural() {
        assert_eq!(Interval::new(e(1), e(2)), Interval::new(e(1), e(2)));
        assert_ne!(Interval::new(e(1), e(2)), Interval::new(e(2), e(1)));
        assert_ne!(Interval::new(e(1), e(1)), Interval::EMPTY);
    }

    #[test]
    fn conflicting_empty_never_conflicts() {
        for b in 0..LOWPT.len() {
            assert!(!Interval::EMPTY.conflicting(e(b), &LOWPT));
        }
    }

    #[test]
    fn conflicting_is_strict_on_high_end() {
        // high = e3 with lowpt 3
        let iv = Interval::new(e(0), e(3));
        assert!(iv.conflicting(e(0), &LOWPT)); // 3 > 0
        assert!(iv.conflicting(e(1), &LOWPT)); // 3 > 1
        assert!(iv.conflicting(e(4), &LOWPT)); // 3 > 2
        assert!(!iv.conflicting(e(3), &LOWPT)); // 3 == 3
    }

    #[test]
    fn conflicting_ignores_low_end() {
        // low = e3 (lowpt 3) but high = e1 (lowpt 1)
        let iv = Interval::new(e(3), e(1));
        assert!(!iv.conflicting(e(2), &LOWPT)); // 1 == 1
        assert!(!iv.conflicting(e(4), &LOWPT)); // 1 < 2
        assert!(iv.conflicting(e(0), &LOWPT)); // 1 > 0
    }

    #[test]
    fn conflicting_all_pairs_matches_lowpoint_order() {
        for h in 0..LOWPT.len() {
            for b in 0..LOWPT.len() {
                let iv = Interval::new(e(0), e(h));
                assert_eq!(iv.conflicting(e(b), &LOWPT), LOWPT[h] > LOWPT[b]);
            }
        }
    }

    #[test]
    fn back_edge_pair_sits_on_the_right() {
        let p = ConflictPair::back_edge(e(4));
        assert!(p.left.is_empty());
        assert_eq!(p.right, Interval::new(e(4), e(4)));
        assert!(!p.is_empty());
    }

    #[test]
    fn swap_exchanges_sides_and_is_an_involution() {
        let orig = ConflictPair {
            left: Interval::new(e(1), e(3)),
            right: Interval::new(e(0), e(2)),
        };
        let mut p = orig;
        p.swap();
        assert_eq!(p.left, orig.right);
        assert_eq!(p.right, orig.left);
        p.swap();
        assert_eq!(p, orig);
    }

    #[test]
    fn lowest_low_point() {
        let both = ConflictPair {
            left: Interval::new(e(3), e(3)),
            right: Interval::new(e(4), e(3)),
        };
        assert_eq!(both.lowest(&LOWPT), Some(2));
        let left_only = ConflictPair {
            left: Interval::new(e(1), e(3)),
            right: Interval::EMPTY,
        };
        assert_eq!(left_only.lowest(&LOWPT), Some(1));
        let right_only = ConflictPair::back_edge(e(0));
        assert_eq!(right_only.lowest(&LOWPT), Some(0));
        assert_eq!(ConflictPair::default().lowest(&LOWPT), None);
        assert!(ConflictPair::default().is_empty());
    }

    #[test]
    fn lowest_is_symmetric_under_swap() {
        for a in 0..LOWPT.len() {
            for b in 0..LOWPT.len() {
                let mut p = ConflictPair {
                    left: Interval::new(e(a), e(a)),
                    right: Interval::new(e(b), e(b)),
                };
                let before = p.lowest(&LOWPT);
                p.swap();
                assert_eq!(p.lowest(&LOWPT), before);
                assert_eq!(before, Some(LOWPT[a].min(LOWPT[b])));
            }
        }
    }
}
