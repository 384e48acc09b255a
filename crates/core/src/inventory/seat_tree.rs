//! Segment tree over seat positions
//!
//! Tracks which seats are free and answers contiguous-run queries without
//! scanning every seat: each node carries the longest free prefix, suffix,
//! and best run of its span, so point updates and "leftmost run of length
//! >= k" both run in O(log N). Run enumeration skips subtrees that are
//! uniformly free or uniformly occupied.

use serde::{Deserialize, Serialize};

/// An inclusive range of contiguous free seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRange {
    pub start: u32,
    pub end: u32,
}

impl SeatRange {
    /// Number of seats in the range (start <= end by construction)
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    /// Longest free prefix of this span
    pref: u32,
    /// Longest free suffix of this span
    suf: u32,
    /// Longest free run anywhere in this span
    best: u32,
}

/// Seats are numbered 1..=len. All seats start free.
#[derive(Debug, Clone)]
pub struct SeatTree {
    len: u32,
    nodes: Vec<Node>,
}

impl SeatTree {
    pub fn new(len: u32) -> Self {
        debug_assert!(len > 0, "seat tree requires at least one seat");
        let mut tree = Self {
            len,
            nodes: vec![Node::default(); 4 * len as usize],
        };
        tree.build(1, 1, len);
        tree
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    /// Longest contiguous free run
    pub fn max_free(&self) -> u32 {
        self.nodes[1].best
    }

    /// Mark a seat occupied (booked or buffered)
    pub fn set_occupied(&mut self, seat: u32) {
        debug_assert!((1..=self.len).contains(&seat));
        self.update(1, 1, self.len, seat, false);
    }

    /// Mark a seat free again
    pub fn set_free(&mut self, seat: u32) {
        debug_assert!((1..=self.len).contains(&seat));
        self.update(1, 1, self.len, seat, true);
    }

    /// Start of the leftmost free run of length >= k, if one exists
    pub fn leftmost_run(&self, k: u32) -> Option<u32> {
        if k == 0 || self.nodes[1].best < k {
            return None;
        }
        Some(self.descend(1, 1, self.len, k))
    }

    /// All maximal free runs, ascending by start seat
    pub fn free_runs(&self) -> Vec<SeatRange> {
        let mut runs = Vec::new();
        let mut open: Option<SeatRange> = None;
        self.collect(1, 1, self.len, &mut runs, &mut open);
        if let Some(run) = open {
            runs.push(run);
        }
        runs
    }

    /// Smallest free run of length >= k; ties broken by lowest start
    pub fn best_fit(&self, k: u32) -> Option<SeatRange> {
        if k == 0 || self.nodes[1].best < k {
            return None;
        }
        // Runs come back in ascending start order, so a strict `<` keeps
        // the lowest start among equal lengths.
        self.free_runs()
            .into_iter()
            .filter(|r| r.len() >= k)
            .fold(None, |acc: Option<SeatRange>, r| match acc {
                Some(best) if best.len() <= r.len() => Some(best),
                _ => Some(r),
            })
    }

    fn build(&mut self, idx: usize, lo: u32, hi: u32) {
        let len = hi - lo + 1;
        self.nodes[idx] = Node {
            pref: len,
            suf: len,
            best: len,
        };
        if lo < hi {
            let mid = (lo + hi) / 2;
            self.build(idx * 2, lo, mid);
            self.build(idx * 2 + 1, mid + 1, hi);
        }
    }

    fn update(&mut self, idx: usize, lo: u32, hi: u32, seat: u32, free: bool) {
        if lo == hi {
            let v = if free { 1 } else { 0 };
            self.nodes[idx] = Node {
                pref: v,
                suf: v,
                best: v,
            };
            return;
        }
        let mid = (lo + hi) / 2;
        if seat <= mid {
            self.update(idx * 2, lo, mid, seat, free);
        } else {
            self.update(idx * 2 + 1, mid + 1, hi, seat, free);
        }
        self.nodes[idx] = Self::merge(
            self.nodes[idx * 2],
            self.nodes[idx * 2 + 1],
            mid - lo + 1,
            hi - mid,
        );
    }

    fn merge(left: Node, right: Node, llen: u32, rlen: u32) -> Node {
        Node {
            pref: if left.pref == llen {
                llen + right.pref
            } else {
                left.pref
            },
            suf: if right.suf == rlen {
                rlen + left.suf
            } else {
                right.suf
            },
            best: left.best.max(right.best).max(left.suf + right.pref),
        }
    }

    // Caller has verified a run of length k exists below idx.
    fn descend(&self, idx: usize, lo: u32, hi: u32, k: u32) -> u32 {
        if lo == hi {
            return lo;
        }
        let mid = (lo + hi) / 2;
        let left = self.nodes[idx * 2];
        let right = self.nodes[idx * 2 + 1];
        if left.best >= k {
            self.descend(idx * 2, lo, mid, k)
        } else if left.suf + right.pref >= k {
            mid - left.suf + 1
        } else {
            self.descend(idx * 2 + 1, mid + 1, hi, k)
        }
    }

    fn collect(
        &self,
        idx: usize,
        lo: u32,
        hi: u32,
        runs: &mut Vec<SeatRange>,
        open: &mut Option<SeatRange>,
    ) {
        let node = self.nodes[idx];
        let len = hi - lo + 1;
        if node.best == 0 {
            // Fully occupied: whatever run was building is complete.
            if let Some(run) = open.take() {
                runs.push(run);
            }
            return;
        }
        if node.best == len {
            // Fully free: extends the open run or starts a new one.
            match open {
                Some(run) if run.end + 1 == lo => run.end = hi,
                _ => {
                    if let Some(run) = open.take() {
                        runs.push(run);
                    }
                    *open = Some(SeatRange { start: lo, end: hi });
                }
            }
            return;
        }
        let mid = (lo + hi) / 2;
        self.collect(idx * 2, lo, mid, runs, open);
        self.collect(idx * 2 + 1, mid + 1, hi, runs, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(tree: &mut SeatTree, seats: &[u32]) {
        for &s in seats {
            tree.set_occupied(s);
        }
    }

    #[test]
    fn test_fresh_tree_is_one_run() {
        let tree = SeatTree::new(10);
        assert_eq!(tree.max_free(), 10);
        assert_eq!(tree.free_runs(), vec![SeatRange { start: 1, end: 10 }]);
        assert_eq!(tree.leftmost_run(10), Some(1));
        assert_eq!(tree.leftmost_run(11), None);
    }

    #[test]
    fn test_update_splits_runs() {
        let mut tree = SeatTree::new(10);
        occupy(&mut tree, &[4, 8]);
        assert_eq!(
            tree.free_runs(),
            vec![
                SeatRange { start: 1, end: 3 },
                SeatRange { start: 5, end: 7 },
                SeatRange { start: 9, end: 10 },
            ]
        );
        assert_eq!(tree.max_free(), 3);

        tree.set_free(4);
        assert_eq!(tree.max_free(), 7);
        assert_eq!(tree.leftmost_run(7), Some(1));
    }

    #[test]
    fn test_leftmost_run_crosses_midpoint() {
        let mut tree = SeatTree::new(8);
        // Free run 3..=6 straddles the root midpoint.
        occupy(&mut tree, &[1, 2, 7, 8]);
        assert_eq!(tree.leftmost_run(4), Some(3));
        assert_eq!(tree.leftmost_run(5), None);
    }

    #[test]
    fn test_best_fit_prefers_smallest_block() {
        let mut tree = SeatTree::new(20);
        // Runs: [1-5] and [10-20]
        occupy(&mut tree, &[6, 7, 8, 9]);
        let fit = tree.best_fit(4).unwrap();
        assert_eq!(fit, SeatRange { start: 1, end: 5 });
        // A request larger than the small run falls through to the big one.
        let fit = tree.best_fit(6).unwrap();
        assert_eq!(fit, SeatRange { start: 10, end: 20 });
    }

    #[test]
    fn test_best_fit_tie_takes_lowest_start() {
        let mut tree = SeatTree::new(11);
        // Runs: [1-3], [5-7], [9-11] all length 3.
        occupy(&mut tree, &[4, 8]);
        assert_eq!(tree.best_fit(3).unwrap(), SeatRange { start: 1, end: 3 });
    }

    #[test]
    fn test_fully_occupied() {
        let mut tree = SeatTree::new(3);
        occupy(&mut tree, &[1, 2, 3]);
        assert_eq!(tree.max_free(), 0);
        assert!(tree.free_runs().is_empty());
        assert_eq!(tree.best_fit(1), None);
    }

    #[test]
    fn test_single_seat_tree() {
        let mut tree = SeatTree::new(1);
        assert_eq!(tree.leftmost_run(1), Some(1));
        tree.set_occupied(1);
        assert_eq!(tree.leftmost_run(1), None);
    }
}
