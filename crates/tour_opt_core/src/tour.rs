use crate::instance::Instance;

/// A single cycle over all node indices, stored as parallel successor and
/// predecessor arrays. The cycle is undirected; traversal direction is
/// bookkeeping only. Invariants after construction and after every
/// accepted move: `next[prev[i]] == i`, `prev[next[i]] == i`, and following
/// `next` from any node visits all nodes exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl Tour {
    /// Links the cycle to follow `order` in sequence, wrapping last to first.
    /// `order` must be a permutation of `0..order.len()`.
    pub fn from_order(order: &[usize]) -> Self {
        let n = order.len();
        let mut next = vec![0; n];
        let mut prev = vec![0; n];
        for i in 0..n {
            let j = (i + 1) % n;
            next[order[i]] = order[j];
            prev[order[j]] = order[i];
        }
        Self { next, prev }
    }

    pub fn n(&self) -> usize {
        self.next.len()
    }

    #[inline]
    pub fn successor(&self, i: usize) -> usize {
        self.next[i]
    }

    #[inline]
    pub fn predecessor(&self, i: usize) -> usize {
        self.prev[i]
    }

    /// Total cycle length: one full traversal, each successor edge counted
    /// exactly once.
    pub fn length(&self, instance: &Instance) -> f64 {
        if self.next.is_empty() {
            return 0.0;
        }
        let start = 0;
        let mut curr = start;
        let mut length = 0.0;
        loop {
            let next = self.next[curr];
            length += instance.distance(curr, next);
            curr = next;
            if curr == start {
                break;
            }
        }
        length
    }

    /// The visiting order, read by one traversal anchored at node 0.
    pub fn order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.n());
        if self.next.is_empty() {
            return order;
        }
        let start = 0;
        let mut curr = start;
        loop {
            order.push(curr);
            curr = self.next[curr];
            if curr == start {
                break;
            }
        }
        order
    }

    /// Reverses the path that runs `from ..= to` along `next`, then rewrites
    /// the four boundary links so the flipped segment is reintegrated into
    /// the cycle. O(segment length).
    ///
    /// Preconditions (guaranteed by the caller by construction): `to` is
    /// forward-reachable from `from`, and at least one node lies outside the
    /// segment.
    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        let before = self.prev[from];
        let after = self.next[to];

        let mut curr = from;
        loop {
            let next = self.next[curr];
            self.next[curr] = self.prev[curr];
            self.prev[curr] = next;
            if curr == to {
                break;
            }
            curr = next;
        }

        self.next[before] = to;
        self.prev[to] = before;
        self.next[from] = after;
        self.prev[after] = from;
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let n = self.n();
        for i in 0..n {
            assert_eq!(self.next[self.prev[i]], i, "successor/predecessor mismatch at {i}");
            assert_eq!(self.prev[self.next[i]], i, "predecessor/successor mismatch at {i}");
        }
        if n > 0 {
            assert_eq!(self.order().len(), n, "cycle does not cover all nodes");
        }
    }
}
