use crate::instance::Instance;

/// Default number of nearest neighbors kept per node.
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// One candidate edge out of the owning node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateEdge {
    pub to: usize,
    pub dist: f64,
}

/// Per-node nearest-neighbor lists, sorted ascending by distance.
/// Built once from the instance and read-only afterwards.
#[derive(Clone, Debug)]
pub struct CandidateIndex {
    lists: Vec<Vec<CandidateEdge>>,
}

impl CandidateIndex {
    /// Selects for every node `i` the `k` nodes `j != i` minimizing
    /// `distance(i, j)`, ties broken by the lower node index. `k` is clamped
    /// to `N - 1`; N <= 1 yields empty lists. The scan is O(N^2) with a
    /// bounded sorted buffer per node.
    pub fn build(instance: &Instance, k: usize) -> Self {
        let n = instance.n();
        let k = k.min(n.saturating_sub(1));
        if k == 0 {
            return Self {
                lists: vec![Vec::new(); n],
            };
        }

        let lists = (0..n)
            .map(|i| {
                let mut buffer: Vec<CandidateEdge> = Vec::with_capacity(k + 1);
                for j in 0..n {
                    if j == i {
                        continue;
                    }
                    let edge = CandidateEdge {
                        to: j,
                        dist: instance.distance(i, j),
                    };
                    if buffer.len() == k {
                        // Full buffer: only a strictly closer node displaces
                        // the current worst, so equal distances keep the
                        // earlier (lower) index.
                        let worst = buffer[k - 1];
                        if edge.dist >= worst.dist {
                            continue;
                        }
                        buffer.pop();
                    }
                    let at = buffer.partition_point(|held| {
                        held.dist
                            .total_cmp(&edge.dist)
                            .then(held.to.cmp(&edge.to))
                            .is_lt()
                    });
                    buffer.insert(at, edge);
                }
                buffer
            })
            .collect();

        log::debug!("candidates: built n={n} k={k}");
        Self { lists }
    }

    /// The candidates of node `i`, ascending by distance.
    pub fn candidates(&self, i: usize) -> &[CandidateEdge] {
        &self.lists[i]
    }

    pub fn n(&self) -> usize {
        self.lists.len()
    }
}
