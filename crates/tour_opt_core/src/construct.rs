use crate::instance::Instance;

/// Greedy nearest-neighbor construction.
///
/// Starts at node 0 and repeatedly extends to the closest unvisited node
/// (ties to the lower index), then closes the cycle back to the start.
/// Deliberately scans all unvisited nodes rather than the candidate lists:
/// a sparse candidate list cannot guarantee an unvisited neighbor, and the
/// constructor must always produce a complete tour.
///
/// Returns the visiting order and the total cycle length. N == 0 yields an
/// empty order, N == 1 a single-node order, both with length zero.
pub fn greedy_tour(instance: &Instance) -> (Vec<usize>, f64) {
    let n = instance.n();
    if n == 0 {
        return (Vec::new(), 0.0);
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    let mut length = 0.0;
    visited[0] = true;
    order.push(0);

    for _ in 1..n {
        let mut best_dist = f64::INFINITY;
        let mut best = usize::MAX;
        for j in 0..n {
            if !visited[j] {
                let d = instance.distance(current, j);
                if d < best_dist {
                    best_dist = d;
                    best = j;
                }
            }
        }

        visited[best] = true;
        order.push(best);
        length += best_dist;
        current = best;
    }

    if n > 1 {
        length += instance.distance(current, order[0]);
    }

    log::debug!("greedy: n={n} length={length:.2}");
    (order, length)
}
