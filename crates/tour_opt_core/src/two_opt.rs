use crate::{candidates::CandidateIndex, instance::Instance, tour::Tour};

/// Minimum gain for a move to be accepted. Distances are rounded integers,
/// so any real improvement clears this; it only filters float round-off.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// One candidate-restricted 2-opt pass over all nodes in index order.
///
/// For each node `a` with successor `b`, scans `a`'s candidates `c` in
/// ascending distance; replacing edges `(a, b)` and `(c, d)` with `(a, c)`
/// and `(b, d)` is applied as soon as it wins, by reversing the segment
/// `b ..= c`. An accepted move invalidates `b`, so scanning resumes at the
/// next node. Returns the number of accepted moves.
pub fn run_pass(tour: &mut Tour, instance: &Instance, candidates: &CandidateIndex) -> usize {
    let n = tour.n();
    let mut accepted = 0;
    if n < 4 {
        return accepted;
    }

    for a in 0..n {
        let b = tour.successor(a);
        let dist_ab = instance.distance(a, b);

        for edge in candidates.candidates(a) {
            let c = edge.to;
            // Candidates are sorted ascending, so no later candidate can
            // beat the edge being removed either.
            if edge.dist >= dist_ab {
                break;
            }
            let d = tour.successor(c);
            if c == b || d == a {
                continue;
            }

            let delta =
                dist_ab + instance.distance(c, d) - edge.dist - instance.distance(b, d);
            if delta > IMPROVEMENT_EPSILON {
                tour.reverse_segment(b, c);
                accepted += 1;
                break;
            }
        }
    }

    accepted
}

/// Runs full passes until one accepts no move (a local optimum for the
/// candidate-restricted 2-opt neighborhood). Returns the pass count,
/// including the final zero-move pass.
pub fn improve(tour: &mut Tour, instance: &Instance, candidates: &CandidateIndex) -> usize {
    let mut passes = 0;
    loop {
        passes += 1;
        let moves = run_pass(tour, instance, candidates);
        log::debug!("two_opt: pass={passes} moves={moves}");
        if moves == 0 {
            return passes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{improve, run_pass};
    use crate::{
        candidates::CandidateIndex, construct::greedy_tour, instance::Instance, node::Node,
        tour::Tour,
    };

    fn square_instance() -> Instance {
        Instance::new(vec![
            Node::new(0.0, 0.0),
            Node::new(0.0, 10.0),
            Node::new(10.0, 10.0),
            Node::new(10.0, 0.0),
        ])
        .expect("square instance")
    }

    fn grid_instance(side: usize) -> Instance {
        Instance::new(
            (0..side * side)
                .map(|i| Node::new((i % side) as f64 * 13.0, (i / side) as f64 * 13.0))
                .collect(),
        )
        .expect("grid instance")
    }

    #[test]
    fn uncrosses_a_crossed_square() {
        let instance = square_instance();
        let candidates = CandidateIndex::build(&instance, 3);
        // 0 -> 2 -> 1 -> 3 crosses both diagonals.
        let mut tour = Tour::from_order(&[0, 2, 1, 3]);
        let before = tour.length(&instance);

        improve(&mut tour, &instance, &candidates);
        tour.assert_consistent();
        let after = tour.length(&instance);
        assert!(after < before);
        assert_eq!(after, 40.0);
    }

    #[test]
    fn optimal_square_is_left_unchanged() {
        let instance = square_instance();
        let candidates = CandidateIndex::build(&instance, 3);
        let mut tour = Tour::from_order(&[0, 1, 2, 3]);

        assert_eq!(run_pass(&mut tour, &instance, &candidates), 0);
        assert_eq!(tour.length(&instance), 40.0);
        assert_eq!(tour.order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn passes_never_increase_length_and_converge() {
        let instance = grid_instance(5);
        let candidates = CandidateIndex::build(&instance, 8);
        // A deliberately bad order: stride through the grid.
        let order: Vec<usize> = (0..25).map(|i| (i * 7) % 25).collect();
        let mut tour = Tour::from_order(&order);

        let mut prev_length = tour.length(&instance);
        loop {
            let moves = run_pass(&mut tour, &instance, &candidates);
            tour.assert_consistent();
            let length = tour.length(&instance);
            assert!(length <= prev_length);
            if moves == 0 {
                assert_eq!(length, prev_length);
                break;
            }
            assert!(length < prev_length);
            prev_length = length;
        }
    }

    #[test]
    fn converged_tour_is_a_permutation_and_idempotent() {
        let instance = grid_instance(4);
        let candidates = CandidateIndex::build(&instance, 6);
        let (order, _) = greedy_tour(&instance);
        let mut tour = Tour::from_order(&order);

        improve(&mut tour, &instance, &candidates);
        let settled = tour.length(&instance);
        let mut seen = tour.order();
        seen.sort_unstable();
        assert_eq!(seen, (0..16).collect::<Vec<_>>());

        // Local optimum: another pass accepts nothing and changes nothing.
        assert_eq!(run_pass(&mut tour, &instance, &candidates), 0);
        assert_eq!(tour.length(&instance), settled);
    }

    #[test]
    fn tiny_tours_are_left_alone() {
        let instance = Instance::new(vec![
            Node::new(0.0, 0.0),
            Node::new(1.0, 0.0),
            Node::new(0.0, 1.0),
        ])
        .expect("triangle instance");
        let candidates = CandidateIndex::build(&instance, 2);
        let mut tour = Tour::from_order(&[0, 1, 2]);
        assert_eq!(run_pass(&mut tour, &instance, &candidates), 0);
    }
}
