use std::{
    fmt::Write as _,
    time::{Duration, Instant},
};

use crate::{
    Result, candidates::CandidateIndex, construct::greedy_tour, instance::Instance,
    io::options::SolverOptions, io::tsplib, tour::Tour, two_opt,
};

/// Outcome of one solver run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub n: usize,
    pub initial_length: f64,
    pub optimized_length: f64,
    pub passes: usize,
    pub moves: usize,
    pub order: Vec<usize>,
}

impl RunReport {
    /// Serializes the report in the output format: both lengths, then the
    /// visiting order as one space-separated line of 0-based indices.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Initial tour length: {:.2}", self.initial_length);
        let _ = writeln!(out, "Optimized tour length: {:.2}", self.optimized_length);
        let mut sep = "";
        for idx in &self.order {
            let _ = write!(out, "{sep}{idx}");
            sep = " ";
        }
        out.push('\n');
        out
    }
}

/// Loads the instance and runs the full pipeline: candidate lists, greedy
/// construction, then 2-opt passes until a local optimum or until the
/// optional time budget runs out. A budget cut-off still leaves a complete
/// valid cycle, since the invariant holds at every pass boundary.
pub fn run(options: &SolverOptions) -> Result<RunReport> {
    let instance = tsplib::load_instance(&options.input)?;
    Ok(solve(&instance, options))
}

/// The pipeline on an already-loaded instance.
pub fn solve(instance: &Instance, options: &SolverOptions) -> RunReport {
    let started = Instant::now();
    let n = instance.n();
    log::info!("solve: start n={n} max_candidates={}", options.max_candidates);

    let candidates = CandidateIndex::build(instance, options.max_candidates);
    let (order, initial_length) = greedy_tour(instance);
    let mut tour = Tour::from_order(&order);
    log::info!("solve: greedy length={initial_length:.2}");

    let deadline = options
        .time_budget
        .map(|secs| started + Duration::from_secs_f64(secs));

    let mut passes = 0;
    let mut moves = 0;
    loop {
        passes += 1;
        let accepted = two_opt::run_pass(&mut tour, instance, &candidates);
        moves += accepted;
        log::debug!("solve: pass={passes} moves={accepted}");
        if accepted == 0 {
            break;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            log::warn!("solve: time budget exhausted after pass={passes}");
            break;
        }
    }

    let optimized_length = tour.length(instance);
    log::info!(
        "solve: done n={n} initial={initial_length:.2} optimized={optimized_length:.2} \
         passes={passes} moves={moves} time={:.2}s",
        started.elapsed().as_secs_f64()
    );

    RunReport {
        n,
        initial_length,
        optimized_length,
        passes,
        moves,
        order: tour.order(),
    }
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::{instance::Instance, io::options::SolverOptions, node::Node};

    fn solve_default(instance: &Instance) -> super::RunReport {
        solve(instance, &SolverOptions::default())
    }

    #[test]
    fn square_instance_ends_at_the_perimeter_tour() {
        let instance = Instance::new(vec![
            Node::new(0.0, 0.0),
            Node::new(0.0, 10.0),
            Node::new(10.0, 10.0),
            Node::new(10.0, 0.0),
        ])
        .expect("square instance");

        let report = solve_default(&instance);
        assert_eq!(report.n, 4);
        assert_eq!(report.initial_length, 40.0);
        assert_eq!(report.optimized_length, 40.0);
        assert_eq!(report.moves, 0);
        assert_eq!(report.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_node_instance_yields_the_trivial_tour() {
        let instance = Instance::new(vec![Node::new(5.0, 5.0)]).expect("single instance");
        let report = solve_default(&instance);
        assert_eq!(report.initial_length, 0.0);
        assert_eq!(report.optimized_length, 0.0);
        assert_eq!(report.order, vec![0]);
    }

    #[test]
    fn empty_instance_yields_an_empty_tour() {
        let instance = Instance::new(Vec::new()).expect("empty instance");
        let report = solve_default(&instance);
        assert_eq!(report.optimized_length, 0.0);
        assert!(report.order.is_empty());
    }

    #[test]
    fn optimized_length_never_exceeds_the_initial_length() {
        let instance = Instance::new(
            (0..36)
                .map(|i| Node::new((i % 6) as f64 * 17.0, (i / 6) as f64 * 11.0))
                .collect(),
        )
        .expect("grid instance");

        let report = solve_default(&instance);
        assert!(report.optimized_length <= report.initial_length);
        let mut order = report.order.clone();
        order.sort_unstable();
        assert_eq!(order, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn zero_time_budget_still_returns_a_complete_tour() {
        let instance = Instance::new(
            (0..25)
                .map(|i| Node::new((i % 5) as f64 * 9.0, (i / 5) as f64 * 9.0))
                .collect(),
        )
        .expect("grid instance");
        let options = SolverOptions {
            time_budget: Some(0.0),
            ..SolverOptions::default()
        };

        let report = solve(&instance, &options);
        let mut order = report.order.clone();
        order.sort_unstable();
        assert_eq!(order, (0..25).collect::<Vec<_>>());
        assert!(report.optimized_length <= report.initial_length);
    }

    #[test]
    fn render_lists_lengths_then_the_order() {
        let report = super::RunReport {
            n: 3,
            initial_length: 12.0,
            optimized_length: 10.0,
            passes: 2,
            moves: 1,
            order: vec![0, 2, 1],
        };
        assert_eq!(
            report.render(),
            "Initial tour length: 12.00\nOptimized tour length: 10.00\n0 2 1\n"
        );
    }
}
