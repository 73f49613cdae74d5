//! Euclidean TSP heuristic: greedy nearest-neighbor construction followed by
//! candidate-restricted 2-opt local search on a doubly-linked cyclic tour.

mod candidates;
mod construct;
mod error;
mod instance;
mod io;
pub mod logging;
mod node;
mod runner;
mod tour;
mod two_opt;

pub use candidates::{CandidateEdge, CandidateIndex, DEFAULT_MAX_CANDIDATES};
pub use construct::greedy_tour;
pub use error::{Error, Result};
pub use instance::Instance;
pub use io::options::{LogFormat, LogLevel, SolverOptions};
pub use io::tsplib::{load_instance, parse_instance};
pub use node::Node;
pub use runner::{RunReport, run, solve};
pub use tour::Tour;
pub use two_opt::{improve, run_pass};
