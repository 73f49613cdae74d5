pub mod options;
pub mod tsplib;
