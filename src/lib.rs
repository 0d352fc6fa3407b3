//! Sliding Puzzle Solver Library
//!
//! Solves the n²−1 sliding-tile puzzle optimally with A*, and detects
//! unsolvable boards by searching a twin board alongside the original.

pub mod board;
pub mod error;
pub mod input;
pub mod report;
pub mod solver;

pub use board::Board;
pub use error::{BoardError, InputError, SolveError};
pub use solver::{SearchConfig, SearchStats, Solver};
