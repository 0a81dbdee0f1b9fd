//! Rivercross Solver - exhaustive search engine
//!
//! This crate provides the search over crossing sequences:
//! - Move generation with the structural crossing filters
//! - Stamina validation
//! - Depth-first branch-and-bound engine with apply/undo backtracking
//! - Optional parallel split on the first level of crossings
//! - Aggregation of every optimal solution
//!
//! Logging levels:
//! - **INFO**: `solve_start` and `solve_end` events
//! - **DEBUG**: `new_best` improvements and parallel merges
//! - **TRACE**: node expansions and tied solutions

pub mod aggregator;
pub mod engine;
pub mod incumbent;
pub mod movegen;
pub mod parallel;
pub mod solution;
pub mod solver;
pub mod stats;
pub mod validator;

pub use aggregator::{aggregate, SolutionSet};
pub use engine::{SearchEngine, SearchOutcome};
pub use incumbent::{Incumbent, Offer, SharedBound};
pub use movegen::{MoveGenerator, Moves};
pub use solution::Solution;
pub use solver::Solver;
pub use stats::SearchStats;
pub use validator::{CrossingValidator, StaminaValidator, Unconstrained};

#[cfg(test)]
mod tests;
