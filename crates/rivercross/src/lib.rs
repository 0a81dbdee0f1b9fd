//! Rivercross - optimal river crossing schedules
//!
//! Finds every minimum-time schedule that moves a herd of horses across a
//! river, given a boat capacity and an optional per-horse stamina limit.
//!
//! # Example
//!
//! ```rust
//! use rivercross::prelude::*;
//!
//! let config = CrossingConfig::new(vec![1, 2, 5, 10], 2);
//! let report = rivercross::solve(&config).unwrap();
//!
//! assert_eq!(report.num_of_solutions, 2);
//! assert_eq!(report.best_total(), Some(17));
//! ```

pub mod console;
pub mod report;

pub use report::{ReportError, SolutionEntry, SolutionReport};

pub use rivercross_config::{ConfigError, CrossingConfig, LabelStyle, SearchConfig, StaminaMode};
pub use rivercross_core::{Bank, BankState, Crossing, Direction, Herd, HorseId};
pub use rivercross_solver::{SearchOutcome, SearchStats, Solution, Solver};

/// Validates `config`, runs the search and builds the report.
pub fn solve(config: &CrossingConfig) -> Result<SolutionReport, ConfigError> {
    let solver = Solver::from_config(config)?;
    let outcome = solver.solve();
    Ok(SolutionReport::from_outcome(&outcome, solver.herd()))
}

pub mod prelude {
    pub use super::{solve, CrossingConfig, LabelStyle, SolutionReport, StaminaMode};
}
