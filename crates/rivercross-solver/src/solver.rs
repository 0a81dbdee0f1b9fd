//! Configuration-driven entry point.

use rivercross_config::{ConfigError, CrossingConfig};
use rivercross_core::Herd;

use crate::engine::{SearchEngine, SearchOutcome};
use crate::movegen::MoveGenerator;
use crate::validator::StaminaValidator;

/// Owns a herd and the search settings built from a [`CrossingConfig`].
///
/// # Example
///
/// ```
/// use rivercross_config::CrossingConfig;
/// use rivercross_solver::Solver;
///
/// let config = CrossingConfig::new(vec![1, 2, 5, 10], 2);
/// let outcome = Solver::from_config(&config).unwrap().solve();
///
/// assert_eq!(outcome.best_total(), Some(17));
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    herd: Herd,
    group_limit: usize,
    validator: StaminaValidator,
    parallel: bool,
}

impl Solver {
    pub fn new(herd: Herd, group_limit: usize, validator: StaminaValidator) -> Self {
        Self {
            herd,
            group_limit,
            validator,
            parallel: false,
        }
    }

    /// Validates `config` and builds a solver from it.
    pub fn from_config(config: &CrossingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let herd = config.herd()?;
        let validator = StaminaValidator::from_config(config);
        Ok(Self::new(herd, config.group_limit(), validator).with_parallel(config.search.parallel))
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn herd(&self) -> &Herd {
        &self.herd
    }

    pub fn group_limit(&self) -> usize {
        self.group_limit
    }

    pub fn validator(&self) -> &StaminaValidator {
        &self.validator
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Runs the search to exhaustion.
    pub fn solve(&self) -> SearchOutcome {
        let engine = SearchEngine::new(
            MoveGenerator::new(&self.herd, self.group_limit),
            self.validator,
        );
        if self.parallel {
            engine.solve_parallel()
        } else {
            engine.solve()
        }
    }
}
