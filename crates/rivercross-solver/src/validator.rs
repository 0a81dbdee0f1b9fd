//! Stamina constraint validation.
//!
//! Validators decide whether a generated crossing may be applied given how
//! much time each horse has already spent. Group-size and return-trip
//! filters belong to the [`MoveGenerator`](crate::MoveGenerator) and are not
//! repeated here.

use std::fmt::Debug;

use rivercross_config::{CrossingConfig, StaminaMode};
use rivercross_core::{AccumulatedTime, Crossing};

/// Decides whether a crossing is admissible.
///
/// Implementations must be cheap: the engine calls `admits` once per
/// generated crossing.
pub trait CrossingValidator: Send + Sync + Debug {
    /// Returns true if `crossing` may be applied on top of `time`.
    fn admits(&self, crossing: &Crossing, time: &AccumulatedTime) -> bool;
}

/// Admits every crossing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl CrossingValidator for Unconstrained {
    #[inline]
    fn admits(&self, _crossing: &Crossing, _time: &AccumulatedTime) -> bool {
        true
    }
}

/// Enforces the per-horse stamina limit.
///
/// # Example
///
/// ```
/// use rivercross_config::StaminaMode;
/// use rivercross_core::{AccumulatedTime, Crossing, Direction, Herd, HorseId};
/// use rivercross_solver::{CrossingValidator, StaminaValidator};
///
/// let herd = Herd::from_durations(vec![2, 6]).unwrap();
/// let validator = StaminaValidator::new(Some(5), StaminaMode::Cumulative);
/// let crossing = Crossing::new([HorseId::new(0), HorseId::new(1)], Direction::Forward, &herd);
///
/// // The pair moves at 6, over the limit of 5.
/// assert!(!validator.admits(&crossing, &AccumulatedTime::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaminaValidator {
    limit: Option<u64>,
    mode: StaminaMode,
}

impl StaminaValidator {
    /// Creates a validator; `None` disables the limit.
    pub fn new(limit: Option<u64>, mode: StaminaMode) -> Self {
        Self { limit, mode }
    }

    /// Creates the validator described by a configuration.
    pub fn from_config(config: &CrossingConfig) -> Self {
        Self::new(config.stamina_limit(), config.stamina_mode)
    }

    /// Returns the configured limit.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns the stamina mode.
    pub fn mode(&self) -> StaminaMode {
        self.mode
    }
}

impl CrossingValidator for StaminaValidator {
    #[inline]
    fn admits(&self, crossing: &Crossing, time: &AccumulatedTime) -> bool {
        let Some(limit) = self.limit else {
            return true;
        };
        let duration = crossing.duration();
        match self.mode {
            StaminaMode::Cumulative => crossing
                .members()
                .iter()
                .all(|&id| time.get(id).checked_add(duration).is_some_and(|t| t <= limit)),
            StaminaMode::PerCrossing => duration <= limit,
        }
    }
}
