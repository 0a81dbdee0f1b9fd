//! Canonical puzzle configurations.

use rivercross_config::CrossingConfig;

/// Two horses, a boat for two: one crossing of total 2.
pub fn two_horses() -> CrossingConfig {
    CrossingConfig::new(vec![1, 2], 2)
}

/// The classic bridge instance: optimum 17, returns by the two fastest.
pub fn classic_bridge() -> CrossingConfig {
    CrossingConfig::new(vec![1, 2, 5, 10], 2)
}

/// Stamina below the slowest horse's duration: no schedule exists.
pub fn exhausted_herd() -> CrossingConfig {
    classic_bridge().with_time_limit(9)
}

/// Three equal horses and a boat for three: a single crossing.
pub fn equal_trio() -> CrossingConfig {
    CrossingConfig::new(vec![4, 4, 4], 3)
}

/// Five horses with a three-seat boat.
pub fn five_horse_trio_boat() -> CrossingConfig {
    CrossingConfig::new(vec![1, 3, 4, 6, 8], 3)
}
