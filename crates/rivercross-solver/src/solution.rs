//! Complete crossing schedules.

use rivercross_core::{Crossing, CrossingPath, Herd};

/// A complete path from the initial state to the goal.
///
/// Created only when the search reaches the goal; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    total_time: u64,
    horses_time_spent: Vec<u64>,
    path: CrossingPath,
}

impl Solution {
    /// Creates a solution from its path and final per-horse times.
    pub fn new(path: CrossingPath, horses_time_spent: Vec<u64>) -> Self {
        let total_time = path
            .iter()
            .map(Crossing::duration)
            .fold(0, u64::saturating_add);
        Self {
            total_time,
            horses_time_spent,
            path,
        }
    }

    /// Returns the sum of all crossing durations.
    #[inline]
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Returns the time each horse spent crossing, in horse id order.
    pub fn horses_time_spent(&self) -> &[u64] {
        &self.horses_time_spent
    }

    /// Returns the crossings in order.
    pub fn path(&self) -> &[Crossing] {
        &self.path
    }

    /// Returns the number of crossings.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true for an empty path.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns each crossing as the labels of the horses on it.
    pub fn path_labels(&self, herd: &Herd) -> Vec<Vec<String>> {
        self.path
            .iter()
            .map(|c| herd.labels_of(c.members().iter().copied()))
            .collect()
    }
}
