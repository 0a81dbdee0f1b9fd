//! Final ordering of optimal solutions.

use std::collections::HashSet;

use rivercross_core::Crossing;
use tracing::debug;

use crate::solution::Solution;

/// Every optimal solution found by a search, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSet {
    best_total: Option<u64>,
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Returns the number of solutions.
    pub fn num_of_solutions(&self) -> usize {
        self.solutions.len()
    }

    /// Returns the optimal total, or `None` when no solution exists.
    pub fn best_total(&self) -> Option<u64> {
        self.best_total
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Orders raw engine output into a [`SolutionSet`].
///
/// Solutions are stably sorted by total time, so discovery order survives
/// among ties, and identical paths collapse into their first occurrence.
pub fn aggregate(best_total: Option<u64>, mut raw: Vec<Solution>) -> SolutionSet {
    debug_assert!(raw.iter().all(|s| Some(s.total_time()) == best_total));

    raw.sort_by_key(Solution::total_time);

    let before = raw.len();
    let mut seen: HashSet<Vec<Crossing>> = HashSet::with_capacity(before);
    raw.retain(|s| seen.insert(s.path().to_vec()));
    if raw.len() < before {
        debug!(event = "duplicate_solutions", removed = before - raw.len());
    }

    SolutionSet {
        best_total,
        solutions: raw,
    }
}
