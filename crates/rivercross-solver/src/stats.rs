//! Search statistics.
//!
//! Stack-allocated counters for one exhaustive search run.

use std::time::{Duration, Instant};

/// Counters collected while exploring the crossing tree.
///
/// # Example
///
/// ```
/// use rivercross_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node(3);
/// stats.record_node(1);
/// stats.record_bound_pruning();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.max_depth, 3);
/// assert_eq!(stats.bound_prunings, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Nodes expanded (including the root).
    pub nodes_explored: u64,
    /// Crossings produced by the move generator.
    pub moves_generated: u64,
    /// Crossings rejected by the stamina validator.
    pub stamina_rejections: u64,
    /// Branches cut because their total could not beat or tie the best.
    pub bound_prunings: u64,
    /// Branches cut because they revisit a configuration on the same path.
    pub cycle_prunings: u64,
    /// Goal states reached, recorded or not.
    pub goals_reached: u64,
    /// Times the best total strictly improved.
    pub improvements: u64,
    /// Deepest crossing count reached.
    pub max_depth: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.elapsed = Some(self.elapsed());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        match self.elapsed {
            Some(elapsed) => elapsed,
            None => self.start_time.map(|t| t.elapsed()).unwrap_or_default(),
        }
    }

    /// Records a node expansion at the given depth.
    #[inline]
    pub fn record_node(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth as u64);
    }

    /// Records a generated crossing.
    #[inline]
    pub fn record_move(&mut self) {
        self.moves_generated += 1;
    }

    /// Records a crossing rejected by the validator.
    #[inline]
    pub fn record_stamina_rejection(&mut self) {
        self.stamina_rejections += 1;
    }

    /// Records a bound pruning.
    #[inline]
    pub fn record_bound_pruning(&mut self) {
        self.bound_prunings += 1;
    }

    /// Records a cycle pruning.
    #[inline]
    pub fn record_cycle_pruning(&mut self) {
        self.cycle_prunings += 1;
    }

    /// Records a goal state and whether it improved the best total.
    #[inline]
    pub fn record_goal(&mut self, improved: bool) {
        self.goals_reached += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Adds the counters of a worker's run into this one.
    ///
    /// Timing is left untouched; the caller owns the wall clock.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.moves_generated += other.moves_generated;
        self.stamina_rejections += other.stamina_rejections;
        self.bound_prunings += other.bound_prunings;
        self.cycle_prunings += other.cycle_prunings;
        self.goals_reached += other.goals_reached;
        self.improvements += other.improvements;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_goal() {
        let mut stats = SearchStats::default();
        stats.record_goal(true);
        stats.record_goal(false);

        assert_eq!(stats.goals_reached, 2);
        assert_eq!(stats.improvements, 1);
    }

    #[test]
    fn test_absorb() {
        let mut total = SearchStats::default();
        let mut worker = SearchStats::default();
        worker.record_node(4);
        worker.record_move();
        worker.record_stamina_rejection();
        worker.record_cycle_pruning();

        total.record_node(2);
        total.absorb(&worker);

        assert_eq!(total.nodes_explored, 2);
        assert_eq!(total.max_depth, 4);
        assert_eq!(total.moves_generated, 1);
        assert_eq!(total.stamina_rejections, 1);
        assert_eq!(total.cycle_prunings, 1);
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);

        stats.start();
        stats.finish();
        let frozen = stats.elapsed();
        assert_eq!(stats.elapsed(), frozen);
    }
}
