//! Exhaustive depth-first search using branch-and-bound.
//!
//! The engine walks the crossing tree with a single mutable node that is
//! updated by apply/undo deltas in strict LIFO order. Pruning never removes
//! an optimal path:
//! - a branch whose running total exceeds the best goal total is cut
//! - a goal with a total equal to the best is kept as another solution
//! - a non-goal node whose total equals the best is cut (durations are
//!   positive, so it can only get worse)
//! - a branch that revisits a bank partition already on the current path
//!   is cut; the loop between the two visits only adds time, so this also
//!   covers repeated (partition, accumulated time) pairs and bounds the depth
//! - a branch whose running total would not fit in a `u64` is cut
//!
//! Logging levels:
//! - **INFO**: search start/end with solution count and node totals
//! - **DEBUG**: every strict improvement of the best total
//! - **TRACE**: node expansions

use std::collections::HashSet;

use rivercross_core::{AccumulatedTime, BankState, Crossing, CrossingPath, HorseSet};
use tracing::{debug, info, trace};

use crate::aggregator::{aggregate, SolutionSet};
use crate::incumbent::{Incumbent, Offer, SharedBound};
use crate::movegen::MoveGenerator;
use crate::solution::Solution;
use crate::stats::SearchStats;
use crate::validator::CrossingValidator;

/// Final result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Optimal solutions in discovery order.
    pub solutions: SolutionSet,
    /// Counters collected during the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Returns the number of optimal solutions.
    pub fn num_of_solutions(&self) -> usize {
        self.solutions.num_of_solutions()
    }

    /// Returns the optimal total time, if any solution exists.
    pub fn best_total(&self) -> Option<u64> {
        self.solutions.best_total()
    }
}

/// Depth-first branch-and-bound search over crossing sequences.
///
/// # Type Parameters
/// * `V` - The validator deciding stamina admissibility
///
/// # Example
///
/// ```
/// use rivercross_core::Herd;
/// use rivercross_solver::{MoveGenerator, SearchEngine, Unconstrained};
///
/// let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
/// let engine = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained);
///
/// let outcome = engine.solve();
/// assert_eq!(outcome.best_total(), Some(17));
/// ```
#[derive(Debug)]
pub struct SearchEngine<'h, V> {
    generator: MoveGenerator<'h>,
    validator: V,
}

impl<'h, V: CrossingValidator> SearchEngine<'h, V> {
    /// Creates an engine from a move generator and a validator.
    pub fn new(generator: MoveGenerator<'h>, validator: V) -> Self {
        Self {
            generator,
            validator,
        }
    }

    /// Returns the move generator.
    pub fn generator(&self) -> &MoveGenerator<'h> {
        &self.generator
    }

    /// Returns the validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Runs the search to exhaustion on the calling thread.
    pub fn solve(&self) -> SearchOutcome {
        let herd = self.generator.herd();
        info!(
            event = "solve_start",
            horse_count = herd.len(),
            group_limit = self.generator.group_limit(),
            parallel = false,
        );

        let mut worker = Worker::new(herd.len(), None);
        worker.stats.start();
        worker.explore(self);
        worker.stats.finish();

        let (best, raw) = worker.incumbent.into_parts();
        let outcome = SearchOutcome {
            solutions: aggregate(best, raw),
            stats: worker.stats,
        };
        log_solve_end(&outcome);
        outcome
    }

    /// Explores the subtree below one root crossing.
    ///
    /// Used by the parallel split; the worker prunes against `shared` as
    /// well as its own incumbent.
    pub(crate) fn explore_root_crossing(
        &self,
        crossing: Crossing,
        shared: &SharedBound,
    ) -> (Incumbent, SearchStats) {
        let mut worker = Worker::new(self.generator.herd().len(), Some(shared));
        worker.descend(self, crossing);
        (worker.incumbent, worker.stats)
    }
}

pub(crate) fn log_solve_end(outcome: &SearchOutcome) {
    let stats = &outcome.stats;
    info!(
        event = "solve_end",
        solutions = outcome.num_of_solutions(),
        best_total = outcome.best_total().unwrap_or(0),
        nodes = stats.nodes_explored,
        bound_prunings = stats.bound_prunings,
        stamina_rejections = stats.stamina_rejections,
        duration_ms = stats.elapsed().as_millis() as u64,
    );
}

/// The single mutable search node: bank partition, per-horse times,
/// running total and the path leading here.
#[derive(Debug)]
struct Node {
    state: BankState,
    time: AccumulatedTime,
    total: u64,
    path: CrossingPath,
    visited: HashSet<BankState>,
}

impl Node {
    fn root(herd_size: usize) -> Self {
        let state = BankState::initial(herd_size);
        let time = AccumulatedTime::new(herd_size);
        let mut visited = HashSet::new();
        visited.insert(state);
        Self {
            state,
            time,
            total: 0,
            path: Vec::new(),
            visited,
        }
    }

    #[inline]
    fn apply(&mut self, crossing: Crossing, members: HorseSet) {
        let duration = crossing.duration();
        self.state.cross(members);
        self.time.add(members, duration);
        self.total += duration;
        self.path.push(crossing);
        debug_assert!(self.state.is_partition_valid());
    }

    #[inline]
    fn undo(&mut self, members: HorseSet) {
        let crossing = self.path.pop();
        debug_assert!(crossing.is_some());
        let duration = crossing.map_or(0, |c| c.duration());
        self.total -= duration;
        self.time.sub(members, duration);
        self.state.undo(members);
    }

    fn solution(&self) -> Solution {
        Solution::new(self.path.clone(), self.time.as_slice().to_vec())
    }
}

/// Search state owned by one thread: the node, its incumbent and counters.
struct Worker<'s> {
    node: Node,
    incumbent: Incumbent,
    stats: SearchStats,
    shared: Option<&'s SharedBound>,
}

impl<'s> Worker<'s> {
    fn new(herd_size: usize, shared: Option<&'s SharedBound>) -> Self {
        Self {
            node: Node::root(herd_size),
            incumbent: Incumbent::new(),
            stats: SearchStats::default(),
            shared,
        }
    }

    #[inline]
    fn bound(&self) -> u64 {
        let local = self.incumbent.bound();
        match self.shared {
            Some(shared) => shared.tighten(local),
            None => local,
        }
    }

    fn explore<V: CrossingValidator>(&mut self, engine: &SearchEngine<'_, V>) {
        let depth = self.node.path.len();
        self.stats.record_node(depth);
        trace!(event = "node", depth = depth, total = self.node.total);

        for crossing in engine.generator.generate(&self.node.state) {
            self.stats.record_move();
            self.descend(engine, crossing);
        }
    }

    fn descend<V: CrossingValidator>(&mut self, engine: &SearchEngine<'_, V>, crossing: Crossing) {
        if !engine.validator.admits(&crossing, &self.node.time) {
            self.stats.record_stamina_rejection();
            return;
        }

        let Some(total) = self.node.total.checked_add(crossing.duration()) else {
            self.stats.record_bound_pruning();
            return;
        };
        if total > self.bound() {
            self.stats.record_bound_pruning();
            return;
        }

        let members = crossing.mask();
        self.node.apply(crossing, members);

        if self.node.state.is_goal() {
            self.reach_goal(total);
        } else if total >= self.bound() {
            self.stats.record_bound_pruning();
        } else {
            let state = self.node.state;
            if self.node.visited.insert(state) {
                self.explore(engine);
                self.node.visited.remove(&state);
            } else {
                self.stats.record_cycle_pruning();
            }
        }

        self.node.undo(members);
    }

    fn reach_goal(&mut self, total: u64) {
        let node = &self.node;
        let offer = self.incumbent.offer(total, || node.solution());
        self.stats.record_goal(offer == Offer::Improved);

        match offer {
            Offer::Improved => {
                debug!(
                    event = "new_best",
                    total = total,
                    crossings = node.path.len(),
                    nodes = self.stats.nodes_explored,
                );
                if let Some(shared) = self.shared {
                    shared.publish(total);
                }
            }
            Offer::Tied => {
                trace!(event = "tied_best", total = total, crossings = node.path.len());
            }
            Offer::Rejected => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{StaminaValidator, Unconstrained};
    use rivercross_config::StaminaMode;
    use rivercross_core::{Bank, Direction, Herd};

    fn labels(herd: &Herd, solution: &Solution) -> Vec<Vec<String>> {
        solution.path_labels(herd)
    }

    #[test]
    fn test_two_horses_cross_together() {
        let herd = Herd::from_durations(vec![1, 2]).unwrap();
        let engine = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained);
        let outcome = engine.solve();

        assert_eq!(outcome.num_of_solutions(), 1);
        let solution = &outcome.solutions.solutions()[0];
        assert_eq!(solution.total_time(), 2);
        assert_eq!(solution.horses_time_spent(), &[2, 2]);
        assert_eq!(labels(&herd, solution), vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_classic_bridge_total() {
        let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
        let engine = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained);
        let outcome = engine.solve();

        assert_eq!(outcome.best_total(), Some(17));
        assert_eq!(outcome.num_of_solutions(), 2);
        for solution in outcome.solutions.iter() {
            assert_eq!(solution.len(), 5);
            for crossing in solution.path() {
                if crossing.direction() == Direction::Return {
                    assert!(crossing.duration() <= 2);
                }
            }
        }
    }

    #[test]
    fn test_single_horse_rides_alone() {
        let herd = Herd::from_durations(vec![4]).unwrap();
        let engine = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained);
        let outcome = engine.solve();

        assert_eq!(outcome.best_total(), Some(4));
        assert_eq!(outcome.solutions.solutions()[0].len(), 1);
    }

    #[test]
    fn test_stamina_below_slowest_has_no_solution() {
        let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
        let validator = StaminaValidator::new(Some(9), StaminaMode::Cumulative);
        let engine = SearchEngine::new(MoveGenerator::new(&herd, 2), validator);
        let outcome = engine.solve();

        assert_eq!(outcome.num_of_solutions(), 0);
        assert_eq!(outcome.best_total(), None);
        assert!(outcome.stats.stamina_rejections > 0);
    }

    #[test]
    fn test_stamina_limit_is_inclusive() {
        // Both optimal schedules leave the slowest horses at exactly 10.
        let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
        let validator = StaminaValidator::new(Some(10), StaminaMode::Cumulative);
        let outcome = SearchEngine::new(MoveGenerator::new(&herd, 2), validator).solve();

        assert_eq!(outcome.best_total(), Some(17));
        assert_eq!(outcome.num_of_solutions(), 2);
        for solution in outcome.solutions.iter() {
            assert!(solution.horses_time_spent().iter().all(|&spent| spent <= 10));
        }
    }

    #[test]
    fn test_returner_stamina_blocks_three_horse_schedule() {
        // Whoever shuttles back pays 4 + 1 + 1 = 6.
        let herd = Herd::from_durations(vec![1, 1, 4]).unwrap();
        let free = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained).solve();
        assert_eq!(free.best_total(), Some(6));

        let tight = StaminaValidator::new(Some(5), StaminaMode::Cumulative);
        let limited = SearchEngine::new(MoveGenerator::new(&herd, 2), tight).solve();
        assert_eq!(limited.num_of_solutions(), 0);
    }

    #[test]
    fn test_goal_is_never_followed_by_a_return() {
        let herd = Herd::from_durations(vec![2, 3, 7]).unwrap();
        let outcome = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained).solve();

        for solution in outcome.solutions.iter() {
            let last = solution.path().last().unwrap();
            assert_eq!(last.direction().target(), Bank::Destination);
        }
    }

    #[test]
    fn test_node_apply_undo_restores_root() {
        let herd = Herd::from_durations(vec![1, 2, 5]).unwrap();
        let mut node = Node::root(3);
        let before = (node.state, node.time.clone());

        let generator = MoveGenerator::new(&herd, 2);
        let first = generator.generate(&node.state).next().unwrap();
        let members = first.mask();
        node.apply(first, members);
        assert_eq!(node.total, 2);
        assert_eq!(node.path.len(), 1);

        node.undo(members);
        assert_eq!((node.state, node.time.clone()), before);
        assert_eq!(node.total, 0);
        assert!(node.path.is_empty());
    }

    #[test]
    fn test_stats_are_populated() {
        let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
        let outcome = SearchEngine::new(MoveGenerator::new(&herd, 2), Unconstrained).solve();
        let stats = &outcome.stats;

        assert!(stats.nodes_explored > 1);
        assert!(stats.moves_generated >= stats.nodes_explored - 1);
        assert!(stats.goals_reached >= 2);
        assert!(stats.improvements >= 1);
        assert!(stats.max_depth >= 4);
    }

    #[test]
    fn test_totals_beyond_u64_are_cut() {
        let huge = i64::MAX as u64;

        // Two crossings fit, the third would not.
        let trio = Herd::from_durations(vec![huge; 3]).unwrap();
        let outcome = SearchEngine::new(MoveGenerator::new(&trio, 2), Unconstrained).solve();
        assert_eq!(outcome.num_of_solutions(), 0);
        assert!(outcome.stats.bound_prunings > 0);

        let pair = Herd::from_durations(vec![1, huge]).unwrap();
        let outcome = SearchEngine::new(MoveGenerator::new(&pair, 2), Unconstrained).solve();
        assert_eq!(outcome.best_total(), Some(huge));
    }
}
