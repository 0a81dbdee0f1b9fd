//! Parallel search split on the first level of crossings.
//!
//! Each root crossing is explored by its own worker with independent
//! bank state and accumulated times. Workers share only a [`SharedBound`]
//! so one worker's best total prunes the others. Results are merged in
//! root-crossing order, which makes the output identical to the
//! sequential search.

use rayon::prelude::*;
use rivercross_core::{BankState, Crossing};
use tracing::{debug, info};

use crate::aggregator::aggregate;
use crate::engine::{log_solve_end, SearchEngine, SearchOutcome};
use crate::incumbent::SharedBound;
use crate::stats::SearchStats;
use crate::validator::CrossingValidator;

impl<V: CrossingValidator> SearchEngine<'_, V> {
    /// Runs the search with one rayon task per root crossing.
    pub fn solve_parallel(&self) -> SearchOutcome {
        let herd = self.generator().herd();
        let roots: Vec<Crossing> = self
            .generator()
            .generate(&BankState::initial(herd.len()))
            .collect();

        info!(
            event = "solve_start",
            horse_count = herd.len(),
            group_limit = self.generator().group_limit(),
            parallel = true,
            root_crossings = roots.len(),
        );

        let mut stats = SearchStats::default();
        stats.start();
        stats.record_node(0);
        stats.moves_generated += roots.len() as u64;

        let shared = SharedBound::new();
        let results: Vec<_> = roots
            .into_par_iter()
            .map(|crossing| self.explore_root_crossing(crossing, &shared))
            .collect();

        let best = results.iter().filter_map(|(inc, _)| inc.best()).min();
        let mut raw = Vec::new();
        for (index, (incumbent, worker_stats)) in results.into_iter().enumerate() {
            stats.absorb(&worker_stats);
            let (worker_best, solutions) = incumbent.into_parts();
            if worker_best.is_some() && worker_best == best {
                debug!(
                    event = "merge_root",
                    root = index,
                    solutions = solutions.len(),
                );
                raw.extend(solutions);
            }
        }
        stats.finish();

        let outcome = SearchOutcome {
            solutions: aggregate(best, raw),
            stats,
        };
        log_solve_end(&outcome);
        outcome
    }
}
