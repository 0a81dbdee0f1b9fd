//! Best-known total time and the solutions that achieve it.
//!
//! `Incumbent` is owned by a single search; `SharedBound` lets parallel
//! workers tighten each other's pruning bound without sharing solutions.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::solution::Solution;

/// Result of offering a goal state to the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Strictly better: previous solutions were discarded.
    Improved,
    /// Equal to the best: appended as another optimal solution.
    Tied,
    /// Worse than the best: discarded.
    Rejected,
}

/// Best total found so far and every solution achieving it.
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    best: Option<u64>,
    solutions: Vec<Solution>,
}

impl Incumbent {
    /// Creates an incumbent with no bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the best total, if any goal was reached.
    #[inline]
    pub fn best(&self) -> Option<u64> {
        self.best
    }

    /// Returns the pruning bound (`u64::MAX` while unbounded).
    #[inline]
    pub fn bound(&self) -> u64 {
        self.best.unwrap_or(u64::MAX)
    }

    /// Offers a goal reached with `total`; `build` is only called when the
    /// solution is kept.
    pub fn offer(&mut self, total: u64, build: impl FnOnce() -> Solution) -> Offer {
        match self.best {
            Some(best) if total > best => Offer::Rejected,
            Some(best) if total == best => {
                self.solutions.push(build());
                Offer::Tied
            }
            _ => {
                self.best = Some(total);
                self.solutions.clear();
                self.solutions.push(build());
                Offer::Improved
            }
        }
    }

    /// Returns the collected solutions in discovery order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Consumes the incumbent into its best total and solutions.
    pub fn into_parts(self) -> (Option<u64>, Vec<Solution>) {
        (self.best, self.solutions)
    }
}

/// A best total shared between parallel workers.
///
/// Only the bound is shared; each worker keeps its own solutions.
#[derive(Debug)]
pub struct SharedBound {
    value: AtomicU64,
}

impl Default for SharedBound {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedBound {
    /// Creates an unbounded shared value.
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(u64::MAX),
        }
    }

    /// Returns the current shared bound (`u64::MAX` while unbounded).
    #[inline]
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Returns the tighter of the shared bound and a worker's local bound.
    #[inline]
    pub fn tighten(&self, local: u64) -> u64 {
        self.get().min(local)
    }

    /// Publishes a goal total, lowering the bound if it improves it.
    #[inline]
    pub fn publish(&self, total: u64) {
        self.value.fetch_min(total, Ordering::Relaxed);
    }
}
