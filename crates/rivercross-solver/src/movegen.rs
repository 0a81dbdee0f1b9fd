//! Legal crossing generation.
//!
//! The generator applies the structural filters that remove provably
//! wasteful crossings before any cost is computed:
//! - a horse never rides forward alone while another horse could join it
//! - a return trip always carries exactly one horse

use rivercross_core::{BankState, Crossing, Direction, Herd, HorseId};
use smallvec::SmallVec;

/// Inline pool of horses eligible for the next crossing.
type Pool = SmallVec<[HorseId; 16]>;

/// Enumerates the candidate crossings from a bank state.
///
/// Candidates come out by increasing group size, then in lexicographic
/// order of horse ids, so every run visits the tree in the same order.
///
/// # Example
///
/// ```
/// use rivercross_core::{BankState, Herd};
/// use rivercross_solver::MoveGenerator;
///
/// let herd = Herd::from_durations(vec![1, 2, 5]).unwrap();
/// let generator = MoveGenerator::new(&herd, 2);
///
/// let first: Vec<_> = generator.generate(&BankState::initial(3)).collect();
/// // Pairs only: nobody rides alone while others wait.
/// assert_eq!(first.len(), 3);
/// assert!(first.iter().all(|c| c.len() == 2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator<'h> {
    herd: &'h Herd,
    group_limit: usize,
}

impl<'h> MoveGenerator<'h> {
    /// Creates a generator for boats carrying up to `group_limit` horses.
    pub fn new(herd: &'h Herd, group_limit: usize) -> Self {
        Self { herd, group_limit }
    }

    /// Returns the herd crossings are built for.
    pub fn herd(&self) -> &'h Herd {
        self.herd
    }

    /// Returns the boat capacity.
    pub fn group_limit(&self) -> usize {
        self.group_limit
    }

    /// Returns the candidate crossings departing from the boat's bank.
    ///
    /// The iterator snapshots the bank, so the state may be mutated while
    /// it is being consumed.
    pub fn generate(&self, state: &BankState) -> Moves<'h> {
        let direction = Direction::departing_from(state.boat());
        let pool: Pool = state.at_boat().iter().collect();
        let available = pool.len();

        let (min_size, max_size) = match direction {
            Direction::Forward => {
                let min = if available >= 2 { 2 } else { 1 };
                (min, self.group_limit.min(available))
            }
            Direction::Return => (1, available.min(1)),
        };

        Moves {
            herd: self.herd,
            direction,
            pool,
            combination: Combinations::new(min_size, max_size, available),
        }
    }
}

/// Lazy sequence of candidate crossings for one node.
#[derive(Debug, Clone)]
pub struct Moves<'h> {
    herd: &'h Herd,
    direction: Direction,
    pool: Pool,
    combination: Combinations,
}

impl Iterator for Moves<'_> {
    type Item = Crossing;

    fn next(&mut self) -> Option<Crossing> {
        let indices = self.combination.next_indices()?;
        let pool = &self.pool;
        Some(Crossing::new(
            indices.iter().map(|&i| pool[i]),
            self.direction,
            self.herd,
        ))
    }
}

/// k-combinations of `0..n` for k in `min..=max`, in increasing k and
/// lexicographic order.
#[derive(Debug, Clone)]
struct Combinations {
    n: usize,
    max_size: usize,
    indices: SmallVec<[usize; 8]>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(min_size: usize, max_size: usize, n: usize) -> Self {
        let done = min_size == 0 || min_size > max_size || min_size > n;
        Self {
            n,
            max_size,
            indices: (0..min_size).collect(),
            started: false,
            done,
        }
    }

    fn next_indices(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.as_slice());
        }

        let k = self.indices.len();
        // Rightmost position that can still move right.
        let pivot = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => {
                let next_k = k + 1;
                if next_k > self.max_size || next_k > self.n {
                    self.done = true;
                    return None;
                }
                self.indices = (0..next_k).collect();
            }
        }
        Some(self.indices.as_slice())
    }
}
