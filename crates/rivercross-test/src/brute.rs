//! Unpruned enumeration of crossing schedules.
//!
//! Walks every schedule whose total stays within a caller-supplied cap and
//! that never repeats a bank partition, with no bound pruning. Crossing
//! groups come from plain bitmask subset enumeration rather than the
//! solver's generator. Small herds only.

use rivercross_config::{ConfigError, CrossingConfig, StaminaMode};

/// A path as the horse indices of each crossing.
pub type PathMembers = Vec<Vec<usize>>;

/// Result of an unpruned enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BruteForce {
    /// Minimum total over every goal path found.
    pub best: Option<u64>,
    /// Every path achieving `best`, in enumeration order.
    pub optimal: Vec<PathMembers>,
    /// Number of goal paths found within the cap.
    pub goals: usize,
}

impl BruteForce {
    /// Returns the optimal paths sorted for order-independent comparison.
    pub fn sorted_paths(&self) -> Vec<PathMembers> {
        let mut paths = self.optimal.clone();
        paths.sort();
        paths
    }
}

/// Enumerates every schedule for `config` with a total of at most `cap`.
pub fn brute_force(config: &CrossingConfig, cap: u64) -> Result<BruteForce, ConfigError> {
    config.validate()?;
    let herd = config.herd()?;
    let durations: Vec<u64> = herd.iter().map(|h| h.duration()).collect();
    let all = if durations.len() == 64 {
        u64::MAX
    } else {
        (1u64 << durations.len()) - 1
    };

    let mut walk = Walk {
        durations: &durations,
        all,
        group_limit: config.group_limit(),
        stamina: config.stamina_limit(),
        mode: config.stamina_mode,
        cap,
        destination: 0,
        boat_across: false,
        spent: vec![0; durations.len()],
        total: 0,
        seen: vec![(0, false)],
        path: Vec::new(),
        result: BruteForce::default(),
    };
    walk.walk();
    Ok(walk.result)
}

struct Walk<'a> {
    durations: &'a [u64],
    all: u64,
    group_limit: usize,
    stamina: Option<u64>,
    mode: StaminaMode,
    cap: u64,
    destination: u64,
    boat_across: bool,
    spent: Vec<u64>,
    total: u64,
    seen: Vec<(u64, bool)>,
    path: PathMembers,
    result: BruteForce,
}

impl Walk<'_> {
    fn walk(&mut self) {
        let side = if self.boat_across {
            self.destination
        } else {
            self.all & !self.destination
        };
        let available = side.count_ones() as usize;

        let mut group = side;
        while group != 0 {
            let size = group.count_ones() as usize;
            let legal = if self.boat_across {
                size == 1
            } else if available == 1 {
                true
            } else {
                size >= 2 && size <= self.group_limit
            };
            if legal {
                self.step(group);
            }
            group = (group - 1) & side;
        }
    }

    fn step(&mut self, group: u64) {
        let members: Vec<usize> = (0..self.durations.len())
            .filter(|&i| (group >> i) & 1 == 1)
            .collect();
        let duration = members
            .iter()
            .map(|&i| self.durations[i])
            .max()
            .unwrap_or(0);

        let within_cap = self
            .total
            .checked_add(duration)
            .is_some_and(|total| total <= self.cap);
        if !within_cap || !self.admits(&members, duration) {
            return;
        }

        self.destination ^= group;
        self.boat_across = !self.boat_across;
        self.total += duration;
        for &i in &members {
            self.spent[i] += duration;
        }
        self.path.push(members);

        if self.destination == self.all {
            self.record();
        } else {
            let key = (self.destination, self.boat_across);
            if !self.seen.contains(&key) {
                self.seen.push(key);
                self.walk();
                self.seen.pop();
            }
        }

        if let Some(members) = self.path.pop() {
            for &i in &members {
                self.spent[i] -= duration;
            }
        }
        self.total -= duration;
        self.boat_across = !self.boat_across;
        self.destination ^= group;
    }

    fn admits(&self, members: &[usize], duration: u64) -> bool {
        match (self.stamina, self.mode) {
            (None, _) => true,
            (Some(limit), StaminaMode::Cumulative) => {
                members.iter().all(|&i| {
                    self.spent[i]
                        .checked_add(duration)
                        .is_some_and(|spent| spent <= limit)
                })
            }
            (Some(limit), StaminaMode::PerCrossing) => duration <= limit,
        }
    }

    fn record(&mut self) {
        let result = &mut self.result;
        result.goals += 1;
        match result.best {
            Some(best) if self.total > best => {}
            Some(best) if self.total == best => result.optimal.push(self.path.clone()),
            _ => {
                result.best = Some(self.total);
                result.optimal = vec![self.path.clone()];
            }
        }
    }
}
