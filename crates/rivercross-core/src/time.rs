//! Per-horse accumulated crossing time.

use crate::bank::HorseSet;
use crate::horse::HorseId;

/// Sum of the durations of every crossing each horse took part in.
///
/// Updated with [`add`](Self::add) on descent and reverted with
/// [`sub`](Self::sub) on backtrack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccumulatedTime {
    spent: Vec<u64>,
}

impl AccumulatedTime {
    /// Creates zeroed times for a herd of `herd_size` horses.
    pub fn new(herd_size: usize) -> Self {
        Self {
            spent: vec![0; herd_size],
        }
    }

    /// Returns the time the given horse has spent crossing.
    #[inline]
    pub fn get(&self, id: HorseId) -> u64 {
        self.spent[id.index()]
    }

    /// Adds `duration` to every horse in `members`.
    #[inline]
    pub fn add(&mut self, members: HorseSet, duration: u64) {
        for id in members {
            self.spent[id.index()] += duration;
        }
    }

    /// Subtracts `duration` from every horse in `members`.
    #[inline]
    pub fn sub(&mut self, members: HorseSet, duration: u64) {
        for id in members {
            debug_assert!(self.spent[id.index()] >= duration);
            self.spent[id.index()] -= duration;
        }
    }

    /// Returns the largest time spent by any horse in `members`.
    pub fn max_of(&self, members: HorseSet) -> u64 {
        members
            .iter()
            .map(|id| self.spent[id.index()])
            .max()
            .unwrap_or(0)
    }

    /// Returns the times in horse id order.
    pub fn as_slice(&self) -> &[u64] {
        &self.spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let mut time = AccumulatedTime::new(3);
        let members: HorseSet = [HorseId::new(0), HorseId::new(2)].into_iter().collect();

        time.add(members, 5);
        assert_eq!(time.as_slice(), &[5, 0, 5]);
        assert_eq!(time.max_of(members), 5);

        time.add(HorseSet::full(3), 2);
        assert_eq!(time.as_slice(), &[7, 2, 7]);

        time.sub(members, 5);
        assert_eq!(time.as_slice(), &[2, 2, 2]);
    }
}
