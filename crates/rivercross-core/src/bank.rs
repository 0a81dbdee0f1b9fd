//! River banks and the partition of horses between them.

use std::fmt;

use crate::crossing::Crossing;
use crate::error::{Result, RiverCrossingError};
use crate::horse::HorseId;

/// Maximum number of horses a [`HorseSet`] can hold.
pub const MAX_HORSES: usize = u64::BITS as usize;

/// One of the two sides of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bank {
    /// The bank every horse starts on.
    #[default]
    Start,
    /// The bank every horse has to reach.
    Destination,
}

impl Bank {
    /// Returns the other bank.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Bank::Start => Bank::Destination,
            Bank::Destination => Bank::Start,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::Start => write!(f, "Start"),
            Bank::Destination => write!(f, "Destination"),
        }
    }
}

/// A set of horses stored as a 64-bit membership mask.
///
/// Iteration yields horse ids in ascending order.
///
/// # Example
///
/// ```
/// use rivercross_core::{HorseId, HorseSet};
///
/// let mut set = HorseSet::empty();
/// set.insert(HorseId::new(3));
/// set.insert(HorseId::new(1));
///
/// let ids: Vec<usize> = set.iter().map(|id| id.index()).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HorseSet(u64);

impl HorseSet {
    /// Returns the empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the set of the first `count` horses.
    #[inline]
    pub const fn full(count: usize) -> Self {
        if count >= MAX_HORSES {
            Self(u64::MAX)
        } else {
            Self((1u64 << count) - 1)
        }
    }

    /// Returns the raw membership mask.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of horses in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set contains no horse.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the horse is in the set.
    #[inline]
    pub const fn contains(self, id: HorseId) -> bool {
        self.0 & (1u64 << id.index()) != 0
    }

    /// Adds a horse to the set.
    #[inline]
    pub fn insert(&mut self, id: HorseId) {
        self.0 |= 1u64 << id.index();
    }

    /// Removes a horse from the set.
    #[inline]
    pub fn remove(&mut self, id: HorseId) {
        self.0 &= !(1u64 << id.index());
    }

    /// Returns true if every horse of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(self, other: HorseSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns the horses in `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: HorseSet) -> HorseSet {
        HorseSet(self.0 & !other.0)
    }

    /// Returns the horses in either set.
    #[inline]
    pub const fn union(self, other: HorseSet) -> HorseSet {
        HorseSet(self.0 | other.0)
    }

    /// Returns the horses in both sets.
    #[inline]
    pub const fn intersection(self, other: HorseSet) -> HorseSet {
        HorseSet(self.0 & other.0)
    }

    /// Iterates over the members in ascending id order.
    pub fn iter(self) -> HorseSetIter {
        HorseSetIter(self.0)
    }
}

impl fmt::Debug for HorseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(HorseId::index)).finish()
    }
}

impl FromIterator<HorseId> for HorseSet {
    fn from_iter<I: IntoIterator<Item = HorseId>>(iter: I) -> Self {
        let mut set = HorseSet::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for HorseSet {
    type Item = HorseId;
    type IntoIter = HorseSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`HorseSet`].
#[derive(Debug, Clone)]
pub struct HorseSetIter(u64);

impl Iterator for HorseSetIter {
    type Item = HorseId;

    #[inline]
    fn next(&mut self) -> Option<HorseId> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(HorseId::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for HorseSetIter {}

/// Partition of the herd between the two banks plus the boat position.
///
/// Only the destination bank is stored; the start bank is its complement
/// within the herd, so the two banks are disjoint and cover the herd by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankState {
    herd: HorseSet,
    destination: HorseSet,
    boat: Bank,
}

impl BankState {
    /// Creates the initial state: every horse and the boat on the start bank.
    pub fn initial(herd_size: usize) -> Self {
        Self {
            herd: HorseSet::full(herd_size),
            destination: HorseSet::empty(),
            boat: Bank::Start,
        }
    }

    /// Returns the bank currently holding the boat.
    #[inline]
    pub fn boat(&self) -> Bank {
        self.boat
    }

    /// Returns the horses on the given bank.
    #[inline]
    pub fn on(&self, bank: Bank) -> HorseSet {
        match bank {
            Bank::Start => self.herd.difference(self.destination),
            Bank::Destination => self.destination,
        }
    }

    /// Returns the horses on the bank holding the boat.
    #[inline]
    pub fn at_boat(&self) -> HorseSet {
        self.on(self.boat)
    }

    /// Returns the bank the given horse is on.
    pub fn bank_of(&self, id: HorseId) -> Bank {
        if self.destination.contains(id) {
            Bank::Destination
        } else {
            Bank::Start
        }
    }

    /// Returns true when every horse is on the destination bank.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.destination == self.herd
    }

    /// Returns true if the banks are disjoint and together hold the herd.
    pub fn is_partition_valid(&self) -> bool {
        let start = self.on(Bank::Start);
        let destination = self.on(Bank::Destination);
        start.intersection(destination).is_empty()
            && start.union(destination) == self.herd
    }

    /// Moves `members` from the boat's bank to the other one and flips the
    /// boat.
    ///
    /// This is the unchecked hot-path transition; callers guarantee that all
    /// members are on the boat's bank.
    #[inline]
    pub fn cross(&mut self, members: HorseSet) {
        debug_assert!(!members.is_empty());
        debug_assert!(members.is_subset(self.at_boat()));
        self.destination = match self.boat {
            Bank::Start => self.destination.union(members),
            Bank::Destination => self.destination.difference(members),
        };
        self.boat = self.boat.opposite();
    }

    /// Reverts a previous [`cross`](Self::cross) of the same members.
    #[inline]
    pub fn undo(&mut self, members: HorseSet) {
        self.boat = self.boat.opposite();
        self.destination = match self.boat {
            Bank::Start => self.destination.difference(members),
            Bank::Destination => self.destination.union(members),
        };
        debug_assert!(members.is_subset(self.at_boat()));
    }

    /// Applies a crossing after checking that it is legal in this state.
    ///
    /// # Errors
    ///
    /// Returns [`RiverCrossingError::InvalidState`] if the crossing is empty,
    /// travels in the wrong direction, or carries a horse that is not on the
    /// boat's bank.
    pub fn apply(&mut self, crossing: &Crossing) -> Result<()> {
        let members = crossing.mask();
        if members.is_empty() {
            return Err(RiverCrossingError::InvalidState(
                "crossing carries no horse".to_string(),
            ));
        }
        if crossing.direction().source() != self.boat {
            return Err(RiverCrossingError::InvalidState(format!(
                "boat is on the {} bank, crossing departs from the {} bank",
                self.boat,
                crossing.direction().source()
            )));
        }
        if !members.is_subset(self.at_boat()) {
            return Err(RiverCrossingError::InvalidState(format!(
                "horses {:?} are not on the {} bank",
                members.difference(self.at_boat()),
                self.boat
            )));
        }
        self.cross(members);
        Ok(())
    }
}
