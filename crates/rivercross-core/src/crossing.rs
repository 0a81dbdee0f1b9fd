//! A single boat trip carrying a group of horses.

use std::fmt;

use smallvec::SmallVec;

use crate::bank::{Bank, HorseSet};
use crate::horse::{Herd, HorseId};

/// Inline storage for the horses of one crossing.
///
/// Group sizes are small in practice, so four members stay on the stack.
pub type CrossingMembers = SmallVec<[HorseId; 4]>;

/// Ordered crossings leading from the initial state.
pub type CrossingPath = Vec<Crossing>;

/// Direction of a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From the start bank to the destination bank.
    Forward,
    /// From the destination bank back to the start bank.
    Return,
}

impl Direction {
    /// Returns the direction a boat docked at `bank` travels in.
    #[inline]
    pub fn departing_from(bank: Bank) -> Self {
        match bank {
            Bank::Start => Direction::Forward,
            Bank::Destination => Direction::Return,
        }
    }

    /// Returns the bank this crossing departs from.
    #[inline]
    pub fn source(self) -> Bank {
        match self {
            Direction::Forward => Bank::Start,
            Direction::Return => Bank::Destination,
        }
    }

    /// Returns the bank this crossing arrives at.
    #[inline]
    pub fn target(self) -> Bank {
        self.source().opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "Forward"),
            Direction::Return => write!(f, "Return"),
        }
    }
}

/// One boat trip: a group of horses crossing together in one direction.
///
/// The group moves at its slowest member's pace, so the crossing takes the
/// maximum duration among its members.
///
/// # Example
///
/// ```
/// use rivercross_core::{Crossing, Direction, Herd, HorseId};
///
/// let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
/// let crossing = Crossing::new(
///     [HorseId::new(0), HorseId::new(3)],
///     Direction::Forward,
///     &herd,
/// );
///
/// assert_eq!(crossing.duration(), 10);
/// assert_eq!(crossing.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    members: CrossingMembers,
    direction: Direction,
    duration: u64,
}

impl Crossing {
    /// Creates a crossing, looking up member durations in the herd.
    ///
    /// Members are kept in the order given.
    pub fn new(
        members: impl IntoIterator<Item = HorseId>,
        direction: Direction,
        herd: &Herd,
    ) -> Self {
        let members: CrossingMembers = members.into_iter().collect();
        let duration = members
            .iter()
            .map(|&id| herd.duration(id))
            .max()
            .unwrap_or(0);
        Self {
            members,
            direction,
            duration,
        }
    }

    /// Returns the horses on this crossing.
    #[inline]
    pub fn members(&self) -> &[HorseId] {
        &self.members
    }

    /// Returns the number of horses on this crossing.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the crossing carries no horse.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the time the crossing takes.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns the members as a set.
    pub fn mask(&self) -> HorseSet {
        self.members.iter().copied().collect()
    }

    /// Returns true for a single horse riding alone.
    #[inline]
    pub fn is_solo(&self) -> bool {
        self.members.len() == 1
    }
}
