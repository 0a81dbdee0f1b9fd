//! Horses and the herd that has to cross the river.

use std::fmt;

use crate::bank::{HorseSet, MAX_HORSES};
use crate::error::{Result, RiverCrossingError};

/// Index of a horse within its herd (0..N-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorseId(usize);

impl HorseId {
    /// Creates a horse id from its index in the herd.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the index of this horse in the herd.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for HorseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A horse with its fixed single-crossing duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horse {
    id: HorseId,
    duration: u64,
    label: String,
}

impl Horse {
    /// Returns the id of this horse.
    #[inline]
    pub fn id(&self) -> HorseId {
        self.id
    }

    /// Returns the time this horse needs for one crossing.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Returns the display label of this horse.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The immutable, ordered collection of horses to move across.
///
/// Created once from the configuration and shared read-only by every
/// search node.
///
/// # Example
///
/// ```
/// use rivercross_core::{Herd, HorseId};
///
/// let herd = Herd::from_durations(vec![1, 2, 5, 10]).unwrap();
/// assert_eq!(herd.len(), 4);
/// assert_eq!(herd.duration(HorseId::new(2)), 5);
/// assert_eq!(herd.horse(HorseId::new(0)).label(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Herd {
    horses: Vec<Horse>,
}

impl Herd {
    /// Creates a herd from crossing durations and matching labels.
    ///
    /// # Errors
    ///
    /// Returns [`RiverCrossingError::Config`] if the herd is empty, larger
    /// than [`MAX_HORSES`], contains a zero duration, or the label count does
    /// not match the duration count.
    pub fn new(durations: Vec<u64>, labels: Vec<String>) -> Result<Self> {
        if durations.is_empty() {
            return Err(RiverCrossingError::Config(
                "at least one horse is required".to_string(),
            ));
        }
        if durations.len() > MAX_HORSES {
            return Err(RiverCrossingError::Config(format!(
                "at most {MAX_HORSES} horses are supported, got {}",
                durations.len()
            )));
        }
        if labels.len() != durations.len() {
            return Err(RiverCrossingError::Config(format!(
                "{} labels given for {} horses",
                labels.len(),
                durations.len()
            )));
        }
        if let Some(index) = durations.iter().position(|&d| d == 0) {
            return Err(RiverCrossingError::Config(format!(
                "horse {index} has a zero crossing time"
            )));
        }

        let horses = durations
            .into_iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (duration, label))| Horse {
                id: HorseId::new(index),
                duration,
                label,
            })
            .collect();

        Ok(Self { horses })
    }

    /// Creates a herd with automatically assigned labels.
    ///
    /// Labels are `A`..`Z` for herds of up to 26 horses and `1`..`N`
    /// otherwise.
    pub fn from_durations(durations: Vec<u64>) -> Result<Self> {
        let count = durations.len();
        let labels = (0..count).map(|i| auto_label(i, count)).collect();
        Self::new(durations, labels)
    }

    /// Returns the number of horses.
    #[inline]
    pub fn len(&self) -> usize {
        self.horses.len()
    }

    /// Returns true if the herd has no horses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.horses.is_empty()
    }

    /// Returns the horse with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this herd.
    #[inline]
    pub fn horse(&self, id: HorseId) -> &Horse {
        &self.horses[id.index()]
    }

    /// Returns the crossing duration of the given horse.
    #[inline]
    pub fn duration(&self, id: HorseId) -> u64 {
        self.horses[id.index()].duration
    }

    /// Returns all horses in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Horse> {
        self.horses.iter()
    }

    /// Returns the set containing every horse of the herd.
    pub fn all(&self) -> HorseSet {
        HorseSet::full(self.horses.len())
    }

    /// Returns the duration of the slowest horse.
    pub fn slowest(&self) -> u64 {
        self.horses.iter().map(|h| h.duration).max().unwrap_or(0)
    }

    /// Returns the labels of the given horses, in id order.
    pub fn labels_of(&self, ids: impl IntoIterator<Item = HorseId>) -> Vec<String> {
        ids.into_iter()
            .map(|id| self.horse(id).label.clone())
            .collect()
    }
}

/// Returns the default label for horse `index` in a herd of `count` horses.
pub fn auto_label(index: usize, count: usize) -> String {
    if count <= 26 {
        letter_label(index)
    } else {
        number_label(index)
    }
}

/// Returns the letter label (`A`, `B`, ...) for an index below 26.
pub fn letter_label(index: usize) -> String {
    debug_assert!(index < 26);
    char::from(b'A' + index as u8).to_string()
}

/// Returns the 1-based numeric label for an index.
pub fn number_label(index: usize) -> String {
    (index + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_herd_from_durations() {
        let herd = Herd::from_durations(vec![3, 1, 4]).unwrap();

        assert_eq!(herd.len(), 3);
        assert_eq!(herd.duration(HorseId::new(0)), 3);
        assert_eq!(herd.horse(HorseId::new(2)).label(), "C");
        assert_eq!(herd.slowest(), 4);
        assert_eq!(herd.all().len(), 3);
    }

    #[test]
    fn test_herd_numeric_labels_beyond_alphabet() {
        let herd = Herd::from_durations(vec![1; 27]).unwrap();

        assert_eq!(herd.horse(HorseId::new(0)).label(), "1");
        assert_eq!(herd.horse(HorseId::new(26)).label(), "27");
    }

    #[test]
    fn test_herd_rejects_empty() {
        let err = Herd::from_durations(vec![]).unwrap_err();
        assert!(matches!(err, RiverCrossingError::Config(_)));
    }

    #[test]
    fn test_herd_rejects_zero_duration() {
        let err = Herd::from_durations(vec![1, 0]).unwrap_err();
        assert_eq!(
            err,
            RiverCrossingError::Config("horse 1 has a zero crossing time".to_string())
        );
    }

    #[test]
    fn test_herd_rejects_label_mismatch() {
        let err = Herd::new(vec![1, 2], vec!["x".to_string()]).unwrap_err();
        assert!(matches!(err, RiverCrossingError::Config(_)));
    }

    #[test]
    fn test_herd_rejects_too_many_horses() {
        let err = Herd::from_durations(vec![1; MAX_HORSES + 1]).unwrap_err();
        assert!(matches!(err, RiverCrossingError::Config(_)));
    }

    #[test]
    fn test_labels_of() {
        let herd = Herd::from_durations(vec![1, 2, 3]).unwrap();
        let labels = herd.labels_of([HorseId::new(2), HorseId::new(0)]);
        assert_eq!(labels, vec!["C".to_string(), "A".to_string()]);
    }
}
