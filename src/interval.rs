//! Root relative semitone intervals and the scale degree slots they occupy.

use std::collections::BTreeSet;

use derive_more::{Deref, Into};

// -------------------------------------------------------------------------------------------------

/// Largest interval in an [`IntervalSet`]: a major fourteenth (compound major seventh).
pub const MAX_INTERVAL: u8 = 23;

// slot (scale degree) of each interval in [0..23]
const SLOTS: [u8; 24] = [
    1, 2, 2, 3, 3, 4, 5, 5, 5, 6, 7, 7, //
    8, 9, 9, 9, 10, 11, 11, 12, 13, 13, 14, 14,
];

// degree name of each interval in [0..23], as used in Harte degree lists
const DEGREE_NAMES: [&str; 24] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "#5", "6", "b7", "7", //
    "8", "b9", "9", "#9", "10", "11", "#11", "12", "b13", "13", "b14", "14",
];

// major scale interval of degrees [1..14]
const MAJOR_SCALE: [u8; 14] = [0, 2, 4, 5, 7, 9, 11, 12, 14, 16, 17, 19, 21, 23];

/// Scale degree an interval occupies: a flat fifth and a sharp fifth both occupy the fifth's
/// slot, a sharp ninth the ninth's slot. Intervals are folded into [0..23].
pub fn slot_of(interval: u8) -> u8 {
    SLOTS[(interval % (MAX_INTERVAL + 1)) as usize]
}

/// Name of the interval as an altered degree, e.g. `b3`, `5`, `#9`.
pub fn degree_name(interval: u8) -> &'static str {
    DEGREE_NAMES[(interval % (MAX_INTERVAL + 1)) as usize]
}

/// Interval of the given degree in the major scale, `None` if out of range [1..14].
pub fn major_scale_interval(degree: u8) -> Option<u8> {
    if (1..=14).contains(&degree) {
        Some(MAJOR_SCALE[degree as usize - 1])
    } else {
        None
    }
}

/// Fold a signed semitone offset into [0..23].
pub fn fold(interval: i32) -> u8 {
    interval.rem_euclid(MAX_INTERVAL as i32 + 1) as u8
}

// -------------------------------------------------------------------------------------------------

/// Ordered, deduplicated set of semitone offsets from a chord root in range [0..23].
///
/// Sets are never changed in place: all modifiers return a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref, Into)]
pub struct IntervalSet(BTreeSet<u8>);

impl IntervalSet {
    /// Create a new set from the given intervals. Out of range values are folded.
    pub fn new(intervals: &[u8]) -> Self {
        intervals.iter().map(|i| fold(*i as i32)).collect()
    }

    /// A copy of the set with the given (folded) interval inserted.
    #[must_use]
    pub fn with(&self, interval: i32) -> Self {
        let mut intervals = self.0.clone();
        intervals.insert(fold(interval));
        Self(intervals)
    }

    /// A copy of the set with all intervals in the given slot removed.
    #[must_use]
    pub fn without_slot(&self, degree: u8) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|i| slot_of(*i) != degree)
                .collect(),
        )
    }

    /// Intervals which currently occupy the given scale degree slot.
    pub fn in_slot(&self, degree: u8) -> Vec<u8> {
        self.0
            .iter()
            .copied()
            .filter(|i| slot_of(*i) == degree)
            .collect()
    }

    /// Intervals in ascending order.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.iter().copied().collect()
    }

    /// Intervals which are in self, but not in other, in ascending order.
    pub fn difference(&self, other: &IntervalSet) -> Vec<u8> {
        self.0.difference(&other.0).copied().collect()
    }
}

impl FromIterator<u8> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self(iter.into_iter().map(|i| fold(i as i32)).collect())
    }
}

// --------------------------------------------------------------------------------------------------
