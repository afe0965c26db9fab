//! Pitch class sets and their fixed width binary vector representation.

use std::fmt::Display;

use derive_more::Deref;
use serde::{Serialize, Serializer};

use crate::IntervalSet;

// -------------------------------------------------------------------------------------------------

/// Set of pitch classes in range [0..11], anchored at a chord root.
///
/// Iterates in ascending order starting at the root pitch class, wrapping at 12, so a D
/// half-diminished chord iterates as `2, 5, 8, 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PitchClassSet {
    root: u8,
    mask: u16,
}

impl PitchClassSet {
    /// Fold the given root relative intervals into pitch classes.
    pub fn from_intervals(root: u8, intervals: &IntervalSet) -> Self {
        let root = root % 12;
        let mask = intervals
            .iter()
            .fold(0, |mask, interval| mask | 1 << ((root + interval) % 12));
        Self { root, mask }
    }

    /// Rebuild a set from its binary vector representation.
    pub fn from_vector(root: u8, vector: &PitchClassVector) -> Self {
        let mask = vector
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit != 0)
            .fold(0, |mask, (pitch_class, _)| mask | 1 << pitch_class);
        Self {
            root: root % 12,
            mask,
        }
    }

    /// Root pitch class the set is anchored at.
    pub fn root(&self) -> u8 {
        self.root
    }

    /// Number of pitch classes in the set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// True when the set contains no pitch classes.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// True when the given pitch class is a member.
    pub fn contains(&self, pitch_class: u8) -> bool {
        pitch_class < 12 && self.mask & (1 << pitch_class) != 0
    }

    /// True when all members of self are members of other.
    pub fn is_subset(&self, other: &PitchClassSet) -> bool {
        self.mask & !other.mask == 0
    }

    /// Members, ascending from the root.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..12)
            .map(|step| (self.root + step) % 12)
            .filter(|pitch_class| self.contains(*pitch_class))
    }

    /// Members as vector, ascending from the root.
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Binary vector representation of the set.
    pub fn to_vector(&self) -> PitchClassVector {
        let mut bits = [0; 12];
        for (pitch_class, bit) in bits.iter_mut().enumerate() {
            *bit = u8::from(self.mask & (1 << pitch_class) != 0);
        }
        PitchClassVector(bits)
    }
}

impl Display for PitchClassSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members = self
            .iter()
            .map(|pitch_class| pitch_class.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", members.join(", "))
    }
}

impl Serialize for PitchClassSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

// -------------------------------------------------------------------------------------------------

/// Fixed width binary pitch class vector: entry `i` is 1 iff pitch class `i` is set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deref, Serialize)]
pub struct PitchClassVector([u8; 12]);

impl PitchClassVector {
    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|bit| **bit != 0).count()
    }
}

impl Display for PitchClassVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits = self.0.iter().map(|bit| bit.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", bits.join(", "))
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pitch_classes() {
        let set = PitchClassSet::from_intervals(2, &IntervalSet::new(&[0, 3, 6, 10]));
        assert_eq!(set.to_vec(), vec![2, 5, 8, 0]);
        assert_eq!(set.root(), 2);
        assert_eq!(set.len(), 4);
        assert!(set.contains(8));
        assert!(!set.contains(7));
        assert!(!set.contains(14));
        assert_eq!(set.to_string(), "[2, 5, 8, 0]");

        // compound intervals fold
        let set = PitchClassSet::from_intervals(7, &IntervalSet::new(&[0, 4, 7, 10, 14]));
        assert_eq!(set.to_vec(), vec![7, 9, 11, 2, 5]);
    }

    #[test]
    fn vectors() {
        let set = PitchClassSet::from_intervals(0, &IntervalSet::new(&[0, 4, 7, 11]));
        let vector = set.to_vector();
        assert_eq!(*vector, [1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(vector.count_ones(), 4);
        assert_eq!(vector.to_string(), "[1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1]");
        assert_eq!(PitchClassSet::from_vector(0, &vector), set);
    }

    #[test]
    fn subsets() {
        let full = PitchClassSet::from_intervals(0, &IntervalSet::new(&[0, 4, 7, 11]));
        let triad = PitchClassSet::from_intervals(0, &IntervalSet::new(&[0, 4, 7]));
        assert!(triad.is_subset(&full));
        assert!(!full.is_subset(&triad));
    }

    #[test]
    fn serialization() {
        let set = PitchClassSet::from_intervals(2, &IntervalSet::new(&[0, 3, 6, 10]));
        assert_eq!(serde_json::to_string(&set).unwrap(), "[2,5,8,0]");
        assert_eq!(
            serde_json::to_string(&set.to_vector()).unwrap(),
            "[1,0,1,0,0,1,0,0,1,0,0,0]"
        );
    }
}
