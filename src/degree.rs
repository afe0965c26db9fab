//! Scale degree modifications (add, alter, subtract) applied on top of chord kind intervals.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    interval::{major_scale_interval, IntervalSet, MAX_INTERVAL},
    ChordKindTag, Error,
};

// -------------------------------------------------------------------------------------------------

/// Lowest and highest scale degree a [`Degree`] may reference.
pub const MIN_DEGREE: i32 = 1;
pub const MAX_DEGREE: i32 = 13;

// -------------------------------------------------------------------------------------------------

/// Type of a degree modification.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeType {
    #[display("add")]
    Add,
    #[display("alter")]
    Alter,
    #[display("subtract")]
    Subtract,
}

/// A single scale degree modification of a chord, e.g. an added ninth or a flattened fifth.
///
/// Deserializes from `{"type": "add", "value": 9, "alter": 0}` and from the MusicXML style
/// `{"degree-type": "add", "degree-value": 9, "degree-alter": 0}` spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Degree {
    #[serde(rename = "type", alias = "degree-type")]
    pub kind: DegreeType,
    #[serde(alias = "degree-value")]
    pub value: i32,
    #[serde(alias = "degree-alter", default)]
    pub alter: i32,
}

impl Degree {
    /// Add the given degree, shifted by `alter` semitones.
    pub fn add(value: i32, alter: i32) -> Self {
        Self {
            kind: DegreeType::Add,
            value,
            alter,
        }
    }

    /// Shift the interval at the given degree by `alter` semitones.
    pub fn alter(value: i32, alter: i32) -> Self {
        Self {
            kind: DegreeType::Alter,
            value,
            alter,
        }
    }

    /// Remove the interval at the given degree.
    pub fn subtract(value: i32) -> Self {
        Self {
            kind: DegreeType::Subtract,
            value,
            alter: 0,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Unaltered interval of the given degree in the context of the given intervals.
///
/// All degrees but the seventh follow the major scale. A seventh follows the seventh which
/// already is present, else it's major for major kinds and minor for all other kinds.
pub fn natural_interval(degree: u8, intervals: &IntervalSet, tag: ChordKindTag) -> u8 {
    if degree == 7 {
        if intervals.contains(&11) {
            11
        } else if intervals.contains(&10) || tag != ChordKindTag::Major {
            10
        } else {
            11
        }
    } else {
        major_scale_interval(degree).unwrap_or(0)
    }
}

/// Apply the given degree modifications in order to the base intervals of a kind with the
/// given tag. Returns a new, sorted and deduplicated interval set.
///
/// - `add` inserts the degree's natural interval plus its alteration.
/// - `alter` shifts the intervals which occupy the degree's slot, or adds when the slot is empty.
/// - `subtract` removes the intervals which occupy the degree's slot, if any.
pub fn apply(
    base: &IntervalSet,
    tag: ChordKindTag,
    degrees: &[Degree],
) -> Result<IntervalSet, Error> {
    let mut intervals = base.clone();
    for (index, degree) in degrees.iter().enumerate() {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree.value) {
            return Err(Error::InvalidDegreeOperation {
                index,
                degree: degree.value,
            });
        }
        let value = degree.value as u8;
        // alterations fold into two octaves like intervals
        let alter = degree.alter.rem_euclid(MAX_INTERVAL as i32 + 1);
        let added = |intervals: &IntervalSet| {
            intervals.with(natural_interval(value, intervals, tag) as i32 + alter)
        };
        intervals = match degree.kind {
            DegreeType::Add => added(&intervals),
            DegreeType::Alter => {
                let occupied = intervals.in_slot(value);
                if occupied.is_empty() {
                    added(&intervals)
                } else {
                    occupied
                        .into_iter()
                        .fold(intervals.without_slot(value), |set, interval| {
                            set.with(interval as i32 + alter)
                        })
                }
            }
            DegreeType::Subtract => intervals.without_slot(value),
        };
    }
    Ok(intervals)
}

// --------------------------------------------------------------------------------------------------
