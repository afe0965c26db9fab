//! Triad and simplified reductions, applied to a [`Chord`] before it gets encoded.

use derive_more::Display;
use serde::Serialize;

use crate::{
    degree::natural_interval,
    interval::{slot_of, IntervalSet},
    Chord, ChordKind, ChordKindTag, Degree, Error,
};

// -------------------------------------------------------------------------------------------------

/// Resolution a harmony gets encoded with.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// Encode the chord as annotated.
    #[display("full")]
    Full,
    /// Reduce to root, third and fifth.
    #[display("triad")]
    Triad,
    /// Collapse into the canonical chord of its [`Family`].
    #[display("simplified")]
    Simplified,
}

/// A chord as substituted by a [`Reduction`], along with its recomputed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedHarmony {
    pub chord: Chord,
    pub tag: ChordKindTag,
}

impl Reduction {
    /// Substitute kind and degrees of the given chord with this reduction's rule.
    pub fn reduce(&self, chord: &Chord) -> Result<ReducedHarmony, Error> {
        match self {
            Reduction::Full => Ok(ReducedHarmony {
                chord: chord.clone(),
                tag: chord.tag(),
            }),
            Reduction::Triad => {
                let triad = triad_intervals(chord.intervals());
                let (kind, degrees) = respell(&triad);
                Ok(ReducedHarmony {
                    chord: Chord::new(kind, degrees)?,
                    tag: triad_tag(&triad),
                })
            }
            Reduction::Simplified => {
                let family = Family::of(chord);
                Ok(ReducedHarmony {
                    chord: Chord::new(family.representative(), vec![])?,
                    tag: family.tag(),
                })
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Coarse chord families of the simplified reduction.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    #[display("major-family")]
    MajorFamily,
    #[display("minor-family")]
    MinorFamily,
    #[display("dominant-family")]
    DominantFamily,
    #[display("diminished-family")]
    DiminishedFamily,
    #[display("augmented-family")]
    AugmentedFamily,
    #[display("other")]
    Other,
}

impl Family {
    /// Family of the given chord: the kind's family, unless the chord's degrees change the
    /// quality of the kind's triad. Then the family follows the modified triad.
    pub fn of(chord: &Chord) -> Self {
        let kind_triad = triad_tag(&chord.kind().interval_set());
        let chord_triad = triad_tag(chord.intervals());
        if kind_triad == chord_triad {
            Self::from(chord.tag())
        } else {
            Self::from(chord_triad)
        }
    }

    /// Canonical chord kind which represents the family.
    pub fn representative(&self) -> ChordKind {
        match self {
            Family::MajorFamily => ChordKind::Major,
            Family::MinorFamily => ChordKind::Minor,
            Family::DominantFamily => ChordKind::Dominant,
            Family::DiminishedFamily => ChordKind::Diminished,
            Family::AugmentedFamily => ChordKind::Augmented,
            Family::Other => ChordKind::Power,
        }
    }

    /// Classification tag of the family.
    pub fn tag(&self) -> ChordKindTag {
        match self {
            Family::MajorFamily => ChordKindTag::Major,
            Family::MinorFamily => ChordKindTag::Minor,
            Family::DominantFamily => ChordKindTag::Dominant,
            Family::DiminishedFamily => ChordKindTag::Diminished,
            Family::AugmentedFamily => ChordKindTag::Augmented,
            Family::Other => ChordKindTag::Other,
        }
    }
}

impl From<ChordKindTag> for Family {
    fn from(tag: ChordKindTag) -> Self {
        match tag {
            ChordKindTag::Major => Family::MajorFamily,
            ChordKindTag::Minor => Family::MinorFamily,
            ChordKindTag::Dominant => Family::DominantFamily,
            ChordKindTag::Diminished | ChordKindTag::HalfDiminished => Family::DiminishedFamily,
            ChordKindTag::Augmented => Family::AugmentedFamily,
            ChordKindTag::Suspended | ChordKindTag::Power | ChordKindTag::Other => Family::Other,
        }
    }
}

// -------------------------------------------------------------------------------------------------

fn third_of(intervals: &IntervalSet) -> Option<u8> {
    [4, 3].into_iter().find(|i| intervals.contains(i))
}

fn fifth_of(intervals: &IntervalSet) -> Option<u8> {
    [7, 6, 8].into_iter().find(|i| intervals.contains(i))
}

/// Root, third and fifth of the given intervals. Without a third, a perfect fourth takes
/// its place. Missing tones are never filled in.
pub fn triad_intervals(intervals: &IntervalSet) -> IntervalSet {
    let mut triad = Vec::with_capacity(3);
    if intervals.contains(&0) {
        triad.push(0);
    }
    match third_of(intervals) {
        Some(third) => triad.push(third),
        None => {
            if intervals.contains(&5) {
                triad.push(5);
            }
        }
    }
    if let Some(fifth) = fifth_of(intervals) {
        triad.push(fifth);
    }
    IntervalSet::new(&triad)
}

/// Classification of the triad the given intervals form.
pub fn triad_tag(intervals: &IntervalSet) -> ChordKindTag {
    match (third_of(intervals), fifth_of(intervals)) {
        (Some(3), Some(6)) => ChordKindTag::Diminished,
        (Some(4), Some(8)) => ChordKindTag::Augmented,
        (Some(4), _) => ChordKindTag::Major,
        (Some(_), _) => ChordKindTag::Minor,
        (None, Some(_)) => ChordKindTag::Suspended,
        (None, None) => {
            if intervals.contains(&5) {
                ChordKindTag::Suspended
            } else {
                ChordKindTag::Other
            }
        }
    }
}

// kinds a reduced triad gets spelled with, in order of preference
const TRIAD_KINDS: [ChordKind; 7] = [
    ChordKind::Major,
    ChordKind::Minor,
    ChordKind::Diminished,
    ChordKind::Augmented,
    ChordKind::SuspendedFourth,
    ChordKind::Power,
    ChordKind::Pedal,
];

// Express the given intervals as the closest triad kind plus degree modifications.
fn respell(intervals: &IntervalSet) -> (ChordKind, Vec<Degree>) {
    let mut best = (TRIAD_KINDS[0], usize::MAX);
    for kind in TRIAD_KINDS {
        let base = kind.interval_set();
        let distance = base.difference(intervals).len() + intervals.difference(&base).len();
        if distance < best.1 {
            best = (kind, distance);
        }
    }
    let kind = best.0;
    let base = kind.interval_set();
    let mut degrees = base
        .difference(intervals)
        .into_iter()
        .map(|interval| Degree::subtract(slot_of(interval) as i32))
        .collect::<Vec<_>>();
    let mut current = base.clone();
    for slot in degrees.iter().map(|degree| degree.value as u8) {
        current = current.without_slot(slot);
    }
    for interval in intervals.difference(&base) {
        let slot = slot_of(interval);
        let natural = natural_interval(slot, &current, kind.tag());
        degrees.push(Degree::add(slot as i32, interval as i32 - natural as i32));
        current = current.with(interval as i32);
    }
    (kind, degrees)
}

// --------------------------------------------------------------------------------------------------
