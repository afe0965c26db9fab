//! Chords as [`ChordKind`] with applied [`Degree`] modifications.

use crate::{degree, ChordKind, ChordKindTag, Degree, Error, IntervalSet};

// --------------------------------------------------------------------------------------------------

/// A chord kind with its degree modifications and the resulting root relative intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    kind: ChordKind,
    degrees: Vec<Degree>,
    intervals: IntervalSet,
}

impl Chord {
    /// Create a new chord by applying the given degrees to the kind's intervals.
    pub fn new(kind: ChordKind, degrees: Vec<Degree>) -> Result<Self, Error> {
        let intervals = degree::apply(&kind.interval_set(), kind.tag(), &degrees)?;
        Ok(Self {
            kind,
            degrees,
            intervals,
        })
    }

    /// Try creating a new chord from a kind name or alias and the given degrees.
    pub fn from_kind_name(kind: &str, degrees: Vec<Degree>) -> Result<Self, Error> {
        Self::new(kind.parse()?, degrees)
    }

    /// Chord kind.
    pub fn kind(&self) -> ChordKind {
        self.kind
    }

    /// Full resolution classification of the chord kind. Degrees do not change the tag.
    pub fn tag(&self) -> ChordKindTag {
        self.kind.tag()
    }

    /// Applied degree modifications.
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Final intervals after all degree modifications.
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }
}

impl TryFrom<ChordKind> for Chord {
    type Error = Error;

    fn try_from(kind: ChordKind) -> Result<Self, Error> {
        Self::new(kind, vec![])
    }
}

// --------------------------------------------------------------------------------------------------
