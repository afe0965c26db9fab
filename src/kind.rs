//! Chord kinds (qualities) as used in lead sheet and MusicXML harmony annotations.

use std::{collections::HashMap, str::FromStr};

use derive_more::Display;
use lazy_static::lazy_static;
use serde::Serialize;

use crate::{interval::IntervalSet, Error};

// --------------------------------------------------------------------------------------------------

// major chords
const MAJOR: [u8; 3] = [0, 4, 7];
const AUG: [u8; 3] = [0, 4, 8];
const SIX: [u8; 4] = [0, 4, 7, 9];
const MAJOR7: [u8; 4] = [0, 4, 7, 11];
const MAJOR9: [u8; 5] = [0, 4, 7, 11, 14];
const MAJOR11: [u8; 6] = [0, 4, 7, 11, 14, 17];
const MAJOR13: [u8; 7] = [0, 4, 7, 11, 14, 17, 21];
const AUG7: [u8; 4] = [0, 4, 8, 10];
// dominant chords
const SEVEN: [u8; 4] = [0, 4, 7, 10];
const NINE: [u8; 5] = [0, 4, 7, 10, 14];
const ELEVEN: [u8; 6] = [0, 4, 7, 10, 14, 17];
const THIRTEEN: [u8; 7] = [0, 4, 7, 10, 14, 17, 21];
// minor chords
const MINOR: [u8; 3] = [0, 3, 7];
const DIMINISHED: [u8; 3] = [0, 3, 6];
const MINOR6: [u8; 4] = [0, 3, 7, 9];
const MINOR7: [u8; 4] = [0, 3, 7, 10];
const MINOR7FLAT5: [u8; 4] = [0, 3, 6, 10];
const DIMINISHED7: [u8; 4] = [0, 3, 6, 9];
const MINOR_MAJOR7: [u8; 4] = [0, 3, 7, 11];
const MINOR9: [u8; 5] = [0, 3, 7, 10, 14];
const MINOR11: [u8; 6] = [0, 3, 7, 10, 14, 17];
const MINOR13: [u8; 7] = [0, 3, 7, 10, 14, 17, 21];
// augmented sixths and other functional chords
const ITALIAN: [u8; 3] = [0, 4, 10];
const FRENCH: [u8; 4] = [0, 4, 6, 10];
const TRISTAN: [u8; 4] = [0, 6, 10, 15];
// other chords
const ROOT: [u8; 1] = [0];
const FIVE: [u8; 2] = [0, 7];
const SUS2: [u8; 3] = [0, 2, 7];
const SUS4: [u8; 3] = [0, 5, 7];

// --------------------------------------------------------------------------------------------------

/// Coarse classification of a chord kind, used for corpus statistics.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordKindTag {
    #[display("major")]
    Major,
    #[display("minor")]
    Minor,
    #[display("dominant")]
    Dominant,
    #[display("diminished")]
    Diminished,
    #[display("half-diminished")]
    HalfDiminished,
    #[display("augmented")]
    Augmented,
    #[display("suspended")]
    Suspended,
    #[display("power")]
    Power,
    #[display("other")]
    Other,
}

// --------------------------------------------------------------------------------------------------

/// All supported chord kinds. Names follow the MusicXML `kind` vocabulary.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChordKind {
    #[display("major")]
    Major,
    #[display("minor")]
    Minor,
    #[display("augmented")]
    Augmented,
    #[display("diminished")]
    Diminished,
    #[display("dominant")]
    Dominant,
    #[display("major-seventh")]
    MajorSeventh,
    #[display("minor-seventh")]
    MinorSeventh,
    #[display("diminished-seventh")]
    DiminishedSeventh,
    #[display("augmented-seventh")]
    AugmentedSeventh,
    #[display("half-diminished")]
    HalfDiminished,
    #[display("major-minor")]
    MinorMajorSeventh,
    #[display("major-sixth")]
    MajorSixth,
    #[display("minor-sixth")]
    MinorSixth,
    #[display("dominant-ninth")]
    DominantNinth,
    #[display("major-ninth")]
    MajorNinth,
    #[display("minor-ninth")]
    MinorNinth,
    #[display("dominant-11th")]
    DominantEleventh,
    #[display("major-11th")]
    MajorEleventh,
    #[display("minor-11th")]
    MinorEleventh,
    #[display("dominant-13th")]
    DominantThirteenth,
    #[display("major-13th")]
    MajorThirteenth,
    #[display("minor-13th")]
    MinorThirteenth,
    #[display("suspended-second")]
    SuspendedSecond,
    #[display("suspended-fourth")]
    SuspendedFourth,
    #[display("Neapolitan")]
    Neapolitan,
    #[display("Italian")]
    Italian,
    #[display("French")]
    French,
    #[display("German")]
    German,
    #[display("Tristan")]
    Tristan,
    #[display("pedal")]
    Pedal,
    #[display("power")]
    Power,
    #[display("other")]
    Other,
}

// map of all kind names and aliases
lazy_static! {
    static ref KIND_TABLE: HashMap<&'static str, ChordKind> = {
        let mut table = HashMap::from([
            ("dominant-seventh", ChordKind::Dominant),
            ("seventh", ChordKind::Dominant),
            ("half-diminished-seventh", ChordKind::HalfDiminished),
            ("minor-major", ChordKind::MinorMajorSeventh),
            ("minor-major-seventh", ChordKind::MinorMajorSeventh),
            ("sixth", ChordKind::MajorSixth),
            ("ninth", ChordKind::DominantNinth),
            ("dominant-eleventh", ChordKind::DominantEleventh),
            ("eleventh", ChordKind::DominantEleventh),
            ("major-eleventh", ChordKind::MajorEleventh),
            ("minor-eleventh", ChordKind::MinorEleventh),
            ("dominant-thirteenth", ChordKind::DominantThirteenth),
            ("thirteenth", ChordKind::DominantThirteenth),
            ("major-thirteenth", ChordKind::MajorThirteenth),
            ("minor-thirteenth", ChordKind::MinorThirteenth),
        ]);
        for kind in ChordKind::all() {
            table.insert(kind.name(), *kind);
        }
        table
    };
}

impl ChordKind {
    /// All chord kinds in table order.
    pub fn all() -> &'static [ChordKind] {
        static ALL: [ChordKind; 32] = [
            ChordKind::Major,
            ChordKind::Minor,
            ChordKind::Augmented,
            ChordKind::Diminished,
            ChordKind::Dominant,
            ChordKind::MajorSeventh,
            ChordKind::MinorSeventh,
            ChordKind::DiminishedSeventh,
            ChordKind::AugmentedSeventh,
            ChordKind::HalfDiminished,
            ChordKind::MinorMajorSeventh,
            ChordKind::MajorSixth,
            ChordKind::MinorSixth,
            ChordKind::DominantNinth,
            ChordKind::MajorNinth,
            ChordKind::MinorNinth,
            ChordKind::DominantEleventh,
            ChordKind::MajorEleventh,
            ChordKind::MinorEleventh,
            ChordKind::DominantThirteenth,
            ChordKind::MajorThirteenth,
            ChordKind::MinorThirteenth,
            ChordKind::SuspendedSecond,
            ChordKind::SuspendedFourth,
            ChordKind::Neapolitan,
            ChordKind::Italian,
            ChordKind::French,
            ChordKind::German,
            ChordKind::Tristan,
            ChordKind::Pedal,
            ChordKind::Power,
            ChordKind::Other,
        ];
        &ALL
    }

    /// All known kind names including aliases, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names = KIND_TABLE.keys().copied().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Canonical (MusicXML) name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ChordKind::Major => "major",
            ChordKind::Minor => "minor",
            ChordKind::Augmented => "augmented",
            ChordKind::Diminished => "diminished",
            ChordKind::Dominant => "dominant",
            ChordKind::MajorSeventh => "major-seventh",
            ChordKind::MinorSeventh => "minor-seventh",
            ChordKind::DiminishedSeventh => "diminished-seventh",
            ChordKind::AugmentedSeventh => "augmented-seventh",
            ChordKind::HalfDiminished => "half-diminished",
            ChordKind::MinorMajorSeventh => "major-minor",
            ChordKind::MajorSixth => "major-sixth",
            ChordKind::MinorSixth => "minor-sixth",
            ChordKind::DominantNinth => "dominant-ninth",
            ChordKind::MajorNinth => "major-ninth",
            ChordKind::MinorNinth => "minor-ninth",
            ChordKind::DominantEleventh => "dominant-11th",
            ChordKind::MajorEleventh => "major-11th",
            ChordKind::MinorEleventh => "minor-11th",
            ChordKind::DominantThirteenth => "dominant-13th",
            ChordKind::MajorThirteenth => "major-13th",
            ChordKind::MinorThirteenth => "minor-13th",
            ChordKind::SuspendedSecond => "suspended-second",
            ChordKind::SuspendedFourth => "suspended-fourth",
            ChordKind::Neapolitan => "Neapolitan",
            ChordKind::Italian => "Italian",
            ChordKind::French => "French",
            ChordKind::German => "German",
            ChordKind::Tristan => "Tristan",
            ChordKind::Pedal => "pedal",
            ChordKind::Power => "power",
            ChordKind::Other => "other",
        }
    }

    /// Raw semitone intervals of the kind, relative to the root.
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordKind::Major | ChordKind::Neapolitan => &MAJOR,
            ChordKind::Minor => &MINOR,
            ChordKind::Augmented => &AUG,
            ChordKind::Diminished => &DIMINISHED,
            ChordKind::Dominant | ChordKind::German => &SEVEN,
            ChordKind::MajorSeventh => &MAJOR7,
            ChordKind::MinorSeventh => &MINOR7,
            ChordKind::DiminishedSeventh => &DIMINISHED7,
            ChordKind::AugmentedSeventh => &AUG7,
            ChordKind::HalfDiminished => &MINOR7FLAT5,
            ChordKind::MinorMajorSeventh => &MINOR_MAJOR7,
            ChordKind::MajorSixth => &SIX,
            ChordKind::MinorSixth => &MINOR6,
            ChordKind::DominantNinth => &NINE,
            ChordKind::MajorNinth => &MAJOR9,
            ChordKind::MinorNinth => &MINOR9,
            ChordKind::DominantEleventh => &ELEVEN,
            ChordKind::MajorEleventh => &MAJOR11,
            ChordKind::MinorEleventh => &MINOR11,
            ChordKind::DominantThirteenth => &THIRTEEN,
            ChordKind::MajorThirteenth => &MAJOR13,
            ChordKind::MinorThirteenth => &MINOR13,
            ChordKind::SuspendedSecond => &SUS2,
            ChordKind::SuspendedFourth => &SUS4,
            ChordKind::Italian => &ITALIAN,
            ChordKind::French => &FRENCH,
            ChordKind::Tristan => &TRISTAN,
            ChordKind::Pedal | ChordKind::Other => &ROOT,
            ChordKind::Power => &FIVE,
        }
    }

    /// Intervals of the kind as [`IntervalSet`].
    pub fn interval_set(&self) -> IntervalSet {
        IntervalSet::new(self.intervals())
    }

    /// Coarse classification of the kind.
    pub fn tag(&self) -> ChordKindTag {
        match self {
            ChordKind::Major
            | ChordKind::MajorSeventh
            | ChordKind::MajorSixth
            | ChordKind::MajorNinth
            | ChordKind::MajorEleventh
            | ChordKind::MajorThirteenth
            | ChordKind::Neapolitan => ChordKindTag::Major,
            ChordKind::Minor
            | ChordKind::MinorSeventh
            | ChordKind::MinorMajorSeventh
            | ChordKind::MinorSixth
            | ChordKind::MinorNinth
            | ChordKind::MinorEleventh
            | ChordKind::MinorThirteenth => ChordKindTag::Minor,
            ChordKind::Dominant
            | ChordKind::DominantNinth
            | ChordKind::DominantEleventh
            | ChordKind::DominantThirteenth => ChordKindTag::Dominant,
            ChordKind::Diminished | ChordKind::DiminishedSeventh => ChordKindTag::Diminished,
            ChordKind::HalfDiminished => ChordKindTag::HalfDiminished,
            ChordKind::Augmented | ChordKind::AugmentedSeventh => ChordKindTag::Augmented,
            ChordKind::SuspendedSecond | ChordKind::SuspendedFourth => ChordKindTag::Suspended,
            ChordKind::Power => ChordKindTag::Power,
            ChordKind::Italian
            | ChordKind::French
            | ChordKind::German
            | ChordKind::Tristan
            | ChordKind::Pedal
            | ChordKind::Other => ChordKindTag::Other,
        }
    }

    /// Harte shorthand the kind is written with. An empty string means that the kind has no
    /// shorthand and is written as plain degree list.
    pub fn harte_shorthand(&self) -> &'static str {
        match self {
            ChordKind::Major | ChordKind::Neapolitan => "maj",
            ChordKind::Minor => "min",
            ChordKind::Augmented | ChordKind::AugmentedSeventh => "aug",
            ChordKind::Diminished => "dim",
            ChordKind::Dominant => "7",
            ChordKind::MajorSeventh => "maj7",
            ChordKind::MinorSeventh => "min7",
            ChordKind::DiminishedSeventh => "dim7",
            ChordKind::HalfDiminished => "hdim7",
            ChordKind::MinorMajorSeventh => "minmaj7",
            ChordKind::MajorSixth => "maj6",
            ChordKind::MinorSixth => "min6",
            ChordKind::DominantNinth | ChordKind::DominantEleventh | ChordKind::DominantThirteenth => {
                "9"
            }
            ChordKind::MajorNinth | ChordKind::MajorEleventh | ChordKind::MajorThirteenth => "maj9",
            ChordKind::MinorNinth | ChordKind::MinorEleventh | ChordKind::MinorThirteenth => "min9",
            ChordKind::SuspendedSecond => "sus2",
            ChordKind::SuspendedFourth => "sus4",
            ChordKind::Italian
            | ChordKind::French
            | ChordKind::German
            | ChordKind::Tristan
            | ChordKind::Pedal
            | ChordKind::Power
            | ChordKind::Other => "",
        }
    }

    /// Lead sheet chord symbol abbreviation, appended to the root name.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::Augmented => "aug",
            ChordKind::Diminished => "dim",
            ChordKind::Dominant => "7",
            ChordKind::MajorSeventh => "maj7",
            ChordKind::MinorSeventh => "m7",
            ChordKind::DiminishedSeventh => "dim7",
            ChordKind::AugmentedSeventh => "aug7",
            ChordKind::HalfDiminished => "m7b5",
            ChordKind::MinorMajorSeventh => "mMaj7",
            ChordKind::MajorSixth => "6",
            ChordKind::MinorSixth => "m6",
            ChordKind::DominantNinth => "9",
            ChordKind::MajorNinth => "maj9",
            ChordKind::MinorNinth => "m9",
            ChordKind::DominantEleventh => "11",
            ChordKind::MajorEleventh => "maj11",
            ChordKind::MinorEleventh => "m11",
            ChordKind::DominantThirteenth => "13",
            ChordKind::MajorThirteenth => "maj13",
            ChordKind::MinorThirteenth => "m13",
            ChordKind::SuspendedSecond => "sus2",
            ChordKind::SuspendedFourth => "sus4",
            ChordKind::Neapolitan => "N",
            ChordKind::Italian => "It+6",
            ChordKind::French => "Fr+6",
            ChordKind::German => "Ger+6",
            ChordKind::Tristan => "Tristan",
            ChordKind::Pedal => "ped",
            ChordKind::Power => "5",
            ChordKind::Other => "(1)",
        }
    }
}

impl FromStr for ChordKind {
    type Err = Error;

    /// Look up a kind by its name or alias. Exact matches win, then an ASCII case
    /// insensitive match is tried.
    fn from_str(kind: &str) -> Result<Self, Error> {
        let trimmed = kind.trim();
        KIND_TABLE
            .get(trimmed)
            .or_else(|| {
                KIND_TABLE
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
                    .map(|(_, kind)| kind)
            })
            .copied()
            .ok_or_else(|| Error::UnrecognizedChordKind(kind.to_string()))
    }
}

impl TryFrom<&str> for ChordKind {
    type Error = Error;

    fn try_from(kind: &str) -> Result<Self, Error> {
        Self::from_str(kind)
    }
}

// --------------------------------------------------------------------------------------------------

/// Interval set of the given kind string.
pub fn interval_set_of(kind: &str) -> Result<IntervalSet, Error> {
    Ok(ChordKind::from_str(kind)?.interval_set())
}

/// Classification tag of the given kind string.
pub fn tag_of(kind: &str) -> Result<ChordKindTag, Error> {
    Ok(ChordKind::from_str(kind)?.tag())
}

// --------------------------------------------------------------------------------------------------
