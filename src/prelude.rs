//! The leadsheet-harmony prelude.
//!
//! The purpose of this module is to alleviate imports of common harmony encoding types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use leadsheet_harmony::prelude::*;
//! ```

pub use super::{
    // notations
    notation::{harte, symbol},
    // all public basic types
    Chord,
    ChordKind,
    ChordKindTag,
    Degree,
    DegreeType,
    EncodedHarmony,
    Error,
    Family,
    HarmonyDistribution,
    HarmonyEncoder,
    IntervalSet,
    LeadSheet,
    PitchClassSet,
    PitchClassVector,
    PitchInput,
    RawHarmony,
    Reduction,
    Spelling,
    SpellingPreference,
};
