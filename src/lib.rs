//! Harmony encoding for lead sheet corpora.
//!
//! Converts symbolic harmony annotations (root, chord kind, added or altered degrees and an
//! optional bass) into chord symbols, Harte notation, pitch class sets and binary pitch class
//! vectors, with optional triad and simplified reductions, and collects frequency statistics
//! over batches of annotations.

pub mod error;
pub use error::{Error, PitchField};

pub mod pitch;
pub use pitch::{Letter, Spelling, SpellingPreference};

pub mod interval;
pub use interval::IntervalSet;

pub mod kind;
pub use kind::{ChordKind, ChordKindTag};

pub mod degree;
pub use degree::{Degree, DegreeType};

pub mod chord;
pub use chord::Chord;

pub mod pitch_class;
pub use pitch_class::{PitchClassSet, PitchClassVector};

pub mod reduction;
pub use reduction::{Family, ReducedHarmony, Reduction};

pub mod notation;

pub mod harmony;
pub use harmony::{PitchInput, RawHarmony};

pub mod encoder;
pub use encoder::{EncodedHarmony, HarmonyEncoder};

pub mod batch;
pub use batch::HarmonyDistribution;

pub mod corpus;
pub use corpus::LeadSheet;

pub mod prelude;

// -------------------------------------------------------------------------------------------------
