//! Raw harmony annotations as they come out of lead sheet scores.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    pitch::{letter_of, Letter},
    Degree, Error, PitchField, Spelling, SpellingPreference,
};

// -------------------------------------------------------------------------------------------------

/// A root or bass pitch as annotated: a spelled name, a MusicXML style step with alteration,
/// or an already resolved pitch class.
///
/// Deserializes from `"Bb"`, `10`, `{"step": "B", "alter": -1}` and from the MusicXML field
/// names `{"root-step": "B", "root-alter": -1}` or `{"bass-step": "B", "bass-alter": -1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PitchInput {
    PitchClass(i32),
    Name(String),
    Step {
        #[serde(alias = "root-step", alias = "bass-step")]
        step: String,
        #[serde(alias = "root-alter", alias = "bass-alter", default)]
        alter: i32,
    },
}

impl PitchInput {
    /// Resolve the input to a spelling. Names and steps are spelled as written, pitch classes
    /// are spelled with the given preference.
    pub fn resolve(
        &self,
        field: PitchField,
        preference: SpellingPreference,
    ) -> Result<Spelling, Error> {
        let malformed = || Error::MalformedPitchSpelling {
            field,
            spelling: self.to_string(),
        };
        match self {
            PitchInput::PitchClass(pitch_class) => {
                if (0..12).contains(pitch_class) {
                    Ok(letter_of(*pitch_class as u8, preference))
                } else {
                    Err(malformed())
                }
            }
            PitchInput::Name(name) => Spelling::try_from(name.as_str()).map_err(|err| {
                log::debug!("failed to resolve {} '{}': {}", field, name, err);
                malformed()
            }),
            PitchInput::Step { step, alter } => {
                let mut chars = step.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        let letter = Letter::try_from(c).map_err(|_| malformed())?;
                        Spelling::new(letter, *alter).map_err(|_| malformed())
                    }
                    _ => Err(malformed()),
                }
            }
        }
    }
}

impl Display for PitchInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitchInput::PitchClass(pitch_class) => write!(f, "{}", pitch_class),
            PitchInput::Name(name) => write!(f, "{}", name),
            PitchInput::Step { step, alter } => write!(f, "{}{:+}", step, alter),
        }
    }
}

impl From<&str> for PitchInput {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<u8> for PitchInput {
    fn from(pitch_class: u8) -> Self {
        Self::PitchClass(pitch_class as i32)
    }
}

// -------------------------------------------------------------------------------------------------

/// One harmony token of a lead sheet: root, kind name, ordered degree modifications and an
/// optional bass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHarmony {
    pub root: PitchInput,
    pub kind: String,
    #[serde(default)]
    pub degrees: Vec<Degree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bass: Option<PitchInput>,
}

impl RawHarmony {
    /// Create a new harmony without degrees and bass.
    pub fn new<P: Into<PitchInput>>(root: P, kind: &str) -> Self {
        Self {
            root: root.into(),
            kind: kind.to_string(),
            degrees: vec![],
            bass: None,
        }
    }

    /// Append the given degree modification.
    #[must_use]
    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.degrees.push(degree);
        self
    }

    /// Set the bass.
    #[must_use]
    pub fn with_bass<P: Into<PitchInput>>(mut self, bass: P) -> Self {
        self.bass = Some(bass.into());
        self
    }
}

// --------------------------------------------------------------------------------------------------
