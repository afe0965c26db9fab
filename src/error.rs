//! Typed failures of the harmony encoding engine.

use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// Input field of a [`RawHarmony`](crate::RawHarmony) that holds a pitch spelling.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PitchField {
    #[display("root")]
    Root,
    #[display("bass")]
    Bass,
}

// -------------------------------------------------------------------------------------------------

/// Errors raised while encoding a single harmony token.
///
/// A failing token never affects other tokens: all functions in this crate are pure, so a
/// batch can skip, log or abort on a per-token basis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The chord kind string is absent from the chord kind table.
    #[error("unrecognized chord kind '{0}'")]
    UnrecognizedChordKind(String),
    /// The root or bass can not be resolved to a pitch class.
    #[error("malformed {field} pitch spelling '{spelling}'")]
    MalformedPitchSpelling { field: PitchField, spelling: String },
    /// A degree modification references a scale degree outside of `1..=13`.
    #[error("invalid degree operation #{index}: degree {degree} is out of range [1..13]")]
    InvalidDegreeOperation { index: usize, degree: i32 },
    /// A Harte notation string could not be parsed.
    #[error("malformed harte notation: {0}")]
    MalformedNotation(String),
}

// -------------------------------------------------------------------------------------------------
