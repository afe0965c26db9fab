//! Textual chord notations: lead sheet chord symbols and Harte notation.

pub mod harte;
pub mod symbol;
