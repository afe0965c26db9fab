//! Note letters with accidentals and their equal tempered pitch classes.

use std::fmt::Display;

// -------------------------------------------------------------------------------------------------

/// Max number of stacked sharps or flats in a spelling (double sharp, double flat).
pub const MAX_ACCIDENTALS: i32 = 2;

// -------------------------------------------------------------------------------------------------

/// A note letter. The discriminant is the letter's natural pitch class.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Letter {
    C = 0,
    D = 2,
    E = 4,
    F = 5,
    G = 7,
    A = 9,
    B = 11,
}

impl Letter {
    /// Natural pitch class of the letter: 0 = C, 2 = D ...
    pub fn pitch_class(&self) -> u8 {
        *self as u8
    }

    /// Upper case letter character.
    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(c: char) -> Result<Self, String> {
        match c {
            'c' | 'C' => Ok(Letter::C),
            'd' | 'D' => Ok(Letter::D),
            'e' | 'E' => Ok(Letter::E),
            'f' | 'F' => Ok(Letter::F),
            'g' | 'G' => Ok(Letter::G),
            'a' | 'A' => Ok(Letter::A),
            'b' | 'B' => Ok(Letter::B),
            _ => Err(format!("note letter '{}' is invalid", c)),
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// -------------------------------------------------------------------------------------------------

/// How to spell black-key pitch classes when no spelling is given: `C#` or `Db`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SpellingPreference {
    Sharps,
    Flats,
}

// -------------------------------------------------------------------------------------------------

/// A spelled pitch: letter plus signed accidental count (`+1` = sharp, `-1` = flat).
///
/// For `TryFrom<&str>` conversions, the following notation is supported:
/// `C` (plain), `C#`, `C♯` (sharps), `Db`, `D♭` (flats), `F##`, `Ebb` (doubled).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Spelling {
    letter: Letter,
    accidentals: i8,
}

impl Spelling {
    /// Create a new spelling. Fails when more than [`MAX_ACCIDENTALS`] are stacked.
    pub fn new(letter: Letter, accidentals: i32) -> Result<Self, String> {
        if !(-MAX_ACCIDENTALS..=MAX_ACCIDENTALS).contains(&accidentals) {
            return Err(format!(
                "accidental count '{}' is out of range [{}..{}]",
                accidentals, -MAX_ACCIDENTALS, MAX_ACCIDENTALS
            ));
        }
        Ok(Self {
            letter,
            accidentals: accidentals as i8,
        })
    }

    /// Note letter.
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Signed accidental count.
    pub fn accidentals(&self) -> i32 {
        self.accidentals as i32
    }

    /// Resolved pitch class in range [0..11].
    pub fn pitch_class(&self) -> u8 {
        (self.letter.pitch_class() as i32 + self.accidentals as i32).rem_euclid(12) as u8
    }
}

impl TryFrom<&str> for Spelling {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        let mut chars = s.trim().chars();
        let letter = match chars.next() {
            Some(c) => Letter::try_from(c).map_err(|err| format!("invalid pitch '{}': {}", s, err))?,
            None => return Err("invalid pitch: string is empty".to_string()),
        };
        let mut accidentals = 0;
        for c in chars {
            match c {
                '#' | '♯' => accidentals += 1,
                'b' | '♭' => accidentals -= 1,
                _ => {
                    return Err(format!(
                        "invalid pitch '{}' - accidental character '{}' is invalid.",
                        s, c
                    ))
                }
            }
        }
        Self::new(letter, accidentals).map_err(|err| format!("invalid pitch '{}': {}", s, err))
    }
}

impl Display for Spelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let accidental = if self.accidentals < 0 { "b" } else { "#" };
        write!(
            f,
            "{}{}",
            self.letter,
            accidental.repeat(self.accidentals.unsigned_abs() as usize)
        )
    }
}

// -------------------------------------------------------------------------------------------------

/// Pitch class of the given letter and accidental count, folded into [0..11].
/// Returns `None` when the accidental count is out of range.
pub fn pitch_class_of(letter: Letter, accidentals: i32) -> Option<u8> {
    Spelling::new(letter, accidentals)
        .ok()
        .map(|spelling| spelling.pitch_class())
}

/// Spell the given pitch class, resolving black keys with the given preference.
/// Pitch classes >= 12 are folded.
pub fn letter_of(pitch_class: u8, preference: SpellingPreference) -> Spelling {
    const SHARPS: [(Letter, i8); 12] = [
        (Letter::C, 0),
        (Letter::C, 1),
        (Letter::D, 0),
        (Letter::D, 1),
        (Letter::E, 0),
        (Letter::F, 0),
        (Letter::F, 1),
        (Letter::G, 0),
        (Letter::G, 1),
        (Letter::A, 0),
        (Letter::A, 1),
        (Letter::B, 0),
    ];
    const FLATS: [(Letter, i8); 12] = [
        (Letter::C, 0),
        (Letter::D, -1),
        (Letter::D, 0),
        (Letter::E, -1),
        (Letter::E, 0),
        (Letter::F, 0),
        (Letter::G, -1),
        (Letter::G, 0),
        (Letter::A, -1),
        (Letter::A, 0),
        (Letter::B, -1),
        (Letter::B, 0),
    ];
    let table = match preference {
        SpellingPreference::Sharps => &SHARPS,
        SpellingPreference::Flats => &FLATS,
    };
    let (letter, accidentals) = table[(pitch_class % 12) as usize];
    Spelling {
        letter,
        accidentals,
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(pitch_class_of(Letter::A, 0), Some(9));
        assert_eq!(pitch_class_of(Letter::B, 0), Some(11));
        assert_eq!(pitch_class_of(Letter::C, 0), Some(0));
        assert_eq!(pitch_class_of(Letter::G, 0), Some(7));
        assert_eq!(pitch_class_of(Letter::C, -1), Some(11));
        assert_eq!(pitch_class_of(Letter::B, 1), Some(0));
        assert_eq!(pitch_class_of(Letter::E, 2), Some(6));
        assert_eq!(pitch_class_of(Letter::E, 3), None);
        assert_eq!(pitch_class_of(Letter::D, -3), None);
    }

    #[test]
    fn spelling_deserialization() -> Result<(), String> {
        assert!(Spelling::try_from("").is_err());
        assert!(Spelling::try_from("H").is_err());
        assert!(Spelling::try_from("C4").is_err());
        assert!(Spelling::try_from("C#b#").is_ok());
        assert!(Spelling::try_from("Cbbb").is_err());

        assert_eq!(Spelling::try_from("C")?.pitch_class(), 0);
        assert_eq!(Spelling::try_from("c#")?.pitch_class(), 1);
        assert_eq!(Spelling::try_from("Bb")?.pitch_class(), 10);
        assert_eq!(Spelling::try_from("B♭")?.pitch_class(), 10);
        assert_eq!(Spelling::try_from("F♯")?.pitch_class(), 6);
        assert_eq!(Spelling::try_from("Ebb")?.pitch_class(), 2);
        assert_eq!(Spelling::try_from(" Ab ")?.pitch_class(), 8);
        Ok(())
    }

    #[test]
    fn spelling_serialization() -> Result<(), String> {
        assert_eq!(Spelling::try_from("bb")?.to_string(), "Bb");
        assert_eq!(Spelling::try_from("F##")?.to_string(), "F##");
        assert_eq!(Spelling::new(Letter::G, 0)?.to_string(), "G");
        Ok(())
    }

    #[test]
    fn spelling_preference() {
        assert_eq!(letter_of(1, SpellingPreference::Sharps).to_string(), "C#");
        assert_eq!(letter_of(1, SpellingPreference::Flats).to_string(), "Db");
        assert_eq!(letter_of(10, SpellingPreference::Flats).to_string(), "Bb");
        assert_eq!(letter_of(4, SpellingPreference::Flats).to_string(), "E");
        assert_eq!(letter_of(13, SpellingPreference::Sharps).to_string(), "C#");
        for pitch_class in 0..12 {
            for preference in [SpellingPreference::Sharps, SpellingPreference::Flats] {
                assert_eq!(letter_of(pitch_class, preference).pitch_class(), pitch_class);
            }
        }
    }
}
