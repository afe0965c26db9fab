//! Converts [`RawHarmony`] tokens into their symbolic, interval and pitch class encodings.

use serde::Serialize;

use crate::{
    notation::{harte, symbol},
    Chord, ChordKindTag, Error, Family, PitchClassSet, PitchClassVector, PitchField, RawHarmony,
    Reduction, SpellingPreference,
};

// -------------------------------------------------------------------------------------------------

/// All representations of a single encoded harmony token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedHarmony {
    /// Lead sheet chord symbol, e.g. `Cmaj7`.
    pub symbol: String,
    /// Harte notation, e.g. `C:maj7`.
    pub notation: String,
    pub pitch_classes: PitchClassSet,
    pub pitch_class_vector: PitchClassVector,
    /// Classification of the encoded view: the kind's tag, the triad's tag or the family's tag.
    pub tag: ChordKindTag,
    /// Family bucket of simplified encodings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
    /// Full resolution tag of the annotated kind, regardless of the reduction.
    #[serde(skip)]
    pub kind_tag: ChordKindTag,
}

// -------------------------------------------------------------------------------------------------

/// Stateless harmony encoder.
///
/// Encoding is a pure function of its inputs, so an encoder can be shared freely between
/// threads. Pre-resolved pitch classes are spelled with the encoder's [`SpellingPreference`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HarmonyEncoder {
    preference: SpellingPreference,
}

impl HarmonyEncoder {
    pub fn new(preference: SpellingPreference) -> Self {
        Self { preference }
    }

    pub fn preference(&self) -> SpellingPreference {
        self.preference
    }

    /// Encode a single harmony token with the given reduction.
    pub fn encode(
        &self,
        harmony: &RawHarmony,
        reduction: Reduction,
    ) -> Result<EncodedHarmony, Error> {
        let root = harmony.root.resolve(PitchField::Root, self.preference)?;
        let bass = match &harmony.bass {
            Some(bass) => Some(bass.resolve(PitchField::Bass, self.preference)?),
            None => None,
        };
        let chord = Chord::from_kind_name(&harmony.kind, harmony.degrees.clone())?;
        let reduced = reduction.reduce(&chord)?;

        let pitch_classes =
            PitchClassSet::from_intervals(root.pitch_class(), reduced.chord.intervals());
        let bass_interval = bass
            .as_ref()
            .map(|bass| (bass.pitch_class() + 12 - root.pitch_class()) % 12);
        let family = match reduction {
            Reduction::Simplified => Some(Family::of(&chord)),
            Reduction::Full | Reduction::Triad => None,
        };
        Ok(EncodedHarmony {
            symbol: symbol::render(&root, &reduced.chord, bass.as_ref()),
            notation: harte::render(&root, &reduced.chord, bass_interval),
            pitch_classes,
            pitch_class_vector: pitch_classes.to_vector(),
            tag: reduced.tag,
            family,
            kind_tag: chord.tag(),
        })
    }

    /// Encode the full resolution view of a single harmony token.
    pub fn encode_full(&self, harmony: &RawHarmony) -> Result<EncodedHarmony, Error> {
        self.encode(harmony, Reduction::Full)
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Degree, PitchInput};
    use pretty_assertions::assert_eq;

    fn encoder() -> HarmonyEncoder {
        HarmonyEncoder::new(SpellingPreference::Sharps)
    }

    #[test]
    fn encode() -> Result<(), Error> {
        let encoded = encoder().encode_full(&RawHarmony::new("C", "major-seventh"))?;
        assert_eq!(encoded.symbol, "Cmaj7");
        assert_eq!(encoded.notation, "C:maj7");
        assert_eq!(encoded.pitch_classes.to_vec(), vec![0, 4, 7, 11]);
        assert_eq!(*encoded.pitch_class_vector, [1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(encoded.tag, ChordKindTag::Major);
        assert_eq!(encoded.family, None);

        let encoded = encoder().encode_full(
            &RawHarmony::new("G", "dominant").with_degree(Degree::add(9, 0)),
        )?;
        assert_eq!(encoded.symbol, "G7add9");
        assert_eq!(encoded.notation, "G:7(9)");
        assert!(encoded.pitch_classes.contains(9));
        Ok(())
    }

    #[test]
    fn bass() -> Result<(), Error> {
        let encoded = encoder().encode_full(&RawHarmony::new("C", "major").with_bass("E"))?;
        assert_eq!(encoded.symbol, "C/E");
        assert_eq!(encoded.notation, "C:maj/3");
        // the bass does not contribute a pitch class
        assert_eq!(encoded.pitch_classes.to_vec(), vec![0, 4, 7]);

        let encoded = encoder().encode_full(&RawHarmony::new("A", "minor").with_bass(7u8))?;
        assert_eq!(encoded.symbol, "Am/G");
        assert_eq!(encoded.notation, "A:min/b7");
        assert_eq!(encoded.pitch_classes.to_vec(), vec![9, 0, 4]);
        Ok(())
    }

    #[test]
    fn spelling_preference() -> Result<(), Error> {
        let harmony = RawHarmony::new(PitchInput::PitchClass(3), "minor-seventh");
        assert_eq!(encoder().encode_full(&harmony)?.symbol, "D#m7");
        let flats = HarmonyEncoder::new(SpellingPreference::Flats);
        assert_eq!(flats.encode_full(&harmony)?.symbol, "Ebm7");
        // spelled names are kept as written
        assert_eq!(
            flats.encode_full(&RawHarmony::new("D#", "minor-seventh"))?.symbol,
            "D#m7"
        );
        Ok(())
    }

    #[test]
    fn reductions() -> Result<(), Error> {
        let harmony = RawHarmony::new("D", "half-diminished");
        let full = encoder().encode(&harmony, Reduction::Full)?;
        assert_eq!(full.pitch_classes.to_vec(), vec![2, 5, 8, 0]);
        assert_eq!(full.tag, ChordKindTag::HalfDiminished);

        let triad = encoder().encode(&harmony, Reduction::Triad)?;
        assert_eq!(triad.symbol, "Ddim");
        assert_eq!(triad.notation, "D:dim");
        assert_eq!(triad.tag, ChordKindTag::Diminished);
        assert_eq!(triad.kind_tag, ChordKindTag::HalfDiminished);

        let simplified = encoder().encode(&harmony, Reduction::Simplified)?;
        assert_eq!(simplified.family, Some(Family::DiminishedFamily));
        assert_eq!(simplified.symbol, "Ddim");
        assert_eq!(simplified.tag, ChordKindTag::Diminished);
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(
            encoder().encode_full(&RawHarmony::new("C", "quartal-cluster-x")),
            Err(Error::UnrecognizedChordKind("quartal-cluster-x".to_string()))
        );
        assert_eq!(
            encoder().encode_full(&RawHarmony::new("C", "major").with_bass("X")),
            Err(Error::MalformedPitchSpelling {
                field: PitchField::Bass,
                spelling: "X".to_string()
            })
        );
        assert_eq!(
            encoder().encode_full(&RawHarmony::new("C", "major").with_degree(Degree::add(15, 0))),
            Err(Error::InvalidDegreeOperation {
                index: 0,
                degree: 15
            })
        );
    }

    #[test]
    fn extreme_alterations() -> Result<(), Box<dyn std::error::Error>> {
        let harmony = serde_json::from_str::<RawHarmony>(
            r#"{"root": "C", "kind": "major",
                "degrees": [{"type": "add", "value": 9, "alter": 2147483647}]}"#,
        )?;
        let encoded = encoder().encode_full(&harmony)?;
        assert_eq!(encoded.symbol, "Cadd13");
        assert_eq!(encoded.pitch_classes.to_vec(), vec![0, 4, 7, 9]);

        let harmony = serde_json::from_str::<RawHarmony>(
            r#"{"root": "G", "kind": "dominant",
                "degrees": [{"degree-type": "alter", "degree-value": 5, "degree-alter": -2147483648}]}"#,
        )?;
        for reduction in [Reduction::Full, Reduction::Triad, Reduction::Simplified] {
            assert!(encoder().encode(&harmony, reduction).is_ok());
        }
        Ok(())
    }

    #[test]
    fn serialization() -> Result<(), Box<dyn std::error::Error>> {
        let encoded = encoder().encode_full(&RawHarmony::new("D", "half-diminished"))?;
        assert_eq!(
            serde_json::to_string(&encoded)?,
            r#"{"symbol":"Dm7b5","notation":"D:hdim7","pitch_classes":[2,5,8,0],"pitch_class_vector":[1,0,1,0,0,1,0,0,1,0,0,0],"tag":"half-diminished"}"#
        );
        Ok(())
    }
}
