//! Harte chord notation, e.g. `C:maj7`, `Bb:min7(9)/b3` or `D:(1,5)`.

use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use crate::{
    interval::{degree_name, fold, major_scale_interval},
    Chord, Error, IntervalSet, PitchClassSet, Spelling,
};

// -------------------------------------------------------------------------------------------------

// shorthands and their root relative intervals
const SHORTHANDS: [(&str, &[u8]); 17] = [
    ("maj", &[0, 4, 7]),
    ("min", &[0, 3, 7]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("maj7", &[0, 4, 7, 11]),
    ("min7", &[0, 3, 7, 10]),
    ("7", &[0, 4, 7, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("hdim7", &[0, 3, 6, 10]),
    ("minmaj7", &[0, 3, 7, 11]),
    ("maj6", &[0, 4, 7, 9]),
    ("min6", &[0, 3, 7, 9]),
    ("9", &[0, 4, 7, 10, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("min9", &[0, 3, 7, 10, 14]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
];

/// Intervals of the given Harte shorthand, `None` for unknown shorthands.
pub fn shorthand_intervals(shorthand: &str) -> Option<IntervalSet> {
    SHORTHANDS
        .iter()
        .find(|(name, _)| *name == shorthand)
        .map(|(_, intervals)| IntervalSet::new(intervals))
}

// -------------------------------------------------------------------------------------------------

/// Render the given chord in Harte notation.
///
/// The degree list holds the difference between the chord's final intervals and the
/// intervals of the kind's shorthand: additions first, then omissions (`*3`), each ascending.
/// Kinds without a shorthand list all of their intervals. `bass_interval` is the bass pitch
/// class relative to the root and is omitted when it's the root itself.
pub fn render(root: &Spelling, chord: &Chord, bass_interval: Option<u8>) -> String {
    let shorthand = chord.kind().harte_shorthand();
    let base = shorthand_intervals(shorthand).unwrap_or_default();
    let intervals = chord.intervals();
    let mut degrees = intervals
        .difference(&base)
        .into_iter()
        .map(|interval| degree_name(interval).to_string())
        .chain(
            base.difference(intervals)
                .into_iter()
                .map(|interval| format!("*{}", degree_name(interval))),
        )
        .collect::<Vec<_>>();
    if shorthand.is_empty() && degrees.is_empty() {
        // everything got subtracted: a degree list can't be empty
        degrees.push("*1".to_string());
    }
    let mut notation = format!("{}:{}", root, shorthand);
    if !degrees.is_empty() {
        notation.push_str(&format!("({})", degrees.join(",")));
    }
    if let Some(bass) = bass_interval.map(|interval| interval % 12) {
        if bass != 0 {
            notation.push_str(&format!("/{}", degree_name(bass)));
        }
    }
    notation
}

// -------------------------------------------------------------------------------------------------

/// A parsed Harte chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarteChord {
    pub root: Spelling,
    pub intervals: IntervalSet,
    /// Bass pitch class relative to the root, if any.
    pub bass: Option<u8>,
}

impl HarteChord {
    /// Pitch classes of the chord. Like in the encoder, the bass does not contribute.
    pub fn pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::from_intervals(self.root.pitch_class(), &self.intervals)
    }
}

#[derive(Parser)]
#[grammar = "notation/harte.pest"]
struct HarteParser {}

/// Parse a Harte notation string. A missing quality is a major triad.
pub fn decode(notation: &str) -> Result<HarteChord, Error> {
    parse(notation).map_err(|err| Error::MalformedNotation(format!("'{}': {}", notation, err)))
}

fn parse(notation: &str) -> Result<HarteChord, String> {
    let chord = HarteParser::parse(Rule::chord, notation)
        .map_err(|err| err.to_string())?
        .next()
        .ok_or_else(|| "empty notation".to_string())?;
    let mut root = None;
    let mut intervals = shorthand_intervals("maj").unwrap_or_default();
    let mut bass = None;
    for pair in chord.into_inner() {
        match pair.as_rule() {
            Rule::root => root = Some(Spelling::try_from(pair.as_str())?),
            Rule::quality => intervals = parse_quality(pair)?,
            Rule::bass => {
                let degree = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| "missing bass degree".to_string())?;
                bass = Some(parse_degree(degree)? % 12);
            }
            Rule::EOI => (),
            rule => return Err(format!("unexpected rule: {:?}", rule)),
        }
    }
    Ok(HarteChord {
        root: root.ok_or_else(|| "missing root".to_string())?,
        intervals,
        bass,
    })
}

fn parse_quality(pair: Pair<Rule>) -> Result<IntervalSet, String> {
    let mut intervals = IntervalSet::default();
    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::shorthand => {
                intervals = shorthand_intervals(pair.as_str())
                    .ok_or_else(|| format!("unknown shorthand '{}'", pair.as_str()))?;
            }
            Rule::degree_list => {
                for item in pair.into_inner() {
                    let mut omit = false;
                    for p in item.into_inner() {
                        match p.as_rule() {
                            Rule::omit => omit = true,
                            Rule::degree => {
                                let interval = parse_degree(p)?;
                                intervals = if omit {
                                    intervals.iter().copied().filter(|i| *i != interval).collect()
                                } else {
                                    intervals.with(interval as i32)
                                };
                            }
                            rule => return Err(format!("unexpected rule: {:?}", rule)),
                        }
                    }
                }
            }
            rule => return Err(format!("unexpected rule: {:?}", rule)),
        }
    }
    Ok(intervals)
}

fn parse_degree(pair: Pair<Rule>) -> Result<u8, String> {
    let mut accidentals = 0;
    let mut interval = None;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::accidental => accidentals += if p.as_str() == "#" { 1 } else { -1 },
            Rule::number => {
                let degree = p
                    .as_str()
                    .parse::<u8>()
                    .map_err(|err| format!("invalid degree '{}': {}", p.as_str(), err))?;
                interval = Some(
                    major_scale_interval(degree)
                        .ok_or_else(|| format!("degree '{}' is out of range [1..14]", degree))?,
                );
            }
            rule => return Err(format!("unexpected rule: {:?}", rule)),
        }
    }
    let interval = interval.ok_or_else(|| "missing degree number".to_string())?;
    Ok(fold(interval as i32 + accidentals))
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ChordKind, Degree};
    use pretty_assertions::assert_eq;

    fn spelling(s: &str) -> Spelling {
        Spelling::try_from(s).unwrap()
    }

    fn rendered(root: &str, kind: ChordKind, degrees: Vec<Degree>, bass: Option<u8>) -> String {
        render(&spelling(root), &Chord::new(kind, degrees).unwrap(), bass)
    }

    #[test]
    fn shorthands() {
        for kind in ChordKind::all() {
            let shorthand = kind.harte_shorthand();
            if !shorthand.is_empty() {
                assert!(
                    shorthand_intervals(shorthand).is_some(),
                    "missing shorthand {}",
                    shorthand
                );
            }
        }
        assert!(shorthand_intervals("maj13").is_none());
    }

    #[test]
    fn rendering() {
        assert_eq!(rendered("C", ChordKind::MajorSeventh, vec![], None), "C:maj7");
        assert_eq!(rendered("D", ChordKind::HalfDiminished, vec![], None), "D:hdim7");
        assert_eq!(
            rendered("G", ChordKind::Dominant, vec![Degree::add(9, 0)], None),
            "G:7(9)"
        );
        assert_eq!(rendered("C", ChordKind::Power, vec![], None), "C:(1,5)");
        assert_eq!(
            rendered("C", ChordKind::DominantThirteenth, vec![], None),
            "C:9(11,13)"
        );
        assert_eq!(
            rendered("Bb", ChordKind::Dominant, vec![Degree::alter(5, -1)], None),
            "Bb:7(b5,*5)"
        );
        assert_eq!(
            rendered("C", ChordKind::Dominant, vec![Degree::subtract(5)], None),
            "C:7(*5)"
        );
        assert_eq!(rendered("C", ChordKind::Major, vec![], Some(4)), "C:maj/3");
        assert_eq!(rendered("C", ChordKind::Major, vec![], Some(0)), "C:maj");
        assert_eq!(
            rendered("C", ChordKind::Power, vec![Degree::subtract(1), Degree::subtract(5)], None),
            "C:(*1)"
        );
    }

    #[test]
    fn decoding() -> Result<(), Error> {
        let chord = decode("C:maj7")?;
        assert_eq!(chord.root, spelling("C"));
        assert_eq!(chord.intervals.to_vec(), vec![0, 4, 7, 11]);
        assert_eq!(chord.bass, None);

        let chord = decode("Bb:min7(9)/b3")?;
        assert_eq!(chord.root, spelling("Bb"));
        assert_eq!(chord.intervals.to_vec(), vec![0, 3, 7, 10, 14]);
        assert_eq!(chord.bass, Some(3));
        assert_eq!(chord.pitch_classes().to_vec(), vec![10, 0, 1, 5, 8]);

        assert_eq!(decode("D:(1,5)")?.intervals.to_vec(), vec![0, 7]);
        assert_eq!(decode("C:7(b5,*5)")?.intervals.to_vec(), vec![0, 4, 6, 10]);
        assert_eq!(decode("C:9(11,13)")?.intervals.to_vec(), vec![0, 4, 7, 10, 14, 17, 21]);
        assert_eq!(decode("F#")?.intervals.to_vec(), vec![0, 4, 7]);
        assert_eq!(decode("C:(*1)")?.intervals.to_vec(), Vec::<u8>::new());
        Ok(())
    }

    #[test]
    fn malformed() {
        for notation in ["", "H:maj", "C:maj(", "C:foo", "C:maj(15)", "C:maj/", "C maj"] {
            assert!(
                matches!(decode(notation), Err(Error::MalformedNotation(_))),
                "'{}' should not parse",
                notation
            );
        }
    }

    #[test]
    fn round_trips() -> Result<(), Error> {
        for kind in ChordKind::all() {
            let chord = Chord::try_from(*kind)?;
            let decoded = decode(&render(&spelling("Eb"), &chord, Some(7)))?;
            assert_eq!(&decoded.intervals, chord.intervals(), "{}", kind);
            assert_eq!(decoded.bass, Some(7));
        }
        Ok(())
    }
}
