//! Lead sheet documents as stored in the corpus: a part with measures with harmony groups.

use serde::Deserialize;

use crate::RawHarmony;

// -------------------------------------------------------------------------------------------------

/// A harmony group within a measure. Groups without harmony are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub harmony: Option<RawHarmony>,
}

/// A single measure of a lead sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// The single part of a lead sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub measures: Vec<Measure>,
}

/// A lead sheet document. Fields other than the harmony path are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeadSheet {
    pub part: Part,
}

impl LeadSheet {
    /// Parse a lead sheet from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// All harmony tokens in score order.
    pub fn harmonies(&self) -> impl Iterator<Item = &RawHarmony> {
        self.part
            .measures
            .iter()
            .flat_map(|measure| measure.groups.iter())
            .filter_map(|group| group.harmony.as_ref())
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::Degree;
    use pretty_assertions::assert_eq;

    #[test]
    fn harmonies() -> Result<(), serde_json::Error> {
        let sheet = LeadSheet::from_json(
            r#"{
                "title": "Blue Monk",
                "part": {
                    "id": "P1",
                    "measures": [
                        {"groups": [
                            {"harmony": {"root": "Bb", "kind": "dominant"}, "pitches": []},
                            {"harmony": {"root": "Eb", "kind": "dominant",
                                "degrees": [{"type": "add", "value": 9}]}}
                        ]},
                        {"groups": []},
                        {"groups": [{"pitches": [60, 62]}]},
                        {"groups": [{"harmony": {"root": {"root-step": "F"}, "kind": "major"}}]}
                    ]
                }
            }"#,
        )?;
        let harmonies = sheet.harmonies().cloned().collect::<Vec<_>>();
        assert_eq!(harmonies.len(), 3);
        assert_eq!(harmonies[0], RawHarmony::new("Bb", "dominant"));
        assert_eq!(
            harmonies[1],
            RawHarmony::new("Eb", "dominant").with_degree(Degree::add(9, 0))
        );
        assert_eq!(harmonies[2].kind, "major");
        Ok(())
    }

    #[test]
    fn malformed() {
        assert!(LeadSheet::from_json(r#"{"measures": []}"#).is_err());
        assert!(LeadSheet::from_json("[").is_err());
    }
}
