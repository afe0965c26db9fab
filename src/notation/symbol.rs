//! Lead sheet chord symbols, e.g. `Cmaj7`, `Dm7b5`, `G7add9` or `C/E`.

use crate::{
    interval::{degree_name, slot_of},
    Chord, Spelling,
};

// -------------------------------------------------------------------------------------------------

/// Render the given chord as chord symbol: root, kind abbreviation, extension suffixes and an
/// optional slash bass.
///
/// Suffixes describe how the final intervals differ from the kind's base intervals. An added
/// interval that replaces a base interval in the same slot is an alteration (`b5`, `#9`), any
/// other added interval is written as `add<degree>`. Removed base intervals whose slot stays
/// empty are written as `no<degree>`. Alterations of kinds without abbreviation are put in
/// parentheses (`C(b5)`), so they can't be read as accidentals of the root.
pub fn render(root: &Spelling, chord: &Chord, bass: Option<&Spelling>) -> String {
    let base = chord.kind().interval_set();
    let added = chord.intervals().difference(&base);
    let removed = base.difference(chord.intervals());

    let abbreviation = chord.kind().abbreviation();
    let mut symbol = format!("{}{}", root, abbreviation);
    for interval in &added {
        let slot = slot_of(*interval);
        if removed.iter().any(|i| slot_of(*i) == slot) {
            if abbreviation.is_empty() {
                symbol.push_str(&format!("({})", degree_name(*interval)));
            } else {
                symbol.push_str(degree_name(*interval));
            }
        } else {
            symbol.push_str(&format!("add{}", degree_name(*interval)));
        }
    }
    for interval in &removed {
        let slot = slot_of(*interval);
        if !added.iter().any(|i| slot_of(*i) == slot) {
            symbol.push_str(&format!("no{}", slot));
        }
    }
    if let Some(bass) = bass {
        if bass.pitch_class() != root.pitch_class() {
            symbol.push_str(&format!("/{}", bass));
        }
    }
    symbol
}

// --------------------------------------------------------------------------------------------------
