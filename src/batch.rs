//! Frequency statistics over batches of harmony tokens.

use std::{collections::HashMap, io::Write};

use rayon::prelude::*;
use serde::Serialize;

use crate::{ChordKindTag, EncodedHarmony, Error, HarmonyEncoder, RawHarmony, Reduction};

// -------------------------------------------------------------------------------------------------

/// A distinct chord symbol along with its representations and occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    #[serde(skip)]
    pub symbol: String,
    pub count: usize,
    #[serde(rename = "harte")]
    pub notation: String,
    pub pitch_classes: String,
    #[serde(rename = "pitch_classes_binary")]
    pub pitch_class_vector: String,
}

impl SymbolEntry {
    fn new(encoded: &EncodedHarmony) -> Self {
        Self {
            symbol: encoded.symbol.clone(),
            count: 0,
            notation: encoded.notation.clone(),
            pitch_classes: encoded.pitch_classes.to_string(),
            pitch_class_vector: encoded.pitch_class_vector.to_string(),
        }
    }
}

/// A chord kind tag along with its occurrence count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct KindEntry {
    #[serde(skip)]
    pub tag: ChordKindTag,
    pub count: usize,
}

/// A token which failed to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub index: usize,
    pub error: Error,
}

// -------------------------------------------------------------------------------------------------

/// Symbol and kind distributions of a batch of harmony tokens.
///
/// Entries are kept in first-seen order. Tokens which fail to encode are skipped, logged and
/// recorded as [`Failure`], without affecting any other token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarmonyDistribution {
    symbols: Vec<SymbolEntry>,
    kinds: Vec<KindEntry>,
    failures: Vec<Failure>,
}

impl HarmonyDistribution {
    /// Encode all given tokens in parallel with the given reduction and count their symbols
    /// and full resolution kind tags.
    pub fn collect(
        encoder: &HarmonyEncoder,
        harmonies: &[RawHarmony],
        reduction: Reduction,
    ) -> Self {
        let encoded = harmonies
            .par_iter()
            .map(|harmony| encoder.encode(harmony, reduction))
            .collect::<Vec<_>>();

        let mut distribution = Self::default();
        let mut symbol_indices = HashMap::new();
        let mut kind_indices = HashMap::new();
        for (index, result) in encoded.into_iter().enumerate() {
            match result {
                Ok(encoded) => {
                    let symbol_index = *symbol_indices
                        .entry(encoded.symbol.clone())
                        .or_insert_with(|| {
                            distribution.symbols.push(SymbolEntry::new(&encoded));
                            distribution.symbols.len() - 1
                        });
                    distribution.symbols[symbol_index].count += 1;

                    let kind_index = *kind_indices.entry(encoded.kind_tag).or_insert_with(|| {
                        distribution.kinds.push(KindEntry {
                            tag: encoded.kind_tag,
                            count: 0,
                        });
                        distribution.kinds.len() - 1
                    });
                    distribution.kinds[kind_index].count += 1;
                }
                Err(error) => {
                    log::warn!("skipping harmony #{}: {}", index, error);
                    distribution.failures.push(Failure { index, error });
                }
            }
        }
        distribution
    }

    /// Distinct symbols in first-seen order.
    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    /// Kind tags in first-seen order.
    pub fn kinds(&self) -> &[KindEntry] {
        &self.kinds
    }

    /// Tokens which failed to encode, in input order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Number of successfully encoded tokens.
    pub fn len(&self) -> usize {
        self.symbols.iter().map(|entry| entry.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols sorted by descending count. Equal counts keep their first-seen order.
    pub fn symbols_by_count(&self) -> Vec<&SymbolEntry> {
        let mut symbols = self.symbols.iter().collect::<Vec<_>>();
        symbols.sort_by(|a, b| b.count.cmp(&a.count));
        symbols
    }

    /// Kind tags sorted by descending count. Equal counts keep their first-seen order.
    pub fn kinds_by_count(&self) -> Vec<&KindEntry> {
        let mut kinds = self.kinds.iter().collect::<Vec<_>>();
        kinds.sort_by(|a, b| b.count.cmp(&a.count));
        kinds
    }

    /// Write the sorted symbol counts as `<symbol>:\t\t<count>` lines.
    pub fn write_symbol_counts<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in self.symbols_by_count() {
            writeln!(writer, "{}:\t\t{}", entry.symbol, entry.count)?;
        }
        Ok(())
    }

    /// Write the sorted kind tag counts as `<tag>:\t\t<count>` lines.
    pub fn write_kind_counts<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in self.kinds_by_count() {
            writeln!(writer, "{}:\t\t{}", entry.tag, entry.count)?;
        }
        Ok(())
    }

    /// Symbol entries as JSON object, keyed by symbol in first-seen order.
    pub fn symbols_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.symbols
                .iter()
                .map(|entry| (entry.symbol.clone(), serde_json::json!(entry)))
                .collect(),
        )
    }

    /// Kind entries as JSON object, keyed by tag in first-seen order.
    pub fn kinds_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.kinds
                .iter()
                .map(|entry| (entry.tag.to_string(), serde_json::json!(entry)))
                .collect(),
        )
    }
}

// --------------------------------------------------------------------------------------------------
