//! Ligature table - `metadata/ligatures.json`
//!
//! Shaping engines try substitutions in order, so longer digit runs must come
//! first or `12` would swallow the start of `1234`.

use serde::{Deserialize, Serialize};

use cistercian_svg::glyph_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LigatureMapping {
    /// Decimal digits as typed, e.g. `"1234"`
    pub input: String,
    /// Target glyph name
    pub output: String,
    pub number: u32,
}

impl LigatureMapping {
    pub fn new(number: u32) -> Self {
        Self {
            input: number.to_string(),
            output: glyph_id(number),
            number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigatureTable {
    pub total_mappings: usize,
    pub mappings: Vec<LigatureMapping>,
}

impl LigatureTable {
    /// Longest input first, ascending by number within one length
    pub fn build(numbers: impl IntoIterator<Item = u32>) -> Self {
        let mut mappings: Vec<LigatureMapping> =
            numbers.into_iter().map(LigatureMapping::new).collect();
        mappings.sort_by(|a, b| {
            b.input
                .len()
                .cmp(&a.input.len())
                .then(a.number.cmp(&b.number))
        });

        Self {
            total_mappings: mappings.len(),
            mappings,
        }
    }

    pub fn position(&self, number: u32) -> Option<usize> {
        self.mappings.iter().position(|m| m.number == number)
    }
}
