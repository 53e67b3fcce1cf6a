//! OpenType feature source - `metadata/features.fea`
//!
//! The same rule block is emitted for `liga` and `dlig`. A `subtable;` break
//! goes after every [`RULES_PER_SUBTABLE`] rules so no lookup subtable
//! overflows its 16-bit offsets.

use std::fmt::Write;

use crate::ligature::LigatureTable;

pub const RULES_PER_SUBTABLE: usize = 500;

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Glyph name of an ASCII digit, `'7'` → `seven`
pub fn digit_glyph_name(c: char) -> Option<&'static str> {
    c.to_digit(10).map(|d| DIGIT_NAMES[d as usize])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFile {
    pub rules: Vec<String>,
}

impl FeatureFile {
    /// One `sub … by …;` rule per mapping, in table order
    pub fn from_table(table: &LigatureTable) -> Self {
        let rules = table
            .mappings
            .iter()
            .map(|m| {
                let inputs: Vec<&str> = m.input.chars().filter_map(digit_glyph_name).collect();
                format!("  sub {} by {};", inputs.join(" "), m.output)
            })
            .collect();
        Self { rules }
    }

    fn rules_block(&self) -> String {
        let mut block = String::new();
        for (i, rule) in self.rules.iter().enumerate() {
            let _ = writeln!(block, "{rule}");
            if (i + 1) % RULES_PER_SUBTABLE == 0 && i + 1 < self.rules.len() {
                block.push_str("  subtable;\n");
            }
        }
        block
    }

    pub fn render(&self) -> String {
        let block = self.rules_block();
        format!(
            "languagesystem DFLT dflt;\nlanguagesystem latn dflt;\n\n\
             feature liga {{\n{block}}} liga;\n\n\
             feature dlig {{\n{block}}} dlig;\n"
        )
    }
}
