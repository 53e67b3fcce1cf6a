//! Glyph manifest - `metadata/glyphs.json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cistercian_config::FontMetrics;
use cistercian_core::RenderConfig;
use cistercian_svg::glyph_id;

/// Per-numeral metrics for the font assembly stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphRecord {
    pub number: u32,
    pub glyph_name: String,
    /// Advance width
    pub width: u32,
    pub left_bearing: f64,
    pub right_bearing: f64,
}

impl GlyphRecord {
    pub fn new(number: u32, font: &FontMetrics, svg_width: f64) -> Self {
        let bearing = font.side_bearing(svg_width);
        Self {
            number,
            glyph_name: glyph_id(number),
            width: font.glyph_width,
            left_bearing: bearing,
            right_bearing: bearing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphManifest {
    pub font_config: FontMetrics,
    pub render_config: RenderConfig,
    pub total_glyphs: usize,
    pub generated_at: DateTime<Utc>,
    pub glyphs: Vec<GlyphRecord>,
}

impl GlyphManifest {
    pub fn new(font: FontMetrics, render: RenderConfig, glyphs: Vec<GlyphRecord>) -> Self {
        Self {
            font_config: font,
            render_config: render,
            total_glyphs: glyphs.len(),
            generated_at: Utc::now(),
            glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bearings() {
        let record = GlyphRecord::new(12, &FontMetrics::default(), 100.0);
        assert_eq!(record.glyph_name, "cistercian_12");
        assert_eq!(record.width, 600);
        assert_eq!(record.left_bearing, 250.0);
        assert_eq!(record.right_bearing, 250.0);
    }

    #[test]
    fn test_manifest_json_keys() {
        let glyphs = vec![GlyphRecord::new(1, &FontMetrics::default(), 100.0)];
        let manifest = GlyphManifest::new(FontMetrics::default(), RenderConfig::default(), glyphs);
        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["totalGlyphs"], 1);
        assert_eq!(json["fontConfig"]["unitsPerEm"], 1000);
        assert_eq!(json["renderConfig"]["strokeCap"], "square");
        assert_eq!(json["glyphs"][0]["glyphName"], "cistercian_1");
        assert_eq!(json["glyphs"][0]["leftBearing"], 250.0);
        assert!(json["generatedAt"].as_str().unwrap().contains('T'));
    }
}
