//! # Cistercian Batch
//!
//! Generates the artifacts the font assembly stage reads:
//!
//! ```text
//! <out>/glyphs/cistercian_0001.svg … cistercian_9999.svg
//! <out>/metadata/glyphs.json      manifest: metrics + one record per glyph
//! <out>/metadata/ligatures.json   digit sequence → glyph, longest first
//! <out>/metadata/features.fea     liga/dlig substitution source
//! ```
//!
//! One numeral failing never stops the rest of the batch.

pub mod driver;
pub mod features;
pub mod ligature;
pub mod manifest;
pub mod storage;

pub use driver::{BatchDriver, BatchReport, GlyphFailure};
pub use features::{digit_glyph_name, FeatureFile, RULES_PER_SUBTABLE};
pub use ligature::{LigatureMapping, LigatureTable};
pub use manifest::{GlyphManifest, GlyphRecord};
pub use storage::OutputLayout;

/// Result type for batch operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Glyph(#[from] cistercian_core::Error),

    #[error(transparent)]
    Svg(#[from] cistercian_svg::Error),

    #[error(transparent)]
    Config(#[from] cistercian_config::Error),

    #[error("Failed to persist numeral {number}: {source}")]
    Persistence {
        number: u32,
        #[source]
        source: std::io::Error,
    },
}
