//! # Cistercian SVG
//!
//! Turns synthesized glyphs into SVG documents.
//!
//! - [`Normalizer`] produces the font-ready artifact: fixed viewBox, one
//!   identified group, no presentational extras.
//! - [`render_raw`] draws a glyph as-is for previews.
//! - [`parse_artifact`] reads line geometry back out of an SVG document.

mod document;
mod normalize;
mod parse;

pub use document::{format_coord, render_raw};
pub use normalize::{
    glyph_file_name, glyph_id, LineStyle, NormalizedArtifact, Normalizer, ViewBox, ViewTransform,
};
pub use parse::{parse_artifact, parse_lines, ParsedArtifact};

/// Result type for SVG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from SVG operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Glyph(#[from] cistercian_core::Error),

    #[error("Glyph is numeral {glyph}, asked to normalize it as {requested}")]
    NumberMismatch { glyph: u16, requested: u32 },

    #[error("Invalid viewBox: {0}")]
    InvalidViewBox(String),

    #[error("SVG parse failed: {0}")]
    Parse(String),

    #[error("<{tag}> is missing numeric attribute {attribute:?}")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
}
