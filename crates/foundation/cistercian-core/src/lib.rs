//! # Cistercian Core
//!
//! Numeral synthesis for Cistercian glyphs - one composite symbol per integer 1..=9999.
//!
//! ## Layout
//!
//! ```text
//!     Tens   │   Units
//!   (mirror) │ (identity)
//!  ──────────┼──────────   stem midline
//!  Thousands │ Hundreds
//!   (both)   │  (flip)
//! ```
//!
//! Each decimal place hangs its digit shape off one end of a shared vertical stem.
//! Only the Units shapes are stored; the other places reuse them through a
//! fixed reflection.

pub mod config;
pub mod geometry;
pub mod glyph;
pub mod place;
pub mod quadrant;
pub mod strokes;
pub mod synth;

pub use config::{Layout, RenderConfig, StrokeCap, StrokeColor};
pub use geometry::{BoundingBox, Point, Segment};
pub use glyph::{Glyph, StrokeGroup};
pub use place::DigitPlace;
pub use quadrant::{Compositor, Quadrant, QuadrantTransform, STEM_UNITS};
pub use strokes::StrokeRule;
pub use synth::{decompose, synthesize, Synthesizer, MAX_NUMERAL, MIN_NUMERAL};

/// Result type for cistercian-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cistercian-core
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Number {0} is outside the Cistercian range 1..=9999")]
    OutOfRange(u32),

    #[error("Invalid digit place index {0}: expected 0..=3")]
    InvalidPlace(u32),

    #[error("Invalid digit {0}: expected 0..=9")]
    InvalidDigit(u8),

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),
}
