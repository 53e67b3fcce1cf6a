//! Composite glyph produced by the synthesizer

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Point, Segment};
use crate::place::DigitPlace;

/// Strokes contributed by one non-zero digit place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeGroup {
    pub place: DigitPlace,
    pub digit: u8,
    pub segments: Vec<Segment>,
}

/// One Cistercian numeral in canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub number: u16,
    /// Always present, always drawn first
    pub stem: Segment,
    /// Ordered Units, Tens, Hundreds, Thousands; zero places are absent
    pub groups: Vec<StrokeGroup>,
    pub bounds: BoundingBox,
}

impl Glyph {
    pub fn group(&self, place: DigitPlace) -> Option<&StrokeGroup> {
        self.groups.iter().find(|g| g.place == place)
    }

    /// Stem followed by every group's segments, in drawing order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        std::iter::once(&self.stem).chain(self.groups.iter().flat_map(|g| g.segments.iter()))
    }

    pub fn segment_count(&self) -> usize {
        1 + self.groups.iter().map(|g| g.segments.len()).sum::<usize>()
    }

    pub fn endpoints(&self) -> Vec<Point> {
        self.segments().flat_map(|s| [s.from, s.to]).collect()
    }
}
