//! Quadrant compositor - places local digit strokes around the stem
//!
//! Work happens in stroke units first (stem from y = 0 to y = STEM_UNITS,
//! x = 0 on the stem), then the layout scales into canvas coordinates.

use serde::{Deserialize, Serialize};

use crate::config::{Layout, RenderConfig};
use crate::geometry::{Point, Segment};
use crate::place::DigitPlace;
use crate::Result;

/// Stem length measured in digit cells
pub const STEM_UNITS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

/// Reflection for one digit place.
///
/// `mirror_x` reflects across the stem; `mirror_y` reflects across the stem
/// midline, which moves the shape to the bottom end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantTransform {
    pub mirror_x: bool,
    pub mirror_y: bool,
}

impl QuadrantTransform {
    pub const fn for_place(place: DigitPlace) -> Self {
        match place {
            DigitPlace::Units => Self {
                mirror_x: false,
                mirror_y: false,
            },
            DigitPlace::Tens => Self {
                mirror_x: true,
                mirror_y: false,
            },
            DigitPlace::Hundreds => Self {
                mirror_x: false,
                mirror_y: true,
            },
            DigitPlace::Thousands => Self {
                mirror_x: true,
                mirror_y: true,
            },
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        match (self.mirror_x, self.mirror_y) {
            (false, false) => Quadrant::UpperRight,
            (true, false) => Quadrant::UpperLeft,
            (false, true) => Quadrant::LowerRight,
            (true, true) => Quadrant::LowerLeft,
        }
    }

    /// Local cell coordinates to stroke units
    pub fn apply(&self, p: Point) -> Point {
        let x = if self.mirror_x { -p.x } else { p.x };
        let y = if self.mirror_y { STEM_UNITS - p.y } else { p.y };
        Point::new(x, y)
    }
}

/// Maps digit strokes into a glyph's absolute frame
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    layout: Layout,
}

impl Compositor {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            layout: config.layout(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The stem, top to bottom
    pub fn stem(&self) -> Segment {
        Segment {
            from: self.layout.to_canvas(Point::new(0.0, 0.0)),
            to: self.layout.to_canvas(Point::new(0.0, STEM_UNITS)),
        }
    }

    pub fn compose(&self, place: DigitPlace, strokes: &[Segment]) -> Vec<Segment> {
        let transform = QuadrantTransform::for_place(place);
        strokes
            .iter()
            .map(|seg| seg.map(|p| self.layout.to_canvas(transform.apply(p))))
            .collect()
    }

    /// Same as [`compose`](Self::compose) for a raw place index (power of ten)
    pub fn compose_index(&self, place_index: u32, strokes: &[Segment]) -> Result<Vec<Segment>> {
        let place = DigitPlace::try_from(place_index)?;
        Ok(self.compose(place, strokes))
    }
}
