//! Stroke rule table - canonical digit shapes
//!
//! Shapes are stored once, in the Units frame: x runs away from the stem,
//! y runs away from the stem end the place hangs from, both over [0, 1].
//!
//! 1 top bar, 2 lower bar, 3 falling diagonal, 4 rising diagonal, 6 outer
//! upright. 5, 7, 8 and 9 are unions of those.

use crate::geometry::Segment;
use crate::place::DigitPlace;
use crate::{Error, Result};

const TOP: Segment = Segment::new(0.0, 0.0, 1.0, 0.0);
const BOTTOM: Segment = Segment::new(0.0, 1.0, 1.0, 1.0);
const FALLING: Segment = Segment::new(0.0, 0.0, 1.0, 1.0);
const RISING: Segment = Segment::new(0.0, 1.0, 1.0, 0.0);
const OUTER: Segment = Segment::new(1.0, 0.0, 1.0, 1.0);

static UNIT_SHAPES: [&[Segment]; 10] = [
    &[],
    &[TOP],
    &[BOTTOM],
    &[FALLING],
    &[RISING],
    &[TOP, RISING],
    &[OUTER],
    &[TOP, OUTER],
    &[BOTTOM, OUTER],
    // drawn as one path around the cell
    &[TOP, OUTER, Segment::new(1.0, 1.0, 0.0, 1.0)],
];

/// The strokes for one digit in one place, still in local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRule {
    pub place: DigitPlace,
    pub digit: u8,
    pub segments: &'static [Segment],
}

impl StrokeRule {
    /// Look up the rule for `digit` in `place`. Zero yields no segments.
    pub fn lookup(place: DigitPlace, digit: u8) -> Result<Self> {
        let segments = Self::canonical(digit)?;
        Ok(Self {
            place,
            digit,
            segments,
        })
    }

    /// The Units-place shape shared by every place
    pub fn canonical(digit: u8) -> Result<&'static [Segment]> {
        UNIT_SHAPES
            .get(digit as usize)
            .copied()
            .ok_or(Error::InvalidDigit(digit))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
