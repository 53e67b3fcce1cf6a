//! Numeral synthesizer - integer to composite glyph
//!
//! The mapping is deterministic: the same number and config always produce
//! the same geometry, so glyphs can be generated in any order or in parallel.

use crate::config::RenderConfig;
use crate::glyph::{Glyph, StrokeGroup};
use crate::place::DigitPlace;
use crate::quadrant::Compositor;
use crate::strokes::StrokeRule;
use crate::{Error, Result};

pub const MIN_NUMERAL: u32 = 1;
pub const MAX_NUMERAL: u32 = 9999;

/// Split a number into its place values, indexed by [`DigitPlace::index`]
pub fn decompose(number: u32) -> Result<[u8; 4]> {
    if !(MIN_NUMERAL..=MAX_NUMERAL).contains(&number) {
        return Err(Error::OutOfRange(number));
    }
    Ok(DigitPlace::ALL.map(|place| place.digit_of(number)))
}

/// Builds glyphs against one fixed render configuration
#[derive(Debug, Clone)]
pub struct Synthesizer<'a> {
    config: &'a RenderConfig,
    compositor: Compositor,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            compositor: Compositor::new(config),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    pub fn synthesize(&self, number: u32) -> Result<Glyph> {
        let digits = decompose(number)?;

        let mut groups = Vec::with_capacity(4);
        for place in DigitPlace::ALL {
            let rule = StrokeRule::lookup(place, digits[place.index() as usize])?;
            if rule.is_empty() {
                continue;
            }
            groups.push(StrokeGroup {
                place,
                digit: rule.digit,
                segments: self.compositor.compose(place, rule.segments),
            });
        }

        let layout = self.compositor.layout();
        Ok(Glyph {
            // decompose bounds the value below 10000
            number: number as u16,
            stem: self.compositor.stem(),
            groups,
            bounds: layout.bounds(),
        })
    }
}

/// One-shot synthesis for callers without a long-lived [`Synthesizer`]
pub fn synthesize(number: u32, config: &RenderConfig) -> Result<Glyph> {
    Synthesizer::new(config).synthesize(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::quadrant::QuadrantTransform;

    fn expected_group(config: &RenderConfig, place: DigitPlace, digit: u8) -> Vec<Segment> {
        let layout = config.layout();
        let transform = QuadrantTransform::for_place(place);
        StrokeRule::canonical(digit)
            .unwrap()
            .iter()
            .map(|s| s.map(|p| layout.to_canvas(transform.apply(p))))
            .collect()
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose(1234).unwrap(), [4, 3, 2, 1]);
        assert_eq!(decompose(7).unwrap(), [7, 0, 0, 0]);
        assert_eq!(decompose(9999).unwrap(), [9, 9, 9, 9]);
    }

    #[test]
    fn test_boundaries() {
        let config = RenderConfig::default();
        assert_eq!(synthesize(0, &config), Err(Error::OutOfRange(0)));
        assert_eq!(synthesize(10000, &config), Err(Error::OutOfRange(10000)));
        assert!(synthesize(1, &config).is_ok());
        assert!(synthesize(9999, &config).is_ok());
    }

    #[test]
    fn test_one_is_stem_plus_units() {
        let config = RenderConfig::default();
        let glyph = synthesize(1, &config).unwrap();

        assert_eq!(glyph.groups.len(), 1);
        let units = glyph.group(DigitPlace::Units).unwrap();
        assert_eq!(units.digit, 1);
        assert_eq!(units.segments, vec![Segment::new(50.0, 20.0, 80.0, 20.0)]);
    }

    #[test]
    fn test_ten_is_mirrored_one() {
        let config = RenderConfig::default();
        let glyph = synthesize(10, &config).unwrap();

        assert_eq!(glyph.groups.len(), 1);
        assert!(glyph.group(DigitPlace::Units).is_none());
        let tens = glyph.group(DigitPlace::Tens).unwrap();
        assert_eq!(tens.segments, vec![Segment::new(50.0, 20.0, 20.0, 20.0)]);
    }

    #[test]
    fn test_1234_uses_every_quadrant() {
        let config = RenderConfig::default();
        let glyph = synthesize(1234, &config).unwrap();

        let places: Vec<_> = glyph.groups.iter().map(|g| (g.place, g.digit)).collect();
        assert_eq!(
            places,
            vec![
                (DigitPlace::Units, 4),
                (DigitPlace::Tens, 3),
                (DigitPlace::Hundreds, 2),
                (DigitPlace::Thousands, 1),
            ]
        );
        for group in &glyph.groups {
            assert_eq!(group.segments, expected_group(&config, group.place, group.digit));
        }
    }

    #[test]
    fn test_9999_is_four_nines() {
        let config = RenderConfig::default();
        let glyph = synthesize(9999, &config).unwrap();

        assert_eq!(glyph.groups.len(), 4);
        for group in &glyph.groups {
            assert_eq!(group.digit, 9);
            assert_eq!(group.segments, expected_group(&config, group.place, 9));
        }
        assert_eq!(glyph.segment_count(), 13);
    }

    #[test]
    fn test_thousands_only_keeps_stem() {
        let config = RenderConfig::default();
        for n in [1000, 2000, 9000] {
            let glyph = synthesize(n, &config).unwrap();
            assert_eq!(glyph.segments().next(), Some(&glyph.stem));
            assert_eq!(glyph.groups.len(), 1);
            assert_eq!(glyph.groups[0].place, DigitPlace::Thousands);
        }
    }

    #[test]
    fn test_every_numeral() {
        let config = RenderConfig::default();
        let synth = Synthesizer::new(&config);
        let stem = Compositor::new(&config).stem();

        for n in MIN_NUMERAL..=MAX_NUMERAL {
            let glyph = synth.synthesize(n).unwrap();
            assert_eq!(glyph.stem, stem);
            assert_eq!(glyph, synth.synthesize(n).unwrap());

            let digits = decompose(n).unwrap();
            for place in DigitPlace::ALL {
                let digit = digits[place.index() as usize];
                match glyph.group(place) {
                    None => assert_eq!(digit, 0, "{n}: missing {place} group"),
                    Some(group) => {
                        assert_eq!(group.digit, digit);
                        assert_eq!(group.segments, expected_group(&config, place, digit));
                    }
                }
            }
            let b = glyph.bounds;
            assert!(glyph.endpoints().iter().all(|p| {
                p.x >= b.min_x
                    && p.x <= b.min_x + b.width
                    && p.y >= b.min_y
                    && p.y <= b.min_y + b.height
            }));
        }
    }

    #[test]
    fn test_styling_does_not_change_geometry() {
        let plain = RenderConfig::default();
        let styled = RenderConfig {
            stroke_width: 2.0,
            stroke_cap: crate::StrokeCap::Round,
            stroke_color: crate::StrokeColor::parse("#ff00aa").unwrap(),
            ..RenderConfig::default()
        };
        assert_eq!(synthesize(4321, &plain).unwrap(), synthesize(4321, &styled).unwrap());
    }
}
