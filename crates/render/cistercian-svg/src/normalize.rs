//! Glyph normalizer - canonical viewBox, identifier and title

use serde::{Deserialize, Serialize};

use cistercian_core::{BoundingBox, Glyph, Point, RenderConfig, Segment, StrokeCap, StrokeColor};

use crate::{Error, Result};

/// Stable glyph name used by the manifest, ligatures and the font
pub fn glyph_id(number: u32) -> String {
    format!("cistercian_{number}")
}

/// `cistercian_0042.svg`
pub fn glyph_file_name(number: u32) -> String {
    format!("cistercian_{number:04}.svg")
}

/// `0 0 width height`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidViewBox(format!("0 0 {width} {height}")));
        }
        Ok(Self { width, height })
    }

    /// The canvas the synthesizer draws on
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        let layout = config.layout();
        Self::new(layout.width, layout.height)
    }
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "0 0 {} {}",
            crate::format_coord(self.width),
            crate::format_coord(self.height)
        )
    }
}

/// Uniform scale plus translation from glyph canvas into a viewBox
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl ViewTransform {
    /// Fit `source` into `target` without distortion, centered
    pub fn fit(source: &BoundingBox, target: &ViewBox) -> Self {
        let scale = (target.width / source.width).min(target.height / source.height);
        Self {
            scale,
            dx: (target.width - source.width * scale) / 2.0 - source.min_x * scale,
            dy: (target.height - source.height * scale) / 2.0 - source.min_y * scale,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.dx, p.y * self.scale + self.dy)
    }
}

/// Rendering attributes; never part of the geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: StrokeColor,
    pub width: f64,
    pub cap: StrokeCap,
}

/// Font-ready form of one glyph. Written once, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedArtifact {
    pub id: String,
    pub title: String,
    pub number: u16,
    pub view_box: ViewBox,
    pub transform: ViewTransform,
    pub style: LineStyle,
    /// Stem first, then every stroke group in place order
    pub lines: Vec<Segment>,
}

/// Rewrites glyphs into a fixed viewBox
#[derive(Debug, Clone)]
pub struct Normalizer {
    view_box: ViewBox,
    style: LineStyle,
}

impl Normalizer {
    /// Normalize onto the config's own canvas (an identity mapping)
    pub fn new(config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        Self::with_view_box(config, ViewBox::from_config(config)?)
    }

    /// Fails on a config whose canvas or stroke width is unusable
    pub fn with_view_box(config: &RenderConfig, view_box: ViewBox) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            view_box,
            style: LineStyle {
                color: config.stroke_color.clone(),
                width: config.stroke_width,
                cap: config.stroke_cap,
            },
        })
    }

    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    pub fn normalize(&self, glyph: &Glyph, number: u32) -> Result<NormalizedArtifact> {
        if u32::from(glyph.number) != number {
            return Err(Error::NumberMismatch {
                glyph: glyph.number,
                requested: number,
            });
        }

        let transform = ViewTransform::fit(&glyph.bounds, &self.view_box);
        let lines = glyph
            .segments()
            .map(|seg| seg.map(|p| transform.apply(p)))
            .collect();

        Ok(NormalizedArtifact {
            id: glyph_id(number),
            title: format!("Cistercian numeral {number}"),
            number: glyph.number,
            view_box: self.view_box,
            transform,
            style: LineStyle {
                width: self.style.width * transform.scale,
                ..self.style.clone()
            },
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cistercian_core::synthesize;

    #[test]
    fn test_ids() {
        assert_eq!(glyph_id(42), "cistercian_42");
        assert_eq!(glyph_file_name(42), "cistercian_0042.svg");
        assert_eq!(glyph_file_name(9999), "cistercian_9999.svg");
    }

    #[test]
    fn test_identity_normalization() {
        let config = RenderConfig::default();
        let glyph = synthesize(1234, &config).unwrap();
        let artifact = Normalizer::new(&config)
            .unwrap()
            .normalize(&glyph, 1234)
            .unwrap();

        assert_eq!(artifact.id, "cistercian_1234");
        assert_eq!(artifact.title, "Cistercian numeral 1234");
        let identity = ViewTransform {
            scale: 1.0,
            dx: 0.0,
            dy: 0.0,
        };
        assert_eq!(artifact.transform, identity);
        assert_eq!(artifact.lines, glyph.segments().copied().collect::<Vec<_>>());
        assert_eq!(artifact.view_box.to_string(), "0 0 100 130");
    }

    #[test]
    fn test_scaled_normalization_centers() {
        let config = RenderConfig::default();
        let glyph = synthesize(1, &config).unwrap();
        let target = ViewBox::new(1000.0, 1000.0).unwrap();
        let artifact = Normalizer::with_view_box(&config, target)
            .unwrap()
            .normalize(&glyph, 1)
            .unwrap();

        let scale = 1000.0 / 130.0;
        assert!((artifact.transform.scale - scale).abs() < 1e-9);
        // stem stays on the vertical center line
        assert!((artifact.lines[0].from.x - 500.0).abs() < 1e-9);
        assert!((artifact.style.width - 8.0 * scale).abs() < 1e-9);
        for seg in &artifact.lines {
            for p in [seg.from, seg.to] {
                assert!(p.x >= 0.0 && p.x <= 1000.0 && p.y >= 0.0 && p.y <= 1000.0);
            }
        }
    }

    #[test]
    fn test_number_mismatch() {
        let config = RenderConfig::default();
        let glyph = synthesize(5, &config).unwrap();
        let err = Normalizer::new(&config)
            .unwrap()
            .normalize(&glyph, 6)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NumberMismatch {
                glyph: 5,
                requested: 6
            }
        ));
    }

    #[test]
    fn test_invalid_view_box() {
        assert!(ViewBox::new(0.0, 10.0).is_err());
        assert!(ViewBox::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_degenerate_canvas_rejected() {
        let config = RenderConfig {
            canvas_width: 0.0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            ViewBox::from_config(&config),
            Err(Error::InvalidViewBox(_))
        ));
        assert!(matches!(Normalizer::new(&config), Err(Error::Glyph(_))));

        let bad_stroke = RenderConfig {
            stroke_width: f64::NAN,
            ..RenderConfig::default()
        };
        let target = ViewBox::new(600.0, 1000.0).unwrap();
        assert!(Normalizer::with_view_box(&bad_stroke, target).is_err());
    }
}
