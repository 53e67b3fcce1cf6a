//! Render configuration - fixed once per batch, passed by reference
//!
//! Only `canvas_width` influences geometry. Stroke color, width and cap are
//! carried through to the rendered artifact as attributes.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Point};
use crate::quadrant::STEM_UNITS;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Horizontal span of the glyph canvas; height is derived from it
    pub canvas_width: f64,
    pub stroke_color: StrokeColor,
    pub stroke_width: f64,
    pub stroke_cap: StrokeCap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 100.0,
            stroke_color: StrokeColor::default(),
            stroke_width: 8.0,
            stroke_cap: StrokeCap::Square,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.canvas_width.is_finite() || self.canvas_width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "canvasWidth must be a positive number, got {}",
                self.canvas_width
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "strokeWidth must be a positive number, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::for_width(self.canvas_width)
    }

    pub fn canvas_height(&self) -> f64 {
        self.layout().height
    }
}

/// SVG `stroke-linecap` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    #[default]
    Square,
    Round,
    Butt,
}

impl StrokeCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
            Self::Butt => "butt",
        }
    }
}

impl std::str::FromStr for StrokeCap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "round" => Ok(Self::Round),
            "butt" => Ok(Self::Butt),
            other => Err(Error::InvalidConfig(format!(
                "strokeCap must be square, round or butt, got {other:?}"
            ))),
        }
    }
}

/// CSS color keywords, sorted for binary search
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue", "darkcyan",
    "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen",
    "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow",
    "grey", "honeydew", "hotpink", "indianred", "indigo", "ivory", "khaki", "lavender",
    "lavenderblush", "lawngreen", "lemonchiffon", "lightblue", "lightcoral", "lightcyan",
    "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey", "lightpink", "lightsalmon",
    "lightseagreen", "lightskyblue", "lightslategray", "lightslategrey", "lightsteelblue",
    "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream",
    "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell",
    "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen",
    "steelblue", "tan", "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

/// A CSS color accepted by SVG renderers: `#rgb`, `#rrggbb` or a named color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StrokeColor(String);

impl StrokeColor {
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim().to_ascii_lowercase();
        let valid = match value.strip_prefix('#') {
            Some(hex) => {
                (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => NAMED_COLORS.binary_search(&value.as_str()).is_ok(),
        };

        if valid {
            Ok(Self(value))
        } else {
            Err(Error::InvalidConfig(format!("invalid stroke color {value:?}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        Self("#000000".to_string())
    }
}

impl TryFrom<String> for StrokeColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<StrokeColor> for String {
    fn from(color: StrokeColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canvas placement of the stem, derived from the canvas width.
///
/// ```text
///   margin = width / 5
///   unit   = 3 * width / 10     (one digit cell edge)
///   stem   = STEM_UNITS * unit  (top at y = margin)
///   height = stem + 2 * margin
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub unit: f64,
    /// Top end of the stem
    pub origin: Point,
}

impl Layout {
    pub fn for_width(width: f64) -> Self {
        let margin = width / 5.0;
        let unit = width * 3.0 / 10.0;
        Self {
            width,
            height: STEM_UNITS * unit + 2.0 * margin,
            margin,
            unit,
            origin: Point::new(width / 2.0, margin),
        }
    }

    /// Map a point in stroke units (x from the stem, y down from the stem top)
    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(self.origin.x + p.x * self.unit, self.origin.y + p.y * self.unit)
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }
}
