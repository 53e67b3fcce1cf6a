//! SVG text output

use std::fmt::Write;

use cistercian_core::{Glyph, RenderConfig, Segment};

use crate::normalize::{NormalizedArtifact, ViewBox};
use crate::Result;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Coordinates rounded to 3 decimals, without trailing zeros or `-0`
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // adding 0.0 turns -0.0 into 0.0
    format!("{}", rounded + 0.0)
}

fn line_element(seg: &Segment) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        format_coord(seg.from.x),
        format_coord(seg.from.y),
        format_coord(seg.to.x),
        format_coord(seg.to.y),
    )
}

impl NormalizedArtifact {
    pub fn to_svg(&self) -> String {
        let mut lines = String::new();
        for seg in &self.lines {
            let _ = writeln!(lines, "    {}", line_element(seg));
        }

        format!(
            r#"<svg xmlns="{ns}" viewBox="{view_box}">
  <title>{title}</title>
  <g id="{id}" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="{cap}">
{lines}  </g>
</svg>
"#,
            ns = SVG_NS,
            view_box = self.view_box,
            title = self.title,
            id = self.id,
            color = self.style.color,
            width = format_coord(self.style.width),
            cap = self.style.cap.as_str(),
            lines = lines,
        )
    }
}

/// Preview rendering straight from the synthesizer's canvas.
///
/// Unlike the normalized artifact this keeps pixel dimensions, a background
/// and one group per digit place tagged with its digit.
pub fn render_raw(glyph: &Glyph, config: &RenderConfig) -> Result<String> {
    config.validate()?;
    let view_box = ViewBox::from_config(config)?;
    let mut body = String::new();

    let _ = writeln!(body, r#"  <g class="stem">{}</g>"#, line_element(&glyph.stem));
    for group in &glyph.groups {
        let _ = write!(
            body,
            r#"  <g class="{place}" data-digit="{digit}">"#,
            place = group.place,
            digit = group.digit
        );
        for seg in &group.segments {
            body.push_str(&line_element(seg));
        }
        body.push_str("</g>\n");
    }

    Ok(format!(
        r##"<svg xmlns="{ns}" viewBox="{view_box}" width="{w}" height="{h}">
  <!-- Cistercian numeral {number} -->
  <rect width="100%" height="100%" fill="#ffffff"/>
  <g fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="{cap}">
{body}  </g>
</svg>
"##,
        ns = SVG_NS,
        view_box = view_box,
        w = format_coord(view_box.width),
        h = format_coord(view_box.height),
        number = glyph.number,
        color = config.stroke_color,
        width = format_coord(config.stroke_width),
        cap = config.stroke_cap.as_str(),
        body = body,
    ))
}
