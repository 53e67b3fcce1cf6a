//! Read geometry back out of a generated SVG document

use svg::node::element::tag::Type;
use svg::parser::Event;

use cistercian_core::Segment;

use crate::normalize::ViewBox;
use crate::{Error, Result};

/// What [`parse_artifact`] recovers from a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedArtifact {
    pub view_box: Option<ViewBox>,
    pub title: Option<String>,
    pub group_id: Option<String>,
    pub lines: Vec<Segment>,
}

fn parse_view_box(raw: &str) -> Result<ViewBox> {
    let parts: Vec<f64> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| Error::InvalidViewBox(raw.to_string()))?;

    match parts.as_slice() {
        [x, y, w, h] if *x == 0.0 && *y == 0.0 => ViewBox::new(*w, *h),
        _ => Err(Error::InvalidViewBox(raw.to_string())),
    }
}

pub fn parse_artifact(content: &str) -> Result<ParsedArtifact> {
    let parser = svg::read(content).map_err(|e| Error::Parse(e.to_string()))?;

    let mut parsed = ParsedArtifact::default();
    let mut in_title = false;

    for event in parser {
        match event {
            Event::Error(e) => return Err(Error::Parse(e.to_string())),
            Event::Tag(name, tag_type, attributes) => match (name, tag_type) {
                ("svg", Type::Start) => {
                    if let Some(raw) = attributes.get("viewBox") {
                        parsed.view_box = Some(parse_view_box(raw)?);
                    }
                }
                ("title", Type::Start) => in_title = true,
                ("title", Type::End) => in_title = false,
                ("g", Type::Start) if parsed.group_id.is_none() => {
                    parsed.group_id = attributes.get("id").map(|id| id.to_string());
                }
                ("line", Type::Empty) | ("line", Type::Start) => {
                    let coord = |attribute: &'static str| {
                        attributes
                            .get(attribute)
                            .and_then(|value| value.trim().parse::<f64>().ok())
                            .ok_or(Error::MissingAttribute {
                                tag: "line",
                                attribute,
                            })
                    };
                    let segment =
                        Segment::new(coord("x1")?, coord("y1")?, coord("x2")?, coord("y2")?);
                    parsed.lines.push(segment);
                }
                _ => {}
            },
            Event::Text(text) if in_title => {
                parsed.title = Some(text.trim().to_string());
            }
            _ => {}
        }
    }

    Ok(parsed)
}

/// Line segments in document order
pub fn parse_lines(content: &str) -> Result<Vec<Segment>> {
    Ok(parse_artifact(content)?.lines)
}
