//! # Cistercian Config
//!
//! Generator settings loaded once, before any glyph is synthesized.
//!
//! Lookup order:
//! 1. explicit path (`--config`)
//! 2. `~/.config/cistercian/config.yaml`
//! 3. built-in defaults
//!
//! `CISTERCIAN_*` environment variables are applied on top, then the whole
//! config is validated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use cistercian_core::{RenderConfig, StrokeColor, MAX_NUMERAL, MIN_NUMERAL};

pub const ENV_STROKE_COLOR: &str = "CISTERCIAN_STROKE_COLOR";
pub const ENV_STROKE_WIDTH: &str = "CISTERCIAN_STROKE_WIDTH";
pub const ENV_CANVAS_WIDTH: &str = "CISTERCIAN_CANVAS_WIDTH";

/// Result type for config operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidOverride { key: &'static str, value: String },

    #[error(transparent)]
    Render(#[from] cistercian_core::Error),

    #[error("Invalid range {from}..={to}: must lie within 1..=9999 and be ascending")]
    InvalidRange { from: u32, to: u32 },

    #[error("Invalid font metrics: {0}")]
    InvalidMetrics(String),
}

/// Font-level metrics handed to the font assembly stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontMetrics {
    pub units_per_em: u32,
    pub ascender: i32,
    pub descender: i32,
    /// Advance width of every numeral glyph
    pub glyph_width: u32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            units_per_em: 1000,
            ascender: 800,
            descender: -200,
            glyph_width: 600,
        }
    }
}

impl FontMetrics {
    /// Symmetric side bearing: `(glyph_width - svg_width) / 2`
    pub fn side_bearing(&self, svg_width: f64) -> f64 {
        (self.glyph_width as f64 - svg_width) / 2.0
    }
}

/// Where and what to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub from: u32,
    pub to: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            from: MIN_NUMERAL,
            to: MAX_NUMERAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub render: RenderConfig,
    pub font: FontMetrics,
    pub output: OutputConfig,
}

impl GeneratorConfig {
    /// Default location: `~/.config/cistercian/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cistercian")
            .join("config.yaml")
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Resolve, override from the process environment, and validate
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let path = Self::default_path();
                if path.exists() {
                    tracing::debug!("Loading config from {}", path.display());
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CISTERCIAN_*` overrides from `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup(ENV_STROKE_COLOR) {
            self.render.stroke_color =
                StrokeColor::parse(&value).map_err(|_| Error::InvalidOverride {
                    key: ENV_STROKE_COLOR,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_STROKE_WIDTH) {
            self.render.stroke_width = parse_number(ENV_STROKE_WIDTH, value)?;
        }
        if let Some(value) = lookup(ENV_CANVAS_WIDTH) {
            self.render.canvas_width = parse_number(ENV_CANVAS_WIDTH, value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let out = &self.output;
        if out.from < MIN_NUMERAL || out.to > MAX_NUMERAL || out.from > out.to {
            return Err(Error::InvalidRange {
                from: out.from,
                to: out.to,
            });
        }
        self.validate_rendering()
    }

    /// Render and font checks only; the output range is not consulted
    pub fn validate_rendering(&self) -> Result<()> {
        self.render.validate()?;

        let font = &self.font;
        if font.units_per_em == 0 || font.glyph_width == 0 {
            return Err(Error::InvalidMetrics(
                "unitsPerEm and glyphWidth must be non-zero".to_string(),
            ));
        }
        if font.descender > 0 || font.ascender <= 0 {
            return Err(Error::InvalidMetrics(format!(
                "expected ascender > 0 and descender <= 0, got {} / {}",
                font.ascender, font.descender
            )));
        }
        Ok(())
    }
}

fn parse_number(key: &'static str, value: String) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidOverride { key, value })
}
