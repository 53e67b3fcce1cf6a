//! Output directory layout and file writes

use std::path::{Path, PathBuf};

use serde::Serialize;

use cistercian_svg::glyph_file_name;

use crate::Result;

/// Paths under one output root
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn glyphs_dir(&self) -> PathBuf {
        self.root.join("glyphs")
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join("metadata")
    }

    pub fn glyph_path(&self, number: u32) -> PathBuf {
        self.glyphs_dir().join(glyph_file_name(number))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.metadata_dir().join("glyphs.json")
    }

    pub fn ligatures_path(&self) -> PathBuf {
        self.metadata_dir().join("ligatures.json")
    }

    pub fn features_path(&self) -> PathBuf {
        self.metadata_dir().join("features.fea")
    }

    pub fn create_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(self.glyphs_dir())?;
        std::fs::create_dir_all(self.metadata_dir())?;
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over `path`
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    std::fs::write(&temp_path, content)?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    write_atomic(path, &content)?;
    Ok(())
}
