//! Batch driver - synthesize, normalize and persist a range of numerals

use std::time::Instant;

use cistercian_config::GeneratorConfig;
use cistercian_core::Synthesizer;
use cistercian_svg::Normalizer;

use crate::features::FeatureFile;
use crate::ligature::LigatureTable;
use crate::manifest::{GlyphManifest, GlyphRecord};
use crate::storage::{self, OutputLayout};
use crate::{Error, Result};

const PROGRESS_EVERY: usize = 500;

/// A numeral that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFailure {
    pub number: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub generated: Vec<u32>,
    pub failures: Vec<GlyphFailure>,
    pub elapsed_ms: u128,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct BatchDriver<'a> {
    config: &'a GeneratorConfig,
    layout: OutputLayout,
}

impl<'a> BatchDriver<'a> {
    /// Output goes to `config.output.dir`
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            layout: OutputLayout::new(&config.output.dir),
            config,
        }
    }

    pub fn with_layout(config: &'a GeneratorConfig, layout: OutputLayout) -> Self {
        Self { config, layout }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Generate the configured range
    pub fn run(&self) -> Result<BatchReport> {
        self.config.validate()?;
        let out = &self.config.output;
        self.run_numbers(out.from..=out.to)
    }

    /// Generate `numbers` in the order given; failures are logged and skipped.
    ///
    /// A bad render or font config fails the whole call before anything is written.
    pub fn run_numbers(&self, numbers: impl IntoIterator<Item = u32>) -> Result<BatchReport> {
        self.config.validate_rendering()?;
        let started = Instant::now();
        let numbers: Vec<u32> = numbers.into_iter().collect();
        let total = numbers.len();

        self.layout.create_dirs()?;
        tracing::info!(
            total,
            out = %self.layout.root().display(),
            "Generating Cistercian glyphs"
        );

        let render = &self.config.render;
        let synth = Synthesizer::new(render);
        let normalizer = Normalizer::new(render)?;

        let mut report = BatchReport::default();
        let mut records = Vec::with_capacity(total);

        for (i, &number) in numbers.iter().enumerate() {
            match self.generate_one(&synth, &normalizer, number) {
                Ok(()) => {
                    records.push(GlyphRecord::new(number, &self.config.font, render.canvas_width));
                    report.generated.push(number);
                }
                Err(e) => {
                    tracing::warn!(number, error = %e, "Skipping numeral");
                    report.failures.push(GlyphFailure {
                        number,
                        reason: e.to_string(),
                    });
                }
            }

            if (i + 1) % PROGRESS_EVERY == 0 {
                let percent = (i + 1) as f64 / total as f64 * 100.0;
                tracing::info!("Progress: {}/{} ({:.1}%)", i + 1, total, percent);
            }
        }

        self.write_metadata(records, &report.generated)?;

        report.elapsed_ms = started.elapsed().as_millis();
        tracing::info!(
            generated = report.generated.len(),
            failed = report.failures.len(),
            elapsed_ms = report.elapsed_ms as u64,
            "Glyph generation complete"
        );
        Ok(report)
    }

    fn generate_one(
        &self,
        synth: &Synthesizer<'_>,
        normalizer: &Normalizer,
        number: u32,
    ) -> Result<()> {
        let glyph = synth.synthesize(number)?;
        let artifact = normalizer.normalize(&glyph, number)?;

        let path = self.layout.glyph_path(number);
        std::fs::write(&path, artifact.to_svg())
            .map_err(|source| Error::Persistence { number, source })?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn write_metadata(&self, records: Vec<GlyphRecord>, generated: &[u32]) -> Result<()> {
        let manifest = GlyphManifest::new(
            self.config.font.clone(),
            self.config.render.clone(),
            records,
        );
        storage::write_json(&self.layout.manifest_path(), &manifest)?;

        let ligatures = LigatureTable::build(generated.iter().copied());
        storage::write_json(&self.layout.ligatures_path(), &ligatures)?;

        let features = FeatureFile::from_table(&ligatures);
        storage::write_atomic(&self.layout.features_path(), &features.render())?;

        tracing::info!(
            glyphs = manifest.total_glyphs,
            ligatures = ligatures.total_mappings,
            "Wrote metadata to {}",
            self.layout.metadata_dir().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cistercian_svg::parse_artifact;
    use tempfile::tempdir;

    fn config_for(dir: &std::path::Path, from: u32, to: u32) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.output.dir = dir.to_path_buf();
        config.output.from = from;
        config.output.to = to;
        config
    }

    #[test]
    fn test_small_batch_outputs() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path(), 1, 120);
        let driver = BatchDriver::new(&config);

        let report = driver.run().unwrap();
        assert!(report.is_clean());
        assert_eq!(report.generated.len(), 120);

        let layout = driver.layout();
        let svg = std::fs::read_to_string(layout.glyph_path(12)).unwrap();
        let parsed = parse_artifact(&svg).unwrap();
        assert_eq!(parsed.group_id.as_deref(), Some("cistercian_12"));
        assert_eq!(parsed.lines.len(), 3);

        let raw = std::fs::read_to_string(layout.manifest_path()).unwrap();
        let manifest: GlyphManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(manifest.total_glyphs, 120);
        assert_eq!(manifest.glyphs[0].glyph_name, "cistercian_1");
        assert_eq!(manifest.render_config, config.render);

        let raw = std::fs::read_to_string(layout.ligatures_path()).unwrap();
        let ligatures: LigatureTable = serde_json::from_str(&raw).unwrap();
        assert_eq!(ligatures.mappings[0].input, "100");
        assert!(ligatures.position(112).unwrap() < ligatures.position(12).unwrap());

        let features = std::fs::read_to_string(layout.features_path()).unwrap();
        assert!(features.contains("sub one one two by cistercian_112;"));
    }

    #[test]
    fn test_failures_are_isolated() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path(), 1, 9999);
        let driver = BatchDriver::new(&config);

        // a directory squatting on the artifact path makes that write fail
        driver.layout().create_dirs().unwrap();
        std::fs::create_dir(driver.layout().glyph_path(3)).unwrap();

        let report = driver.run_numbers([0, 1, 2, 3, 4, 10000]).unwrap();
        assert_eq!(report.generated, vec![1, 2, 4]);

        let failed: Vec<u32> = report.failures.iter().map(|f| f.number).collect();
        assert_eq!(failed, vec![0, 3, 10000]);
        assert!(report.failures[1].reason.contains("persist numeral 3"));

        let raw = std::fs::read_to_string(driver.layout().ligatures_path()).unwrap();
        let ligatures: LigatureTable = serde_json::from_str(&raw).unwrap();
        assert_eq!(ligatures.total_mappings, 3);
        assert!(ligatures.position(3).is_none());
    }

    #[test]
    fn test_invalid_range_rejected_up_front() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path(), 50, 10);
        let err = BatchDriver::new(&config).run().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!dir.path().join("metadata").exists());
    }

    #[test]
    fn test_invalid_render_config_rejected() {
        let dir = tempdir().unwrap();
        let mut config = config_for(dir.path(), 1, 9999);
        config.render.canvas_width = 0.0;
        let driver = BatchDriver::new(&config);

        let err = driver.run_numbers([1, 2]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!driver.layout().glyph_path(1).exists());
        assert!(!driver.layout().glyph_path(2).exists());
        assert!(!driver.layout().manifest_path().exists());
    }
}
