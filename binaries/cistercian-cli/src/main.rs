//! Cistercian CLI
//!
//! Generates numeral glyphs and the metadata the font build reads.
//!
//! ```bash
//! cistercian generate --out build          # all 9999 glyphs + metadata
//! cistercian render 1234 -o 1234.svg       # one normalized glyph
//! cistercian render 1234 --raw             # preview form on stdout
//! cistercian ligatures --limit 5
//! cistercian config                        # effective config as YAML
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cistercian_batch::{BatchDriver, LigatureTable};
use cistercian_config::GeneratorConfig;
use cistercian_core::Synthesizer;
use cistercian_svg::{render_raw, Normalizer};

#[derive(Parser)]
#[command(name = "cistercian")]
#[command(about = "Cistercian numeral glyph generator")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/cistercian/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log every file written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate glyph SVGs, manifest, ligature table and feature file
    Generate {
        /// Output root (glyphs/ and metadata/ are created inside)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// First numeral
        #[arg(long)]
        from: Option<u32>,

        /// Last numeral
        #[arg(long)]
        to: Option<u32>,
    },

    /// Render a single numeral as SVG
    Render {
        number: u32,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview form with pixel size and per-place groups
        #[arg(long)]
        raw: bool,
    },

    /// Print the ligature table in substitution order
    Ligatures {
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cistercian=debug" } else { "cistercian=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config =
        GeneratorConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate { out, from, to } => {
            if let Some(out) = out {
                config.output.dir = out;
            }
            if let Some(from) = from {
                config.output.from = from;
            }
            if let Some(to) = to {
                config.output.to = to;
            }

            let report = BatchDriver::new(&config).run().context("Glyph generation failed")?;
            println!(
                "Generated {} glyphs in {} ms ({} failed)",
                report.generated.len(),
                report.elapsed_ms,
                report.failures.len()
            );
            for failure in &report.failures {
                println!("  {}: {}", failure.number, failure.reason);
            }
        }

        Commands::Render { number, output, raw } => {
            let glyph = Synthesizer::new(&config.render)
                .synthesize(number)
                .with_context(|| format!("Cannot draw {number}"))?;

            let svg = if raw {
                render_raw(&glyph, &config.render)?
            } else {
                Normalizer::new(&config.render)?
                    .normalize(&glyph, number)?
                    .to_svg()
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, svg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => print!("{svg}"),
            }
        }

        Commands::Ligatures { limit } => {
            let out = &config.output;
            let table = LigatureTable::build(out.from..=out.to);
            let shown = limit.unwrap_or(table.total_mappings);
            for mapping in table.mappings.iter().take(shown) {
                println!("{:>4} -> {}", mapping.input, mapping.output);
            }
            println!("{} mappings", table.total_mappings);
        }

        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
