//! Retro sound effect generator
//!
//! Renders a table of square-wave sound effects and writes each one as a
//! 16-bit mono WAV file.
//!
//! With no arguments the stock effects are written to the current directory:
//! - `tetris_lock.wav` - bright ascending arpeggio
//! - `sprint_success.wav` - quick major triad arpeggio
//! - `capacity_warning.wav` - low square buzzer
//!
//! ## Audio Naming Convention
//!
//! Each sound effect is saved as `{id}.wav`. A TOML manifest passed with
//! `--manifest` replaces the stock table (see `retro_sfx::effects`).

use anyhow::{Context, Result};
use clap::Parser;
use retro_sfx::audio::{NoiseSource, RandomNoise};
use retro_sfx::effects::{EffectTable, default_effects, load_manifest, render_all};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gen-retro-sfx")]
#[command(about = "Generate retro square-wave sound effects as WAV files")]
#[command(version)]
struct Cli {
    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML effect manifest (replaces the stock effects)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Seed for slide noise (random per run when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Output directory; empty means the current directory, so written
    /// paths are bare file names
    fn output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let table = match &cli.manifest {
        Some(path) => {
            tracing::info!("Loading effects from {}", path.display());
            load_manifest(path)
                .with_context(|| format!("Failed to load manifest {}", path.display()))?
        }
        None => default_effects(),
    };

    let output_dir = cli.output_dir();
    match cli.seed {
        Some(seed) => generate(&table, &output_dir, &mut RandomNoise::seeded(seed)),
        None => generate(&table, &output_dir, &mut RandomNoise::from_entropy()),
    }
}

fn generate<N: NoiseSource>(table: &EffectTable, output_dir: &Path, noise: &mut N) -> Result<()> {
    tracing::info!(
        "Generating {} effects @ {} Hz -> {}",
        table.effects.len(),
        table.sample_rate,
        output_dir.display()
    );

    render_all(table, output_dir, noise, |written| {
        println!("Generated: {}", written.path.display());
        tracing::debug!(
            "{} ({} samples, {:.2}s)",
            written.id,
            written.samples,
            written.duration()
        );
    })
    .with_context(|| format!("Failed to generate effects into {}", output_dir.display()))?;

    Ok(())
}
