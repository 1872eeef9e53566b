//! Retro sound effect synthesis
//!
//! Generates short square-wave sound effects (tones, pitch slides, arpeggios)
//! and writes them as 16-bit mono PCM WAV files.
//!
//! # Example
//! ```no_run
//! use retro_sfx::audio::*;
//!
//! let synth = Synth::new(DEFAULT_SAMPLE_RATE);
//!
//! // A bright ascending arpeggio
//! let lock = synth.arpeggio(&[880.0, 1109.0, 1318.0, 1760.0], 0.05);
//!
//! // A crunchy downward thud
//! let mut noise = RandomNoise::from_entropy();
//! let thud = synth.slide(220.0, 55.0, 0.2, &mut noise);
//!
//! write_wav(std::path::Path::new("lock.wav"), &lock, DEFAULT_SAMPLE_RATE)?;
//! write_wav(std::path::Path::new("thud.wav"), &thud, DEFAULT_SAMPLE_RATE)?;
//! # Ok::<(), retro_sfx::Error>(())
//! ```
//!
//! # Effect tables
//! ```no_run
//! use retro_sfx::audio::RandomNoise;
//! use retro_sfx::effects::{default_effects, render_all};
//!
//! let table = default_effects();
//! let mut noise = RandomNoise::from_entropy();
//! render_all(&table, std::path::Path::new("sfx"), &mut noise, |written| {
//!     println!("Generated: {}", written.path.display());
//! })?;
//! # Ok::<(), retro_sfx::Error>(())
//! ```

pub mod audio;
pub mod effects;
mod error;

pub use error::{Error, Result};
