//! Square-wave synthesis and WAV export
//!
//! Samples are `f32` values on the 16-bit integer scale (a peak of
//! [`DEFAULT_AMPLITUDE`] is 10000), so they can be written without rescaling.
//!
//! # Example
//! ```no_run
//! use retro_sfx::audio::*;
//!
//! // Low buzzer
//! let warning = square_wave(110.0, 0.3, DEFAULT_SAMPLE_RATE, DEFAULT_AMPLITUDE);
//! assert_eq!(warning.len(), 13230);
//!
//! // Major triad arpeggio
//! let synth = Synth::default();
//! let success = synth.arpeggio(&[523.0, 659.0, 783.0, 1046.0], 0.08);
//!
//! write_wav(std::path::Path::new("warning.wav"), &warning, DEFAULT_SAMPLE_RATE)?;
//! write_wav(std::path::Path::new("success.wav"), &success, DEFAULT_SAMPLE_RATE)?;
//! # Ok::<(), retro_sfx::Error>(())
//! ```

mod export;
mod noise;
mod oscillators;
mod synth;

/// Default output sample rate (44.1kHz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default peak amplitude on the 16-bit scale
pub const DEFAULT_AMPLITUDE: f32 = 10000.0;

/// Largest magnitude a written sample may have
pub const PCM_PEAK: f32 = 32767.0;

// Oscillators
pub use oscillators::{arpeggio, sample_count, slide_square, square_wave};

// Noise
pub use noise::{FixedNoise, NOISE_SPREAD, NoiseSource, RandomNoise, Silence};

// Synth API
pub use synth::Synth;

// Export
pub use export::{to_pcm_i16, wav_spec, write_wav, write_wav_pcm};
