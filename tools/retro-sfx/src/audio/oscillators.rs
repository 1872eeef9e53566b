//! Square-wave generators
//!
//! All generators share the same sample clock: sample `i` sits at
//! `t = i / sample_rate`, and a buffer holds `round(sample_rate * duration)`
//! samples.

use super::noise::NoiseSource;
use std::f64::consts::PI;

/// Number of samples covering `duration` seconds
///
/// Rounds to the nearest sample. Zero, negative, infinite, and NaN durations
/// give 0.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    let n = (sample_rate as f64 * duration).round();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// Square level for a phase: positive only when the sine is strictly positive
#[inline]
fn square_level(phase: f64, amplitude: f32) -> f32 {
    if phase.sin() > 0.0 { amplitude } else { -amplitude }
}

/// Generate a fixed-pitch square wave
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude on the 16-bit scale
///
/// # Returns
/// `round(sample_rate * duration)` samples, each `+amplitude` or `-amplitude`
pub fn square_wave(frequency: f64, duration: f64, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let num_samples = sample_count(duration, sample_rate);
    let omega = 2.0 * PI * frequency;

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            square_level(omega * t, amplitude)
        })
        .collect()
}

/// Generate a square wave whose pitch slides linearly, with lo-fi noise
///
/// The instantaneous frequency moves from `start_freq` toward `end_freq`.
/// Phase is taken as `2π · f(i) · t` rather than the integral of the
/// frequency, which bends the pitch further than a true glide would.
/// That bend is part of the sound.
///
/// One offset from `noise` is added to every sample.
pub fn slide_square<N: NoiseSource>(
    start_freq: f64,
    end_freq: f64,
    duration: f64,
    sample_rate: u32,
    amplitude: f32,
    noise: &mut N,
) -> Vec<f32> {
    let num_samples = sample_count(duration, sample_rate);
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let progress = i as f64 / num_samples as f64;
        let freq = start_freq + (end_freq - start_freq) * progress;
        let t = i as f64 / sample_rate as f64;
        let phase = 2.0 * PI * freq * t;

        samples.push(square_level(phase, amplitude) + noise.next_offset() as f32);
    }

    samples
}

/// Play square-wave notes back to back
///
/// Each note lasts `note_duration` seconds. Notes are joined without any
/// cross-fade, so the transitions click.
pub fn arpeggio(notes: &[f64], note_duration: f64, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let mut samples = Vec::with_capacity(notes.len() * sample_count(note_duration, sample_rate));
    for &freq in notes {
        samples.extend(square_wave(freq, note_duration, sample_rate, amplitude));
    }
    samples
}
