//! High-level synthesizer API

use super::noise::NoiseSource;
use super::oscillators::{arpeggio, slide_square, square_wave};
use super::{DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_RATE};

/// Sound effect synthesizer bound to a sample rate and peak amplitude
///
/// # Example
/// ```
/// use retro_sfx::audio::*;
///
/// let synth = Synth::new(DEFAULT_SAMPLE_RATE);
///
/// // Low buzzer
/// let buzz = synth.tone(110.0, 0.3);
/// assert_eq!(buzz.len(), 13230);
///
/// // Deterministic thud
/// let thud = synth.slide(220.0, 55.0, 0.2, &mut Silence);
/// assert!(thud.iter().all(|&s| s.abs() == DEFAULT_AMPLITUDE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Synth {
    sample_rate: u32,
    amplitude: f32,
}

impl Default for Synth {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl Synth {
    /// Create a synthesizer with the default amplitude
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Override the peak amplitude
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Fixed-pitch square tone
    pub fn tone(&self, frequency: f64, duration: f64) -> Vec<f32> {
        square_wave(frequency, duration, self.sample_rate, self.amplitude)
    }

    /// Pitch slide with lo-fi noise
    pub fn slide<N: NoiseSource>(
        &self,
        start_freq: f64,
        end_freq: f64,
        duration: f64,
        noise: &mut N,
    ) -> Vec<f32> {
        slide_square(
            start_freq,
            end_freq,
            duration,
            self.sample_rate,
            self.amplitude,
            noise,
        )
    }

    /// Notes played back to back, `note_duration` seconds each
    pub fn arpeggio(&self, notes: &[f64], note_duration: f64) -> Vec<f32> {
        arpeggio(notes, note_duration, self.sample_rate, self.amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::noise::FixedNoise;

    #[test]
    fn test_synth_defaults() {
        let synth = Synth::default();
        assert_eq!(synth.sample_rate(), 44100);
        assert_eq!(synth.amplitude(), 10000.0);
    }

    #[test]
    fn test_synth_amplitude_override() {
        let synth = Synth::new(22050).with_amplitude(500.0);
        let tone = synth.tone(440.0, 0.02);
        assert_eq!(tone.len(), 441);
        assert!(tone.iter().all(|&s| s == 500.0 || s == -500.0));
    }

    #[test]
    fn test_synth_warning_tone() {
        let tone = Synth::default().tone(110.0, 0.3);
        assert_eq!(tone.len(), 13230);
        assert!(tone.iter().all(|&s| s == 10000.0 || s == -10000.0));
    }

    #[test]
    fn test_synth_slide_uses_noise() {
        let synth = Synth::default();
        let mut noise = FixedNoise::new(vec![500]);
        let thud = synth.slide(220.0, 55.0, 0.01, &mut noise);
        assert!(thud.iter().all(|&s| s == 10500.0 || s == -9500.0));
    }

    #[test]
    fn test_synth_arpeggio() {
        let synth = Synth::default();
        let notes = [880.0, 1109.0, 1318.0, 1760.0];
        assert_eq!(synth.arpeggio(&notes, 0.05).len(), 4 * 2205);
    }
}
