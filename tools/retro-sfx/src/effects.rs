//! Named sound effect tables
//!
//! An [`EffectTable`] lists the effects to render and the format to render
//! them in. The built-in table comes from [`default_effects`]; a TOML manifest
//! can replace it:
//!
//! ```toml
//! sample_rate = 44100
//! amplitude = 10000.0
//!
//! [[effects]]
//! id = "tetris_lock"
//! description = "Bright ascending arpeggio"
//! kind = "arpeggio"
//! notes = [880.0, 1109.0, 1318.0, 1760.0]
//! note_duration = 0.05
//!
//! [[effects]]
//! id = "thud"
//! kind = "slide"
//! start_freq = 220.0
//! end_freq = 55.0
//! duration = 0.2
//! ```
//!
//! Each effect is written to `{id}.wav`.

use crate::audio::{DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_RATE, NoiseSource, Synth, write_wav};
use crate::{Error, Result};
use hashbrown::HashSet;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Effects plus the format they are rendered in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectTable {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    pub effects: Vec<EffectDef>,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_amplitude() -> f32 {
    DEFAULT_AMPLITUDE
}

/// One named effect
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectDef {
    /// File stem of the output WAV
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub sound: Sound,
}

/// What an effect sounds like
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sound {
    /// Notes played back to back
    Arpeggio { notes: Vec<f64>, note_duration: f64 },
    /// Single sustained square tone
    Tone { frequency: f64, duration: f64 },
    /// Noisy pitch slide
    Slide {
        start_freq: f64,
        end_freq: f64,
        duration: f64,
    },
}

/// Result of writing one effect
#[derive(Debug, Clone)]
pub struct WrittenEffect {
    pub id: String,
    pub path: PathBuf,
    pub samples: usize,
    pub sample_rate: u32,
}

impl WrittenEffect {
    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples as f32 / self.sample_rate as f32
    }
}

impl EffectDef {
    fn new(id: &str, description: &str, sound: Sound) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            sound,
        }
    }

    /// Output file name
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.id)
    }

    /// Synthesize this effect
    pub fn render<N: NoiseSource>(&self, synth: &Synth, noise: &mut N) -> Vec<f32> {
        match &self.sound {
            Sound::Arpeggio {
                notes,
                note_duration,
            } => synth.arpeggio(notes, *note_duration),
            Sound::Tone {
                frequency,
                duration,
            } => synth.tone(*frequency, *duration),
            Sound::Slide {
                start_freq,
                end_freq,
                duration,
            } => synth.slide(*start_freq, *end_freq, *duration, noise),
        }
    }

    fn validate(&self) -> Result<()> {
        let id = self.id.as_str();
        if id.is_empty() {
            return Err(Error::invalid(id, "id must not be empty"));
        }
        if id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(Error::invalid(id, "id must be a plain file stem"));
        }

        match &self.sound {
            Sound::Arpeggio {
                notes,
                note_duration,
            } => {
                if notes.is_empty() {
                    return Err(Error::invalid(id, "arpeggio needs at least one note"));
                }
                for &note in notes {
                    check_frequency(id, note)?;
                }
                check_duration(id, *note_duration)
            }
            Sound::Tone {
                frequency,
                duration,
            } => {
                check_frequency(id, *frequency)?;
                check_duration(id, *duration)
            }
            Sound::Slide {
                start_freq,
                end_freq,
                duration,
            } => {
                check_frequency(id, *start_freq)?;
                check_frequency(id, *end_freq)?;
                check_duration(id, *duration)
            }
        }
    }
}

fn check_frequency(id: &str, frequency: f64) -> Result<()> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(
            id,
            format!("frequency must be a positive number of Hz, got {frequency}"),
        ))
    }
}

fn check_duration(id: &str, duration: f64) -> Result<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(
            id,
            format!("duration must be a positive number of seconds, got {duration}"),
        ))
    }
}

/// The stock effects: lock, success, and warning
pub fn default_effects() -> EffectTable {
    EffectTable {
        sample_rate: DEFAULT_SAMPLE_RATE,
        amplitude: DEFAULT_AMPLITUDE,
        effects: vec![
            // A5, C#6, E6, A6
            EffectDef::new(
                "tetris_lock",
                "Bright ascending arpeggio",
                Sound::Arpeggio {
                    notes: vec![880.0, 1109.0, 1318.0, 1760.0],
                    note_duration: 0.05,
                },
            ),
            // C5, E5, G5, C6
            EffectDef::new(
                "sprint_success",
                "Quick major triad arpeggio",
                Sound::Arpeggio {
                    notes: vec![523.0, 659.0, 783.0, 1046.0],
                    note_duration: 0.08,
                },
            ),
            // Low A buzzer
            EffectDef::new(
                "capacity_warning",
                "Low square buzzer",
                Sound::Tone {
                    frequency: 110.0,
                    duration: 0.3,
                },
            ),
        ],
    }
}

impl EffectTable {
    /// Parse and validate a TOML manifest
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: EffectTable = toml::from_str(source)?;
        table.validate()?;
        Ok(table)
    }

    /// Check every effect and the shared format settings
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::invalid("<table>", "sample_rate must be positive"));
        }
        if !self.amplitude.is_finite() {
            return Err(Error::invalid("<table>", "amplitude must be finite"));
        }
        if self.effects.is_empty() {
            return Err(Error::invalid("<table>", "no effects defined"));
        }

        let mut seen = HashSet::new();
        for effect in &self.effects {
            effect.validate()?;
            if !seen.insert(effect.id.as_str()) {
                return Err(Error::invalid(&effect.id, "duplicate id"));
            }
        }
        Ok(())
    }

    /// Synthesizer configured for this table
    pub fn synth(&self) -> Synth {
        Synth::new(self.sample_rate).with_amplitude(self.amplitude)
    }
}

/// Load an effect table from a TOML manifest file
pub fn load_manifest(path: &Path) -> Result<EffectTable> {
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    EffectTable::from_toml_str(&source)
}

/// Render one effect and write it into `output_dir`
fn render_to<N: NoiseSource>(
    effect: &EffectDef,
    synth: &Synth,
    output_dir: &Path,
    noise: &mut N,
) -> Result<WrittenEffect> {
    let samples = effect.render(synth, noise);
    let path = output_dir.join(effect.file_name());

    tracing::debug!("Rendering '{}' ({} samples)", effect.id, samples.len());
    write_wav(&path, &samples, synth.sample_rate())?;

    Ok(WrittenEffect {
        id: effect.id.clone(),
        path,
        samples: samples.len(),
        sample_rate: synth.sample_rate(),
    })
}

/// Render every effect in the table into `output_dir`
///
/// The directory is created if missing; an empty path means the current
/// directory. `on_written` runs after each file is closed. Stops at the
/// first failure.
pub fn render_all<N, F>(
    table: &EffectTable,
    output_dir: &Path,
    noise: &mut N,
    mut on_written: F,
) -> Result<Vec<WrittenEffect>>
where
    N: NoiseSource,
    F: FnMut(&WrittenEffect),
{
    std::fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

    let synth = table.synth();
    let mut written = Vec::with_capacity(table.effects.len());
    for effect in &table.effects {
        let result = render_to(effect, &synth, output_dir, noise)?;
        on_written(&result);
        written.push(result);
    }
    Ok(written)
}
