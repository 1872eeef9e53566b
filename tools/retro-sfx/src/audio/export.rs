//! PCM conversion and WAV export
//!
//! Output is always canonical 16-bit mono integer PCM.

use super::PCM_PEAK;
use crate::{Error, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Convert 16-bit scale samples to PCM i16
///
/// Values are clamped to `[-32767, 32767]` and truncated toward zero.
/// Out-of-range values clip; they never wrap. NaN becomes 0.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| s.clamp(-PCM_PEAK, PCM_PEAK) as i16)
        .collect()
}

/// WAV header parameters for mono 16-bit PCM at `sample_rate`
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Write samples to a WAV file, replacing any existing file
///
/// Samples are clipped and quantized with [`to_pcm_i16`].
///
/// # Arguments
/// * `path` - Output file path
/// * `samples` - Samples on the 16-bit scale
/// * `sample_rate` - Sample rate in Hz
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let pcm = to_pcm_i16(samples);
    write_wav_pcm(path, &pcm, sample_rate)
}

/// Write already quantized PCM samples to a WAV file
///
/// `i16::MIN` is clipped to `-32767` so both polarities share one peak.
/// The writer owns the file handle: it is flushed by `finalize` on success
/// and closed on drop if writing fails part way.
pub fn write_wav_pcm(path: &Path, samples: &[i16], sample_rate: u32) -> Result<()> {
    let mut writer =
        WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| Error::wav(path, e))?;

    for &sample in samples {
        writer
            .write_sample(sample.max(-i16::MAX))
            .map_err(|e| Error::wav(path, e))?;
    }

    writer.finalize().map_err(|e| Error::wav(path, e))?;

    tracing::debug!(
        "Wrote {} ({} samples @ {} Hz)",
        path.display(),
        samples.len(),
        sample_rate
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RIFF + fmt + data chunk headers for plain PCM
    const HEADER_LEN: u64 = 44;

    #[test]
    fn test_to_pcm_i16() {
        let samples = vec![0.0, 10000.0, -10000.0, 32767.0, -32767.0];
        let pcm = to_pcm_i16(&samples);
        assert_eq!(pcm, vec![0, 10000, -10000, 32767, -32767]);
    }

    #[test]
    fn test_to_pcm_i16_clamp() {
        let pcm = to_pcm_i16(&[40000.0, -40000.0, f32::INFINITY, f32::NEG_INFINITY]);
        assert_eq!(pcm, vec![i16::MAX, -i16::MAX, i16::MAX, -i16::MAX]); // -32767, not -32768
    }

    #[test]
    fn test_to_pcm_i16_truncates_toward_zero() {
        let pcm = to_pcm_i16(&[1.9, -1.9, 10500.7, -9500.2]);
        assert_eq!(pcm, vec![1, -1, 10500, -9500]);
    }

    #[test]
    fn test_to_pcm_i16_nan() {
        assert_eq!(to_pcm_i16(&[f32::NAN]), vec![0]);
    }

    #[test]
    fn test_wav_spec() {
        let spec = wav_spec(44100);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn test_write_wav_header_and_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples = vec![10000.0, -10000.0, 40000.0, -40000.0, 0.0];

        write_wav(&path, &samples, 22050).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(reader.len(), 5);

        let read: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![10000, -10000, 32767, -32767, 0]);

        let size = std::fs::metadata(&path).unwrap().len();
        assert_eq!(size, HEADER_LEN + 2 * samples.len() as u64);
    }

    #[test]
    fn test_write_wav_clip_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");

        write_wav(&path, &[40000.0, -40000.0], 44100).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let payload = &bytes[HEADER_LEN as usize..];
        assert_eq!(payload, &[0xFF, 0x7F, 0x01, 0x80]);
    }

    #[test]
    fn test_write_wav_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        write_wav(&path, &[], 44100).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), HEADER_LEN);
    }

    #[test]
    fn test_write_wav_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("same.wav");
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 37.0) - 18000.0).collect();

        write_wav(&path, &samples, 44100).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_wav(&path, &samples, 44100).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_wav_overwrites_longer_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shrink.wav");

        write_wav(&path, &vec![1000.0; 500], 44100).unwrap();
        write_wav(&path, &[1000.0; 10], 44100).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), HEADER_LEN + 20);
    }

    #[test]
    fn test_write_wav_pcm_clips_min() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm.wav");

        write_wav_pcm(&path, &[i16::MIN, i16::MAX, -5, 0], 44100).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let read: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![-32767, 32767, -5, 0]);
    }

    #[test]
    fn test_write_wav_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");

        let err = write_wav(&path, &[0.0], 44100).unwrap_err();
        assert!(matches!(err, Error::Wav { .. }));
    }
}
