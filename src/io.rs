//! Output file writers: raw interleaved-f32 IQ, stereo WAV, and a JSON
//! generation summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use num_complex::Complex32;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::frame::spec::FrameSpec;

/// Write samples as interleaved little-endian f32 pairs `I0,Q0,I1,Q1,…`,
/// the layout of a GNU Radio complex file source.
pub fn write_iq_file(path: &Path, samples: &[Complex32]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for sample in samples {
        writer.write_f32::<LittleEndian>(sample.re)?;
        writer.write_f32::<LittleEndian>(sample.im)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} ({} samples, {} bytes)",
        path.display(),
        samples.len(),
        samples.len() * 8
    );
    Ok(())
}

/// Write samples as a stereo 16-bit WAV, I on the left channel and Q on the
/// right. This is baseband IQ data in a WAV container, not audio.
pub fn write_wav_stereo(path: &Path, samples: &[Complex32], sample_rate: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let peak = samples
        .iter()
        .map(|s| s.re.abs().max(s.im.abs()))
        .fold(0.0f32, f32::max)
        .max(f32::EPSILON);

    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in samples {
        writer.write_sample((sample.re / peak * i16::MAX as f32) as i16)?;
        writer.write_sample((sample.im / peak * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;

    info!("Wrote {} (stereo I/Q WAV at {} Hz)", path.display(), sample_rate);
    Ok(())
}

/// Generation summary written next to the sample files.
#[derive(Serialize)]
pub struct GenerationMeta {
    pub generation: String,
    pub sample_rate: f64,
    pub num_samples: usize,
    pub duration_secs: f64,
    pub test_mode: bool,
    pub repeat: bool,
}

impl GenerationMeta {
    pub fn new(spec: &FrameSpec, num_samples: usize) -> Self {
        Self {
            generation: match spec.generation {
                crate::frame::Generation::First => "1g".into(),
                crate::frame::Generation::Second => "2g".into(),
            },
            sample_rate: spec.sample_rate,
            num_samples,
            duration_secs: num_samples as f64 / spec.sample_rate,
            test_mode: spec.test_mode,
            repeat: spec.repeat,
        }
    }
}

pub fn write_meta(path: &Path, meta: &GenerationMeta) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(meta)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iq_file_layout() {
        let dir = std::env::temp_dir().join("sarsatgen_test_iq");
        let path = dir.join("case.iq");
        let samples = vec![Complex32::new(0.5, -0.25), Complex32::new(1.0, 0.0)];
        write_iq_file(&path, &samples).unwrap();

        let raw = std::fs::read(&path).unwrap();
        assert_eq!(raw.len(), 16);
        let first = f32::from_le_bytes(raw[0..4].try_into().unwrap());
        let second = f32::from_le_bytes(raw[4..8].try_into().unwrap());
        assert_eq!(first, 0.5);
        assert_eq!(second, -0.25);

        std::fs::remove_dir_all(&dir).ok();
    }
}
