//! Clip loading and the slice/pad/concat/stack operations.
//!
//! Source recordings are decoded to mono f64 samples in [-1.0, 1.0].
//! Composite assembly never resamples: all inputs to one artifact must
//! share a sample rate.

use std::path::Path;

use crate::error::{AudioError, AudioResult};

/// A mono audio clip.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Samples in [-1.0, 1.0].
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Clip {
    /// Number of frames in the clip.
    pub fn frames(&self) -> usize {
        self.samples.len()
    }

    /// Frame count for a duration in milliseconds at this clip's rate.
    pub fn frames_for_ms(&self, ms: u32) -> usize {
        frames_for_ms(self.sample_rate, ms)
    }

    /// Returns the clip cut or zero-padded to exactly `frame_count` frames.
    ///
    /// Truncation discards the tail of long recordings; padding preserves
    /// timing for short ones.
    pub fn fit_to(&self, frame_count: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(frame_count);
        let take = self.frames().min(frame_count);
        out.extend_from_slice(&self.samples[..take]);
        out.resize(frame_count, 0.0);
        out
    }
}

/// Frame count for a duration in milliseconds at a sample rate.
pub fn frames_for_ms(sample_rate: u32, ms: u32) -> usize {
    (sample_rate as u64 * ms as u64 / 1000) as usize
}

/// Loads a WAV file as a mono [`Clip`].
///
/// Multi-channel audio is collapsed to mono by averaging channels. 8, 16,
/// 24 and 32-bit integer PCM are accepted; other formats are rejected.
pub fn load_clip(path: &Path) -> AudioResult<Clip> {
    let mut reader = hound::WavReader::open(path).map_err(|e| {
        AudioError::synthesis(format!("failed to open '{}': {}", path.display(), e))
    })?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(AudioError::synthesis(format!(
            "unsupported WAV format in '{}': only integer PCM is supported",
            path.display()
        )));
    }

    let samples: Vec<f64> = match spec.bits_per_sample {
        8 => collect_samples::<i8>(&mut reader, path)?,
        16 => collect_samples::<i16>(&mut reader, path)?,
        24 | 32 => collect_samples::<i32>(&mut reader, path)?,
        bits => {
            return Err(AudioError::synthesis(format!(
                "unsupported bit depth in '{}': {} bits",
                path.display(),
                bits
            )));
        }
    };

    let scale = sample_scale(spec.bits_per_sample);
    let mono = to_mono(&samples, spec.channels as usize);

    Ok(Clip {
        samples: mono.into_iter().map(|s| s / scale).collect(),
        sample_rate: spec.sample_rate,
    })
}

fn collect_samples<S>(
    reader: &mut hound::WavReader<std::io::BufReader<std::fs::File>>,
    path: &Path,
) -> AudioResult<Vec<f64>>
where
    S: hound::Sample + Into<i64>,
{
    reader
        .samples::<S>()
        .map(|s| s.map(|v| v.into() as f64))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AudioError::synthesis(format!("failed to read '{}': {}", path.display(), e)))
}

/// Full-scale divisor for a bit depth.
fn sample_scale(bits_per_sample: u16) -> f64 {
    match bits_per_sample {
        8 => 128.0,
        16 => 32768.0,
        24 => 8388608.0,
        _ => 2147483648.0,
    }
}

/// Collapses interleaved samples to mono by averaging channels.
fn to_mono(samples: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

/// Concatenates fixed-length slices in order.
pub fn concat_slices(slices: &[Vec<f64>]) -> Vec<f64> {
    let total = slices.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for slice in slices {
        out.extend_from_slice(slice);
    }
    out
}

/// Sums equal-length slices sample-wise and limits the peak.
///
/// The mix is attenuated when its peak exceeds the headroom target; quiet
/// mixes are left untouched. Slices shorter than the longest are treated
/// as silence past their end.
pub fn stack_slices(slices: &[Vec<f64>], headroom_db: f64) -> Vec<f64> {
    let frames = slices.iter().map(Vec::len).max().unwrap_or(0);
    let mut mix = vec![0.0; frames];
    for slice in slices {
        for (out, &s) in mix.iter_mut().zip(slice.iter()) {
            *out += s;
        }
    }
    limit_peak(&mut mix, headroom_db);
    mix
}

/// Attenuates samples so the peak stays at or below the headroom target.
fn limit_peak(samples: &mut [f64], headroom_db: f64) {
    let target_peak = 10.0_f64.powf(headroom_db / 20.0);
    let current_peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);

    if current_peak > target_peak {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Writes mono f64 samples as a 16-bit PCM WAV file.
///
/// Out-of-range samples are clipped. The output carries no timestamps or
/// variable metadata, so identical inputs produce byte-identical files.
pub fn write_wav_mono16(path: &Path, sample_rate: u32, samples: &[f64]) -> AudioResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| {
        AudioError::synthesis(format!("failed to create '{}': {}", path.display(), e))
    })?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        writer.write_sample(value).map_err(|e| {
            AudioError::synthesis(format!("failed to write '{}': {}", path.display(), e))
        })?;
    }
    writer.finalize().map_err(|e| {
        AudioError::synthesis(format!("failed to finalize '{}': {}", path.display(), e))
    })?;
    Ok(())
}
