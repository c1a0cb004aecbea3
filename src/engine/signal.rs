//! Speech signal: decoded samples plus sample rate.

use hound::SampleFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::EngineError;

/// A decoded audio signal, immutable once constructed.
///
/// Samples are mono f32 in [-1, 1] at the file's native sample rate.
/// Multi-channel files are mixed down by averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Signal {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decode a WAV file at its native sample rate.
    ///
    /// Supports 16/24/32-bit integer and 32-bit float PCM. Fails with a
    /// signal-load error for missing, unreadable or unsupported files.
    pub fn from_wav_file(path: &Path) -> Result<Self, EngineError> {
        let mut reader = hound::WavReader::open(path)
            .map_err(|e| EngineError::SignalLoad(format!("{path:?}: {e}")))?;
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let interleaved: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| EngineError::SignalLoad(format!("{path:?}: {e}")))?,
            SampleFormat::Int => {
                // Normalize by the full scale of the declared bit depth.
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<_, _>>()
                    .map_err(|e| EngineError::SignalLoad(format!("{path:?}: {e}")))?
            }
        };

        let samples = if channels == 1 {
            interleaved
        } else {
            interleaved
                .chunks_exact(channels)
                .map(|frame| frame.iter().sum::<f32>() / channels as f32)
                .collect()
        };

        debug!(
            "loaded signal from {:?}: {} samples at {} Hz ({} channel(s))",
            path,
            samples.len(),
            spec.sample_rate,
            channels
        );

        Ok(Self::new(samples, spec.sample_rate))
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
