//! Voicing continuity and voice-break detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, PitchTrack, PulseTrain, Signal};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

const DECIMALS: usize = 3;

/// An inter-pulse interval longer than this is a break in phonation: a
/// silence longer than a single missed glottal cycle at the slowest
/// trackable pitch, independent of the speaker's absolute pitch.
pub fn voice_break_threshold(min_pitch: f64) -> f64 {
    1.25 / min_pitch
}

/// Unvoiced-frame fraction and voice-break statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoicingStats {
    /// Percentage of frames that are unvoiced; `None` when the pitch
    /// track has no frames at all.
    pub unvoiced_fraction: Option<Measure>,
    /// Count of inter-pulse intervals exceeding the break threshold.
    pub num_voice_breaks: usize,
    /// Total break duration as a percentage of signal duration; `None`
    /// when the signal duration is zero.
    pub degree_voice_breaks: Option<Measure>,
}

impl VoicingStats {
    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            (
                "unvoiced_fraction",
                render_opt(self.unvoiced_fraction, DECIMALS),
            ),
            ("num_voice_breaks", Some(self.num_voice_breaks.to_string())),
            (
                "degree_voice_breaks",
                render_opt(self.degree_voice_breaks, DECIMALS),
            ),
        ]
    }
}

/// Compute voicing statistics from resolved objects.
///
/// Zero or one pulse yields no intervals, hence zero breaks and a 0%
/// degree as long as the signal duration is known.
pub fn voicing_statistics(
    pitch: &PitchTrack,
    pulses: &PulseTrain,
    signal: &Signal,
    min_pitch: f64,
) -> VoicingStats {
    let total_frames = pitch.frame_count();
    let unvoiced_fraction = if total_frames > 0 {
        let voiced = pitch.voiced_frame_count() as f64;
        Some(Measure::percent_of(1.0 - voiced / total_frames as f64))
    } else {
        debug!("pitch track has no frames, unvoiced fraction undefined");
        None
    };

    let threshold = voice_break_threshold(min_pitch);
    let intervals = pulses.periods();
    let num_voice_breaks = intervals.iter().filter(|&&i| i > threshold).count();
    let total_break_duration: f64 = intervals.iter().filter(|&&i| i > threshold).sum();

    let duration = signal.duration();
    let degree_voice_breaks = if duration > 0.0 {
        Some(Measure::percent_of(total_break_duration / duration))
    } else {
        debug!("signal duration is zero, degree of voice breaks undefined");
        None
    };

    VoicingStats {
        unvoiced_fraction,
        num_voice_breaks,
        degree_voice_breaks,
    }
}

/// Resolve pitch, pulses and signal from the given inputs and compute the
/// voicing statistics.
pub fn measure_voicing<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<VoicingStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    let (signal, pitch, pulses) = resolver.signal_pitch_pulses()?;
    Ok(voicing_statistics(pitch, pulses, signal, config.min_pitch))
}
