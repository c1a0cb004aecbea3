//! Measure extractors.
//!
//! Six independent units, each a pure function of already-resolved
//! derived objects:
//!
//! - **Pitch** — frequency statistics over voiced frames
//! - **Pulses** — pulse/period counts and windowed period statistics
//! - **Voicing** — unvoiced fraction and voice-break detection
//! - **Jitter** — period perturbation measures (engine-delegated)
//! - **Shimmer** — amplitude perturbation measures (engine-delegated)
//! - **Intensity** — level statistics over defined frames
//!
//! Each module also exposes a `measure_*` entry that accepts
//! [`AnalysisInputs`](crate::resolver::AnalysisInputs) and resolves just
//! the objects that extractor needs, for callers that want one category
//! without building a whole report.
//!
//! "No usable data" (silence, too few pulses) is a valid outcome: the
//! affected fields become `None`, never an error and never zero.

pub mod intensity;
pub mod jitter;
pub mod pitch;
pub mod pulses;
pub mod shimmer;
pub mod voicing;

pub use intensity::{intensity_statistics, measure_intensity, IntensityStats};
pub use jitter::{jitter_statistics, measure_jitter, JitterStats};
pub use pitch::{measure_pitch, pitch_statistics, PitchStats};
pub use pulses::{measure_pulses, pulse_statistics, PulseStats};
pub use shimmer::{measure_shimmer, shimmer_statistics, ShimmerStats};
pub use voicing::{measure_voicing, voice_break_threshold, voicing_statistics, VoicingStats};

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; the average of the two middle values for even lengths.
pub(crate) fn median(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation (divisor N, not N-1).
pub(crate) fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub(crate) fn min(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
