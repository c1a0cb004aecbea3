//! Acoustic engine adapter.
//!
//! The low-level signal processing (pitch tracking, cross-correlation
//! pulse detection, perturbation formulas, intensity envelopes) lives in
//! an external DSP engine. This module is the thin typed facade over it:
//! the [`AcousticEngine`] trait enumerates the operations the analysis
//! pipeline consumes, and the data types here are the artifacts those
//! operations exchange.
//!
//! Dependency graph between the artifacts:
//!
//! ```text
//! Signal ──► PitchTrack ──► PulseTrain
//!   │
//!   └──────► IntensityCurve
//! ```
//!
//! Implementations own no pipeline state; per-call parameters arrive
//! explicitly so identical inputs always produce identical outputs.

pub mod intensity;
pub mod pitch;
pub mod pulses;
pub mod signal;

pub use intensity::IntensityCurve;
pub use pitch::{PitchFrame, PitchTrack};
pub use pulses::PulseTrain;
pub use signal::Signal;

use std::path::Path;

use crate::error::EngineError;

/// Windowed-period statistics the engine can compute over a pulse train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStat {
    Mean,
    Stdev,
}

/// Named jitter (period perturbation) measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JitterKind {
    /// Mean absolute period difference over mean period.
    Local,
    /// Mean absolute period difference, in seconds.
    LocalAbsolute,
    /// Relative average perturbation (3-point).
    Rap,
    /// Five-point period perturbation quotient.
    Ppq5,
    /// Difference of differences of periods (3 x RAP).
    Ddp,
}

/// Named shimmer (amplitude perturbation) measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimmerKind {
    /// Mean absolute amplitude difference over mean amplitude.
    Local,
    /// Local shimmer expressed in decibels.
    LocalDb,
    /// Three-point amplitude perturbation quotient.
    Apq3,
    /// Five-point amplitude perturbation quotient.
    Apq5,
    /// Eleven-point amplitude perturbation quotient.
    Apq11,
    /// Difference of differences of amplitudes (3 x APQ3).
    Dda,
}

/// Fixed analysis-window parameters for perturbation and period statistics.
///
/// The defaults are the parameters the pipeline supplies verbatim on every
/// call; reports are only reproducible if implementations honor them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationWindow {
    /// Analysis time range in seconds; (0, 0) means the whole train.
    pub window: (f64, f64),
    /// Shortest period considered valid, in seconds.
    pub period_floor: f64,
    /// Longest period considered valid, in seconds.
    pub period_ceiling: f64,
    /// Maximum ratio between consecutive periods.
    pub max_period_ratio: f64,
    /// Maximum ratio between consecutive amplitudes (shimmer only).
    pub max_amplitude_ratio: f64,
}

impl Default for PerturbationWindow {
    fn default() -> Self {
        Self {
            window: (0.0, 0.0),
            period_floor: 0.0001,
            period_ceiling: 0.02,
            max_period_ratio: 1.3,
            max_amplitude_ratio: 1.6,
        }
    }
}

/// Operations the analysis pipeline delegates to the external DSP engine.
///
/// Every method is synchronous and side-effect free: a long-running call
/// runs to completion or fails outright. Inputs, units and fixed
/// parameters are part of the contract — see [`PerturbationWindow`].
pub trait AcousticEngine {
    /// Decode an audio file at its native sample rate.
    ///
    /// The default implementation reads WAV via [`Signal::from_wav_file`];
    /// engines wrapping richer decoders can override it.
    fn load_signal(&self, path: &Path) -> Result<Signal, EngineError> {
        Signal::from_wav_file(path)
    }

    /// Track pitch over the signal within `[floor_hz, ceiling_hz]`.
    fn track_pitch(
        &self,
        signal: &Signal,
        floor_hz: f64,
        ceiling_hz: f64,
    ) -> Result<PitchTrack, EngineError>;

    /// Derive glottal pulses from the signal guided by its pitch track
    /// (cross-correlation method).
    fn derive_pulses(
        &self,
        signal: &Signal,
        pitch: &PitchTrack,
    ) -> Result<PulseTrain, EngineError>;

    /// Derive the intensity envelope at `time_step` with a pitch floor to
    /// suppress sub-harmonic artifacts.
    fn derive_intensity(
        &self,
        signal: &Signal,
        time_step: f64,
        floor_hz: f64,
    ) -> Result<IntensityCurve, EngineError>;

    /// Windowed mean or standard-deviation period, in seconds.
    fn period_stat(
        &self,
        pulses: &PulseTrain,
        kind: PeriodStat,
        window: &PerturbationWindow,
    ) -> Result<f64, EngineError>;

    /// A named jitter measure. Relative kinds return a fraction;
    /// [`JitterKind::LocalAbsolute`] returns seconds.
    fn jitter_stat(
        &self,
        pulses: &PulseTrain,
        kind: JitterKind,
        window: &PerturbationWindow,
    ) -> Result<f64, EngineError>;

    /// A named shimmer measure. Relative kinds return a fraction;
    /// [`ShimmerKind::LocalDb`] returns decibels.
    fn shimmer_stat(
        &self,
        signal: &Signal,
        pulses: &PulseTrain,
        kind: ShimmerKind,
        window: &PerturbationWindow,
    ) -> Result<f64, EngineError>;
}
