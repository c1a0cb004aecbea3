//! Voice-quality measurement extraction and report assembly.
//!
//! This crate turns a recorded speech signal into a composite report of
//! voice-quality measures: pitch statistics, pulse/period statistics,
//! voicing continuity and voice breaks, jitter, shimmer, and intensity.
//! The heavy signal processing (pitch tracking, pulse detection,
//! perturbation formulas, intensity envelopes) is delegated to an
//! external DSP engine behind the [`AcousticEngine`] trait; this crate
//! owns everything around it:
//!
//! ```text
//!                  caller
//!                    |
//!                    v
//!             voice_report()  ───────────────► VoiceReport
//!                    |                              ▲
//!                    v                              |
//!               Resolver ◄── AnalysisInputs    six extractors
//!             (derive once,  (precomputed      (pure functions of
//!              reuse everywhere)  objects)      derived objects)
//!                    |
//!                    v
//!              AcousticEngine (external DSP)
//! ```
//!
//! Callers may hand the resolver any subset of precomputed derived
//! objects (signal, pitch track, pulse train, intensity curve); whatever
//! is missing is derived from the nearest available ancestor, each
//! artifact at most once per pass. Categories that find no usable data
//! (an unvoiced recording, a single pulse) report explicit absence
//! values instead of failing, so "silent input" and "invalid input" stay
//! distinguishable.
//!
//! Extractors can also run standalone against already-resolved objects:
//!
//! ```
//! use voice_metrics::{pitch_statistics, PitchFrame, PitchTrack};
//!
//! let track = PitchTrack::new(
//!     vec![
//!         PitchFrame::new(0.00, 0.0),   // unvoiced
//!         PitchFrame::new(0.01, 121.3),
//!         PitchFrame::new(0.02, 119.8),
//!     ],
//!     75.0,
//!     500.0,
//! );
//!
//! let stats = pitch_statistics(&track);
//! assert_eq!(stats.min.unwrap().render(3), "119.800 Hz");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod measures;
pub mod report;
pub mod resolver;
pub mod spectral;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AnalysisConfig;
pub use engine::{
    AcousticEngine, IntensityCurve, JitterKind, PeriodStat, PerturbationWindow, PitchFrame,
    PitchTrack, PulseTrain, ShimmerKind, Signal,
};
pub use error::{AnalysisError, EngineError};
pub use measure::{Measure, Unit};
pub use measures::{
    intensity_statistics, jitter_statistics, measure_intensity, measure_jitter, measure_pitch,
    measure_pulses, measure_shimmer, measure_voicing, pitch_statistics, pulse_statistics,
    shimmer_statistics, voice_break_threshold, voicing_statistics, IntensityStats, JitterStats,
    PitchStats, PulseStats, ShimmerStats, VoicingStats,
};
pub use report::{voice_report, SignalSource, VoiceReport};
pub use resolver::{AnalysisInputs, DerivedObjects, Resolver};
pub use spectral::{centroid_statistics, CentroidStats};
