//! Composite voice report assembly.
//!
//! One resolver pass per call: Signal, PitchTrack, PulseTrain and
//! IntensityCurve are derived once and shared across all six extractors.
//! Resolution errors abort the whole call; after a successful resolution,
//! a category with no usable data degrades to absence values instead of
//! failing the report.
//!
//! A Harmonicity (HNR) category is a known gap: the upstream engine can
//! produce a harmonicity curve, but no statistics for it are defined
//! here, so the report deliberately omits the category rather than guess
//! at a formula.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, Signal};
use crate::error::AnalysisError;
use crate::measures::{
    intensity_statistics, jitter_statistics, pitch_statistics, pulse_statistics,
    shimmer_statistics, voicing_statistics, IntensityStats, JitterStats, PitchStats, PulseStats,
    ShimmerStats, VoicingStats,
};
use crate::resolver::{AnalysisInputs, Resolver};

/// Where the speech signal comes from.
#[derive(Debug, Clone)]
pub enum SignalSource {
    /// Load from an audio file at its native sample rate.
    Path(PathBuf),
    /// Use an already-decoded signal.
    Signal(Signal),
}

impl SignalSource {
    fn into_inputs(self) -> AnalysisInputs {
        match self {
            Self::Path(path) => AnalysisInputs::from_path(path),
            Self::Signal(signal) => AnalysisInputs::from_signal(signal),
        }
    }
}

impl From<PathBuf> for SignalSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for SignalSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<Signal> for SignalSource {
    fn from(signal: Signal) -> Self {
        Self::Signal(signal)
    }
}

/// The composite report: one statistics record per measure category.
///
/// Immutable once assembled; `formatted()` gives the
/// category → field → rendered-value mapping and `Display` a
/// human-readable block with `--` for absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReport {
    pub pitch: PitchStats,
    pub pulses: PulseStats,
    pub voicing: VoicingStats,
    pub jitter: JitterStats,
    pub shimmer: ShimmerStats,
    pub intensity: IntensityStats,
}

impl VoiceReport {
    /// Categories in report order with their rendered fields.
    fn categories(&self) -> Vec<(&'static str, Vec<(&'static str, Option<String>)>)> {
        vec![
            ("Pitch", self.pitch.formatted_fields()),
            ("Pulses", self.pulses.formatted_fields()),
            ("Voicing", self.voicing.formatted_fields()),
            ("Jitter", self.jitter.formatted_fields()),
            ("Shimmer", self.shimmer.formatted_fields()),
            ("Intensity", self.intensity.formatted_fields()),
        ]
    }

    /// Mapping of category name to field name to formatted value.
    /// Absent measures stay `None`.
    pub fn formatted(&self) -> BTreeMap<&'static str, BTreeMap<&'static str, Option<String>>> {
        self.categories()
            .into_iter()
            .map(|(category, fields)| (category, fields.into_iter().collect()))
            .collect()
    }
}

impl fmt::Display for VoiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, fields) in self.categories() {
            writeln!(f, "{category}")?;
            for (name, value) in fields {
                writeln!(f, "  {name}: {}", value.as_deref().unwrap_or("--"))?;
            }
        }
        Ok(())
    }
}

/// Build a composite voice report from a signal source.
///
/// Performs exactly one resolution pass, then invokes each extractor once
/// with the shared derived objects. No partial results: a failing signal
/// load or derivation fails the whole call.
pub fn voice_report<E: AcousticEngine>(
    engine: &E,
    source: impl Into<SignalSource>,
    config: &AnalysisConfig,
) -> Result<VoiceReport, AnalysisError> {
    let resolver = Resolver::new(engine, source.into().into_inputs(), config)?;
    let derived = resolver.resolve_all()?;
    debug!(
        "derived objects resolved: {} pitch frames, {} pulses, {} intensity frames",
        derived.pitch.frame_count(),
        derived.pulses.pulse_count(),
        derived.intensity.values().len()
    );

    Ok(VoiceReport {
        pitch: pitch_statistics(&derived.pitch),
        pulses: pulse_statistics(engine, &derived.pulses)?,
        voicing: voicing_statistics(
            &derived.pitch,
            &derived.pulses,
            &derived.signal,
            config.min_pitch,
        ),
        jitter: jitter_statistics(engine, &derived.pulses)?,
        shimmer: shimmer_statistics(engine, &derived.signal, &derived.pulses)?,
        intensity: intensity_statistics(&derived.intensity),
    })
}
