//! Derived-object resolution.
//!
//! Every measure extractor consumes some subset of Signal, PitchTrack,
//! PulseTrain and IntensityCurve. Callers may supply any of these
//! precomputed; whatever is missing is derived from the nearest available
//! ancestor in the dependency graph, each artifact at most once per
//! resolver. This replaces per-extractor fallback chains with one shared
//! resolution path.
//!
//! Resolution priority per artifact: the supplied object itself (used
//! verbatim, never revalidated) > derivation from a supplied ancestor >
//! derivation from a raw audio path. A supplied pulse train is used
//! without requiring a pitch track; a supplied pitch track still needs a
//! signal before pulses can be derived from it.

use std::path::PathBuf;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, IntensityCurve, PitchTrack, PulseTrain, Signal};
use crate::error::AnalysisError;

/// Caller-supplied starting points for one analysis pass.
///
/// All fields are optional; resolution fails with
/// [`AnalysisError::MissingInput`] only when a requested artifact has no
/// sufficient ancestor among them.
#[derive(Debug, Default)]
pub struct AnalysisInputs {
    pub path: Option<PathBuf>,
    pub signal: Option<Signal>,
    pub pitch: Option<PitchTrack>,
    pub pulses: Option<PulseTrain>,
    pub intensity: Option<IntensityCurve>,
}

impl AnalysisInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an audio file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Start from an already-decoded signal.
    pub fn from_signal(signal: Signal) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }

    pub fn with_pitch(mut self, pitch: PitchTrack) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub fn with_pulses(mut self, pulses: PulseTrain) -> Self {
        self.pulses = Some(pulses);
        self
    }

    pub fn with_intensity(mut self, intensity: IntensityCurve) -> Self {
        self.intensity = Some(intensity);
        self
    }
}

/// The fully resolved artifact set, as produced by
/// [`Resolver::resolve_all`].
#[derive(Debug)]
pub struct DerivedObjects {
    pub signal: Signal,
    pub pitch: PitchTrack,
    pub pulses: PulseTrain,
    pub intensity: IntensityCurve,
}

/// Lazy, memoizing resolver over one engine and one configuration.
///
/// Pure function of its inputs apart from the engine calls it delegates.
pub struct Resolver<'e, E: AcousticEngine> {
    engine: &'e E,
    config: AnalysisConfig,
    path: Option<PathBuf>,
    signal: Option<Signal>,
    pitch: Option<PitchTrack>,
    pulses: Option<PulseTrain>,
    intensity: Option<IntensityCurve>,
}

impl<'e, E: AcousticEngine> Resolver<'e, E> {
    /// Validates the configuration up front; resolution itself happens on
    /// first access of each artifact.
    pub fn new(
        engine: &'e E,
        inputs: AnalysisInputs,
        config: &AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            engine,
            config: config.clone(),
            path: inputs.path,
            signal: inputs.signal,
            pitch: inputs.pitch,
            pulses: inputs.pulses,
            intensity: inputs.intensity,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The signal: supplied, or loaded once from the path.
    pub fn signal(&mut self) -> Result<&Signal, AnalysisError> {
        if self.signal.is_none() {
            let path = self.path.as_ref().ok_or_else(|| {
                AnalysisError::missing("signal", "an audio path or a decoded signal")
            })?;
            debug!("loading signal from {:?}", path);
            let signal = self
                .engine
                .load_signal(path)
                .map_err(|source| AnalysisError::SignalLoad {
                    path: path.clone(),
                    source,
                })?;
            self.signal = Some(signal);
        }
        Ok(self.signal.as_ref().unwrap())
    }

    /// The pitch track: supplied, or tracked once over the signal within
    /// the configured bounds.
    pub fn pitch(&mut self) -> Result<&PitchTrack, AnalysisError> {
        if self.pitch.is_none() {
            let engine = self.engine;
            let floor = self.config.min_pitch;
            let ceiling = self.config.max_pitch;
            let signal = self.signal()?;
            debug!("tracking pitch: floor={} Hz, ceiling={} Hz", floor, ceiling);
            let pitch = engine
                .track_pitch(signal, floor, ceiling)
                .map_err(|e| AnalysisError::engine("track_pitch", e))?;
            self.pitch = Some(pitch);
        }
        Ok(self.pitch.as_ref().unwrap())
    }

    /// The pulse train: supplied (no pitch required), or derived once
    /// from the signal and pitch track.
    pub fn pulses(&mut self) -> Result<&PulseTrain, AnalysisError> {
        if self.pulses.is_none() {
            let engine = self.engine;
            self.pitch()?;
            self.signal()?;
            let signal = self.signal.as_ref().unwrap();
            let pitch = self.pitch.as_ref().unwrap();
            debug!("deriving pulse train from signal and pitch track");
            let pulses = engine
                .derive_pulses(signal, pitch)
                .map_err(|e| AnalysisError::engine("derive_pulses", e))?;
            self.pulses = Some(pulses);
        }
        Ok(self.pulses.as_ref().unwrap())
    }

    /// The intensity curve: supplied, or derived once from the signal at
    /// the configured time step with the pitch floor.
    pub fn intensity(&mut self) -> Result<&IntensityCurve, AnalysisError> {
        if self.intensity.is_none() {
            let engine = self.engine;
            let time_step = self.config.time_step;
            let floor = self.config.min_pitch;
            let signal = self.signal()?;
            debug!(
                "deriving intensity curve: time_step={} s, floor={} Hz",
                time_step, floor
            );
            let intensity = engine
                .derive_intensity(signal, time_step, floor)
                .map_err(|e| AnalysisError::engine("derive_intensity", e))?;
            self.intensity = Some(intensity);
        }
        Ok(self.intensity.as_ref().unwrap())
    }

    /// Resolve signal, pitch and pulses and return them together, for
    /// extractors that consume several artifacts at once.
    pub fn signal_pitch_pulses(
        &mut self,
    ) -> Result<(&Signal, &PitchTrack, &PulseTrain), AnalysisError> {
        self.signal()?;
        self.pitch()?;
        self.pulses()?;
        Ok((
            self.signal.as_ref().unwrap(),
            self.pitch.as_ref().unwrap(),
            self.pulses.as_ref().unwrap(),
        ))
    }

    /// Resolve signal and pulses and return them together.
    pub fn signal_and_pulses(&mut self) -> Result<(&Signal, &PulseTrain), AnalysisError> {
        self.signal()?;
        self.pulses()?;
        Ok((
            self.signal.as_ref().unwrap(),
            self.pulses.as_ref().unwrap(),
        ))
    }

    /// Resolve every artifact and hand the set back as owned values.
    pub fn resolve_all(mut self) -> Result<DerivedObjects, AnalysisError> {
        self.signal()?;
        self.pitch()?;
        self.pulses()?;
        self.intensity()?;
        Ok(DerivedObjects {
            signal: self.signal.unwrap(),
            pitch: self.pitch.unwrap(),
            pulses: self.pulses.unwrap(),
            intensity: self.intensity.unwrap(),
        })
    }
}
