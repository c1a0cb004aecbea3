//! Scripted engine and signal builders shared across the test modules.

use std::cell::Cell;
use std::path::Path;

use crate::engine::{
    AcousticEngine, IntensityCurve, JitterKind, PeriodStat, PerturbationWindow, PitchFrame,
    PitchTrack, PulseTrain, ShimmerKind, Signal,
};
use crate::error::EngineError;

/// Per-operation call counters.
#[derive(Debug, Default, Clone)]
pub struct CallCounts {
    pub load: Cell<usize>,
    pub pitch: Cell<usize>,
    pub pulses: Cell<usize>,
    pub intensity: Cell<usize>,
    pub stats: Cell<usize>,
}

/// Deterministic scripted engine: canned derived objects and statistics,
/// with counters for every delegated operation.
#[derive(Debug, Clone)]
pub struct FakeEngine {
    pub frequencies: Vec<f64>,
    pub pulse_times: Vec<f64>,
    pub intensity_values: Vec<f64>,
    /// When set, every period/jitter/shimmer statistic is NaN.
    pub degenerate_stats: bool,
    /// When set, `load_signal` fails.
    pub fail_load: bool,
    pub calls: CallCounts,
}

impl FakeEngine {
    pub const MEAN_PERIOD: f64 = 0.0050364095;
    pub const STDEV_PERIOD: f64 = 0.0002104731;

    pub const JITTER_LOCAL: f64 = 0.01412;
    pub const JITTER_LOCAL_ABSOLUTE: f64 = 0.000081;
    pub const JITTER_RAP: f64 = 0.00701;
    pub const JITTER_PPQ5: f64 = 0.00825;
    pub const JITTER_DDP: f64 = 0.02103;

    pub const SHIMMER_LOCAL: f64 = 0.0834;
    pub const SHIMMER_LOCAL_DB: f64 = 0.721;
    pub const SHIMMER_APQ3: f64 = 0.0421;
    pub const SHIMMER_APQ5: f64 = 0.0534;
    pub const SHIMMER_APQ11: f64 = 0.0688;
    pub const SHIMMER_DDA: f64 = 0.1263;

    /// An engine scripted to behave like a short voiced recording.
    pub fn voiced() -> Self {
        Self {
            frequencies: vec![0.0, 110.0, 112.0, 115.0, 0.0, 118.0, 120.0, 0.0],
            pulse_times: vec![0.0, 0.01, 0.025, 0.04],
            intensity_values: vec![60.0, 61.5, f64::NAN, 63.0, 59.5],
            degenerate_stats: false,
            fail_load: false,
            calls: CallCounts::default(),
        }
    }

    /// An engine scripted to behave like silence: no voiced frames, no
    /// pulses, no defined intensity.
    pub fn silent() -> Self {
        Self {
            frequencies: vec![0.0; 8],
            pulse_times: vec![],
            intensity_values: vec![f64::NAN; 5],
            degenerate_stats: true,
            fail_load: false,
            calls: CallCounts::default(),
        }
    }

    /// A voiced engine whose perturbation statistics are all undefined.
    pub fn degenerate() -> Self {
        Self {
            degenerate_stats: true,
            ..Self::voiced()
        }
    }

    /// An engine whose signal loading fails.
    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::voiced()
        }
    }

    /// The one-second signal `load_signal` hands back.
    pub fn test_signal(&self) -> Signal {
        Signal::new(vec![0.0; 16000], 16000)
    }

    /// The pitch track `track_pitch` hands back, at default bounds.
    pub fn pitch_track(&self) -> PitchTrack {
        let frames = self
            .frequencies
            .iter()
            .enumerate()
            .map(|(i, &f)| PitchFrame::new(i as f64 * 0.01, f))
            .collect();
        PitchTrack::new(frames, 75.0, 500.0)
    }
}

impl AcousticEngine for FakeEngine {
    fn load_signal(&self, path: &Path) -> Result<Signal, EngineError> {
        self.calls.load.set(self.calls.load.get() + 1);
        if self.fail_load {
            return Err(EngineError::SignalLoad(format!("{path:?}: unreadable")));
        }
        Ok(self.test_signal())
    }

    fn track_pitch(
        &self,
        _signal: &Signal,
        floor_hz: f64,
        ceiling_hz: f64,
    ) -> Result<PitchTrack, EngineError> {
        self.calls.pitch.set(self.calls.pitch.get() + 1);
        let frames = self
            .frequencies
            .iter()
            .enumerate()
            .map(|(i, &f)| PitchFrame::new(i as f64 * 0.01, f))
            .collect();
        Ok(PitchTrack::new(frames, floor_hz, ceiling_hz))
    }

    fn derive_pulses(
        &self,
        _signal: &Signal,
        _pitch: &PitchTrack,
    ) -> Result<PulseTrain, EngineError> {
        self.calls.pulses.set(self.calls.pulses.get() + 1);
        Ok(PulseTrain::new(self.pulse_times.clone()))
    }

    fn derive_intensity(
        &self,
        _signal: &Signal,
        time_step: f64,
        _floor_hz: f64,
    ) -> Result<IntensityCurve, EngineError> {
        self.calls.intensity.set(self.calls.intensity.get() + 1);
        Ok(IntensityCurve::new(time_step, self.intensity_values.clone()))
    }

    fn period_stat(
        &self,
        _pulses: &PulseTrain,
        kind: PeriodStat,
        _window: &PerturbationWindow,
    ) -> Result<f64, EngineError> {
        self.calls.stats.set(self.calls.stats.get() + 1);
        if self.degenerate_stats {
            return Ok(f64::NAN);
        }
        Ok(match kind {
            PeriodStat::Mean => Self::MEAN_PERIOD,
            PeriodStat::Stdev => Self::STDEV_PERIOD,
        })
    }

    fn jitter_stat(
        &self,
        _pulses: &PulseTrain,
        kind: JitterKind,
        _window: &PerturbationWindow,
    ) -> Result<f64, EngineError> {
        self.calls.stats.set(self.calls.stats.get() + 1);
        if self.degenerate_stats {
            return Ok(f64::NAN);
        }
        Ok(match kind {
            JitterKind::Local => Self::JITTER_LOCAL,
            JitterKind::LocalAbsolute => Self::JITTER_LOCAL_ABSOLUTE,
            JitterKind::Rap => Self::JITTER_RAP,
            JitterKind::Ppq5 => Self::JITTER_PPQ5,
            JitterKind::Ddp => Self::JITTER_DDP,
        })
    }

    fn shimmer_stat(
        &self,
        _signal: &Signal,
        _pulses: &PulseTrain,
        kind: ShimmerKind,
        _window: &PerturbationWindow,
    ) -> Result<f64, EngineError> {
        self.calls.stats.set(self.calls.stats.get() + 1);
        if self.degenerate_stats {
            return Ok(f64::NAN);
        }
        Ok(match kind {
            ShimmerKind::Local => Self::SHIMMER_LOCAL,
            ShimmerKind::LocalDb => Self::SHIMMER_LOCAL_DB,
            ShimmerKind::Apq3 => Self::SHIMMER_APQ3,
            ShimmerKind::Apq5 => Self::SHIMMER_APQ5,
            ShimmerKind::Apq11 => Self::SHIMMER_APQ11,
            ShimmerKind::Dda => Self::SHIMMER_DDA,
        })
    }
}
