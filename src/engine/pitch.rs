//! Pitch track: per-frame fundamental frequency.

use serde::{Deserialize, Serialize};

/// One analysis frame of the pitch track.
///
/// `frequency` is 0 exactly when the frame is unvoiced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchFrame {
    /// Time in seconds (center of the analysis window).
    pub time: f64,
    /// Fundamental frequency in Hz, 0 for unvoiced frames.
    pub frequency: f64,
}

impl PitchFrame {
    pub fn new(time: f64, frequency: f64) -> Self {
        Self { time, frequency }
    }

    pub fn voiced(&self) -> bool {
        self.frequency > 0.0
    }
}

/// A pitch contour derived from a signal, never mutated after creation.
///
/// The floor/ceiling bounds it was tracked with are baked in; tracks from
/// differing bounds must not be shared across analysis passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchTrack {
    frames: Vec<PitchFrame>,
    floor_hz: f64,
    ceiling_hz: f64,
}

impl PitchTrack {
    pub fn new(frames: Vec<PitchFrame>, floor_hz: f64, ceiling_hz: f64) -> Self {
        Self {
            frames,
            floor_hz,
            ceiling_hz,
        }
    }

    pub fn frames(&self) -> &[PitchFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn voiced_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.voiced()).count()
    }

    /// Frequencies of the voiced frames only.
    pub fn voiced_frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.frames
            .iter()
            .filter(|f| f.voiced())
            .map(|f| f.frequency)
    }

    pub fn floor_hz(&self) -> f64 {
        self.floor_hz
    }

    pub fn ceiling_hz(&self) -> f64 {
        self.ceiling_hz
    }
}
