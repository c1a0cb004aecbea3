//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Parameters shared by every derivation in one analysis pass.
///
/// Derived objects bake these in at creation time (pitch bounds on the
/// track, time step on the intensity curve), so objects produced under
/// different configurations must never be mixed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum trackable pitch in Hz. Also the intensity floor and the
    /// basis of the voice-break threshold (`1.25 / min_pitch` seconds).
    pub min_pitch: f64,
    /// Maximum trackable pitch in Hz.
    pub max_pitch: f64,
    /// Time step in seconds for the intensity curve.
    pub time_step: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_pitch: 75.0,
            max_pitch: 500.0,
            time_step: 0.01,
        }
    }
}

impl AnalysisConfig {
    /// Check that the pitch bounds and time step are usable.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.min_pitch.is_finite() || self.min_pitch <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "min_pitch must be positive, got {}",
                self.min_pitch
            )));
        }
        if !self.max_pitch.is_finite() || self.max_pitch <= self.min_pitch {
            return Err(AnalysisError::InvalidConfig(format!(
                "max_pitch must exceed min_pitch ({} <= {})",
                self.max_pitch, self.min_pitch
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}
