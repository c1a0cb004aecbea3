//! Pitch statistics over voiced frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{max, mean, median, min, population_std};
use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, PitchTrack};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

const DECIMALS: usize = 3;

/// Frequency statistics in Hz, voiced frames only.
///
/// All fields are `None` when the track has no voiced frames — silence is
/// a reportable outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchStats {
    pub median: Option<Measure>,
    pub mean: Option<Measure>,
    pub std: Option<Measure>,
    pub min: Option<Measure>,
    pub max: Option<Measure>,
}

impl PitchStats {
    fn absent() -> Self {
        Self {
            median: None,
            mean: None,
            std: None,
            min: None,
            max: None,
        }
    }

    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("median", render_opt(self.median, DECIMALS)),
            ("mean", render_opt(self.mean, DECIMALS)),
            ("std", render_opt(self.std, DECIMALS)),
            ("min", render_opt(self.min, DECIMALS)),
            ("max", render_opt(self.max, DECIMALS)),
        ]
    }
}

/// Compute pitch statistics from a resolved pitch track.
pub fn pitch_statistics(pitch: &PitchTrack) -> PitchStats {
    let voiced: Vec<f64> = pitch.voiced_frequencies().collect();
    if voiced.is_empty() {
        debug!("no voiced frames, reporting absent pitch statistics");
        return PitchStats::absent();
    }

    PitchStats {
        median: Some(Measure::hz(median(&voiced))),
        mean: Some(Measure::hz(mean(&voiced))),
        std: Some(Measure::hz(population_std(&voiced))),
        min: Some(Measure::hz(min(&voiced))),
        max: Some(Measure::hz(max(&voiced))),
    }
}

/// Resolve a pitch track from the given inputs and compute its statistics.
pub fn measure_pitch<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<PitchStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    Ok(pitch_statistics(resolver.pitch()?))
}
