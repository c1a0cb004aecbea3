//! Intensity statistics over defined frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{max, mean, median, min, population_std};
use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, IntensityCurve};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

const DECIMALS: usize = 3;

/// Level statistics in dB over the curve's defined frames.
///
/// All fields are `None` when every frame is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityStats {
    pub intensity_median: Option<Measure>,
    pub intensity_mean: Option<Measure>,
    pub intensity_std: Option<Measure>,
    pub intensity_min: Option<Measure>,
    pub intensity_max: Option<Measure>,
}

impl IntensityStats {
    fn absent() -> Self {
        Self {
            intensity_median: None,
            intensity_mean: None,
            intensity_std: None,
            intensity_min: None,
            intensity_max: None,
        }
    }

    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("intensity_median", render_opt(self.intensity_median, DECIMALS)),
            ("intensity_mean", render_opt(self.intensity_mean, DECIMALS)),
            ("intensity_std", render_opt(self.intensity_std, DECIMALS)),
            ("intensity_min", render_opt(self.intensity_min, DECIMALS)),
            ("intensity_max", render_opt(self.intensity_max, DECIMALS)),
        ]
    }
}

/// Compute intensity statistics from a resolved curve.
pub fn intensity_statistics(curve: &IntensityCurve) -> IntensityStats {
    let values: Vec<f64> = curve.defined_values().collect();
    if values.is_empty() {
        debug!("intensity curve has no defined frames, reporting absence");
        return IntensityStats::absent();
    }

    IntensityStats {
        intensity_median: Some(Measure::db(median(&values))),
        intensity_mean: Some(Measure::db(mean(&values))),
        intensity_std: Some(Measure::db(population_std(&values))),
        intensity_min: Some(Measure::db(min(&values))),
        intensity_max: Some(Measure::db(max(&values))),
    }
}

/// Resolve an intensity curve from the given inputs and compute its
/// statistics.
pub fn measure_intensity<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<IntensityStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    Ok(intensity_statistics(resolver.intensity()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Unit;
    use crate::testing::FakeEngine;

    #[test]
    fn test_undefined_frames_excluded() {
        let curve = IntensityCurve::new(0.01, vec![60.0, f64::NAN, 62.0]);
        let stats = intensity_statistics(&curve);
        assert_eq!(stats.intensity_mean.unwrap().value, 61.0);
        assert_eq!(stats.intensity_min.unwrap().value, 60.0);
        assert_eq!(stats.intensity_max.unwrap().value, 62.0);
        assert_eq!(stats.intensity_mean.unwrap().unit, Unit::Decibels);
    }

    #[test]
    fn test_all_undefined_is_absent() {
        let curve = IntensityCurve::new(0.01, vec![f64::NAN, f64::NAN]);
        let stats = intensity_statistics(&curve);
        assert!(stats.intensity_median.is_none());
        assert!(stats.intensity_mean.is_none());
        assert!(stats.intensity_std.is_none());
        assert!(stats.intensity_min.is_none());
        assert!(stats.intensity_max.is_none());
    }

    #[test]
    fn test_formatted_fields_render_decibels() {
        let curve = IntensityCurve::new(0.01, vec![81.8327]);
        let stats = intensity_statistics(&curve);
        let fields = stats.formatted_fields();
        let mean = fields.iter().find(|(n, _)| *n == "intensity_mean").unwrap();
        assert_eq!(mean.1.as_deref(), Some("81.833 dB"));
    }

    #[test]
    fn test_measure_intensity_with_supplied_curve_skips_engine() {
        let engine = FakeEngine::voiced();
        let curve = IntensityCurve::new(0.01, vec![60.0, 61.0]);
        let inputs = AnalysisInputs::new().with_intensity(curve);
        let stats =
            measure_intensity(&engine, inputs, &AnalysisConfig::default()).unwrap();
        assert_eq!(stats.intensity_mean.unwrap().value, 60.5);
        assert_eq!(engine.calls.intensity.get(), 0);
        assert_eq!(engine.calls.load.get(), 0);
    }
}
