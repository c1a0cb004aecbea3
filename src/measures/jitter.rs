//! Jitter (period perturbation) statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, JitterKind, PerturbationWindow, PulseTrain};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

const PERCENT_DECIMALS: usize = 3;
const ABSOLUTE_DECIMALS: usize = 6;

/// The five engine-computed jitter measures.
///
/// Relative measures are stored as percentages; the absolute measure is
/// in seconds. A measure the engine could not compute (non-finite result,
/// typically too few usable periods) is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JitterStats {
    pub jitter_local: Option<Measure>,
    pub jitter_local_absolute: Option<Measure>,
    pub jitter_rap: Option<Measure>,
    pub jitter_ppq5: Option<Measure>,
    pub jitter_ddp: Option<Measure>,
}

impl JitterStats {
    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("jitter_local", render_opt(self.jitter_local, PERCENT_DECIMALS)),
            (
                "jitter_local_absolute",
                render_opt(self.jitter_local_absolute, ABSOLUTE_DECIMALS),
            ),
            ("jitter_rap", render_opt(self.jitter_rap, PERCENT_DECIMALS)),
            ("jitter_ppq5", render_opt(self.jitter_ppq5, PERCENT_DECIMALS)),
            ("jitter_ddp", render_opt(self.jitter_ddp, PERCENT_DECIMALS)),
        ]
    }
}

/// Compute jitter statistics from a resolved pulse train.
pub fn jitter_statistics<E: AcousticEngine>(
    engine: &E,
    pulses: &PulseTrain,
) -> Result<JitterStats, AnalysisError> {
    let window = PerturbationWindow::default();
    let relative = |kind: JitterKind| -> Result<Option<Measure>, AnalysisError> {
        let value = engine
            .jitter_stat(pulses, kind, &window)
            .map_err(|e| AnalysisError::engine("jitter_stat", e))?;
        if !value.is_finite() {
            debug!("jitter {:?} undefined, reporting absence", kind);
            return Ok(None);
        }
        Ok(Some(Measure::percent_of(value)))
    };

    let absolute = engine
        .jitter_stat(pulses, JitterKind::LocalAbsolute, &window)
        .map_err(|e| AnalysisError::engine("jitter_stat", e))?;

    Ok(JitterStats {
        jitter_local: relative(JitterKind::Local)?,
        jitter_local_absolute: absolute.is_finite().then(|| Measure::seconds(absolute)),
        jitter_rap: relative(JitterKind::Rap)?,
        jitter_ppq5: relative(JitterKind::Ppq5)?,
        jitter_ddp: relative(JitterKind::Ddp)?,
    })
}

/// Resolve a pulse train from the given inputs and compute its jitter
/// statistics.
pub fn measure_jitter<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<JitterStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    jitter_statistics(engine, resolver.pulses()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Unit;
    use crate::testing::FakeEngine;

    fn train() -> PulseTrain {
        PulseTrain::new(vec![0.0, 0.01, 0.02, 0.03])
    }

    #[test]
    fn test_relative_measures_scaled_to_percent() {
        let engine = FakeEngine::voiced();
        let stats = jitter_statistics(&engine, &train()).unwrap();

        let local = stats.jitter_local.unwrap();
        assert_eq!(local.unit, Unit::Percent);
        assert!((local.value - FakeEngine::JITTER_LOCAL * 100.0).abs() < 1e-12);

        let ddp = stats.jitter_ddp.unwrap();
        assert!((ddp.value - FakeEngine::JITTER_DDP * 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_absolute_measure_in_seconds() {
        let engine = FakeEngine::voiced();
        let stats = jitter_statistics(&engine, &train()).unwrap();
        let abs = stats.jitter_local_absolute.unwrap();
        assert_eq!(abs.unit, Unit::Seconds);
        assert_eq!(abs.value, FakeEngine::JITTER_LOCAL_ABSOLUTE);
    }

    #[test]
    fn test_formatting_precisions() {
        let engine = FakeEngine::voiced();
        let stats = jitter_statistics(&engine, &train()).unwrap();
        let fields = stats.formatted_fields();

        let local = fields.iter().find(|(n, _)| *n == "jitter_local").unwrap();
        assert_eq!(local.1.as_deref(), Some("1.412%"));

        let abs = fields
            .iter()
            .find(|(n, _)| *n == "jitter_local_absolute")
            .unwrap();
        assert_eq!(abs.1.as_deref(), Some("0.000081 seconds"));
    }

    #[test]
    fn test_non_finite_results_degrade_to_absence() {
        let engine = FakeEngine::degenerate();
        let stats = jitter_statistics(&engine, &train()).unwrap();
        assert!(stats.jitter_local.is_none());
        assert!(stats.jitter_local_absolute.is_none());
        assert!(stats.jitter_rap.is_none());
        assert!(stats.jitter_ppq5.is_none());
        assert!(stats.jitter_ddp.is_none());
    }

    #[test]
    fn test_measure_jitter_missing_everything() {
        let engine = FakeEngine::voiced();
        let result = measure_jitter(&engine, AnalysisInputs::new(), &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::MissingInput { .. })));
    }
}
