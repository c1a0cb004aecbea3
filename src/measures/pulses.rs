//! Pulse and period statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, PeriodStat, PerturbationWindow, PulseTrain};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

/// Period statistics carry sub-millisecond structure, so they render with
/// more precision than the other measures.
const PERIOD_DECIMALS: usize = 10;

/// Pulse counts and windowed period statistics.
///
/// With fewer than two pulses there are no periods, and the period
/// statistics are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseStats {
    pub num_pulses: usize,
    pub num_periods: usize,
    pub mean_period: Option<Measure>,
    pub std_period: Option<Measure>,
}

impl PulseStats {
    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("num_pulses", Some(self.num_pulses.to_string())),
            ("num_periods", Some(self.num_periods.to_string())),
            ("mean_period", render_opt(self.mean_period, PERIOD_DECIMALS)),
            ("std_period", render_opt(self.std_period, PERIOD_DECIMALS)),
        ]
    }
}

/// Compute pulse statistics from a resolved pulse train, delegating the
/// windowed period statistics to the engine.
pub fn pulse_statistics<E: AcousticEngine>(
    engine: &E,
    pulses: &PulseTrain,
) -> Result<PulseStats, AnalysisError> {
    let num_pulses = pulses.pulse_count();
    let num_periods = pulses.period_count();

    if num_periods == 0 {
        debug!("fewer than two pulses, reporting absent period statistics");
        return Ok(PulseStats {
            num_pulses,
            num_periods,
            mean_period: None,
            std_period: None,
        });
    }

    let window = PerturbationWindow::default();
    let mean = engine
        .period_stat(pulses, PeriodStat::Mean, &window)
        .map_err(|e| AnalysisError::engine("period_stat(mean)", e))?;
    let stdev = engine
        .period_stat(pulses, PeriodStat::Stdev, &window)
        .map_err(|e| AnalysisError::engine("period_stat(stdev)", e))?;

    Ok(PulseStats {
        num_pulses,
        num_periods,
        mean_period: finite_seconds(mean),
        std_period: finite_seconds(stdev),
    })
}

fn finite_seconds(value: f64) -> Option<Measure> {
    value.is_finite().then(|| Measure::seconds(value))
}

/// Resolve a pulse train from the given inputs and compute its statistics.
pub fn measure_pulses<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<PulseStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    pulse_statistics(engine, resolver.pulses()?)
}
