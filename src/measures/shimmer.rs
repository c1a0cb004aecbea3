//! Shimmer (amplitude perturbation) statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::engine::{AcousticEngine, PerturbationWindow, PulseTrain, ShimmerKind, Signal};
use crate::error::AnalysisError;
use crate::measure::{render_opt, Measure};
use crate::resolver::{AnalysisInputs, Resolver};

const DECIMALS: usize = 3;

/// The six engine-computed shimmer measures.
///
/// The amplitude-perturbation calculation needs both the waveform and the
/// pulse timing, so the extractor consumes Signal and PulseTrain jointly.
/// Relative measures are stored as percentages; `shimmer_local_db` is in
/// decibels. Non-finite engine results are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShimmerStats {
    pub shimmer_local: Option<Measure>,
    pub shimmer_local_db: Option<Measure>,
    pub shimmer_apq3: Option<Measure>,
    pub shimmer_apq5: Option<Measure>,
    pub shimmer_apq11: Option<Measure>,
    pub shimmer_dda: Option<Measure>,
}

impl ShimmerStats {
    pub(crate) fn formatted_fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("shimmer_local", render_opt(self.shimmer_local, DECIMALS)),
            ("shimmer_local_dB", render_opt(self.shimmer_local_db, DECIMALS)),
            ("shimmer_apq3", render_opt(self.shimmer_apq3, DECIMALS)),
            ("shimmer_apq5", render_opt(self.shimmer_apq5, DECIMALS)),
            ("shimmer_apq11", render_opt(self.shimmer_apq11, DECIMALS)),
            ("shimmer_dda", render_opt(self.shimmer_dda, DECIMALS)),
        ]
    }
}

/// Compute shimmer statistics from a resolved signal and pulse train.
pub fn shimmer_statistics<E: AcousticEngine>(
    engine: &E,
    signal: &Signal,
    pulses: &PulseTrain,
) -> Result<ShimmerStats, AnalysisError> {
    let window = PerturbationWindow::default();
    let relative = |kind: ShimmerKind| -> Result<Option<Measure>, AnalysisError> {
        let value = engine
            .shimmer_stat(signal, pulses, kind, &window)
            .map_err(|e| AnalysisError::engine("shimmer_stat", e))?;
        if !value.is_finite() {
            debug!("shimmer {:?} undefined, reporting absence", kind);
            return Ok(None);
        }
        Ok(Some(Measure::percent_of(value)))
    };

    let local_db = engine
        .shimmer_stat(signal, pulses, ShimmerKind::LocalDb, &window)
        .map_err(|e| AnalysisError::engine("shimmer_stat", e))?;

    Ok(ShimmerStats {
        shimmer_local: relative(ShimmerKind::Local)?,
        shimmer_local_db: local_db.is_finite().then(|| Measure::db(local_db)),
        shimmer_apq3: relative(ShimmerKind::Apq3)?,
        shimmer_apq5: relative(ShimmerKind::Apq5)?,
        shimmer_apq11: relative(ShimmerKind::Apq11)?,
        shimmer_dda: relative(ShimmerKind::Dda)?,
    })
}

/// Resolve a signal and pulse train from the given inputs and compute the
/// shimmer statistics.
pub fn measure_shimmer<E: AcousticEngine>(
    engine: &E,
    inputs: AnalysisInputs,
    config: &AnalysisConfig,
) -> Result<ShimmerStats, AnalysisError> {
    let mut resolver = Resolver::new(engine, inputs, config)?;
    let (signal, pulses) = resolver.signal_and_pulses()?;
    shimmer_statistics(engine, signal, pulses)
}
