//! Pulse train: detected glottal closure instants.

use serde::{Deserialize, Serialize};

/// Ordered sequence of glottal-pulse timestamps in seconds.
///
/// Timestamps are strictly increasing; the train may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseTrain {
    times: Vec<f64>,
}

impl PulseTrain {
    pub fn new(times: Vec<f64>) -> Self {
        debug_assert!(
            times.windows(2).all(|w| w[0] < w[1]),
            "pulse timestamps must be strictly increasing"
        );
        Self { times }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn pulse_count(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Pairwise differences of consecutive timestamps.
    ///
    /// Length is `pulse_count - 1`, or 0 with fewer than 2 pulses.
    pub fn periods(&self) -> Vec<f64> {
        self.times.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn period_count(&self) -> usize {
        self.times.len().saturating_sub(1)
    }
}
