//! Intensity curve: per-frame amplitude in decibels.

use serde::{Deserialize, Serialize};

/// Amplitude-in-dB samples at a fixed time step.
///
/// Frames where the engine could not estimate intensity are NaN and must
/// be excluded from statistics; `defined_values` does the filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensityCurve {
    time_step: f64,
    values: Vec<f64>,
}

impl IntensityCurve {
    pub fn new(time_step: f64, values: Vec<f64>) -> Self {
        Self { time_step, values }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// All frame values, undefined frames included (as NaN).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Frame values with undefined (non-finite) samples dropped.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_values_drops_nan() {
        let curve = IntensityCurve::new(0.01, vec![60.0, f64::NAN, 62.0, f64::NAN]);
        let defined: Vec<f64> = curve.defined_values().collect();
        assert_eq!(defined, vec![60.0, 62.0]);
    }

    #[test]
    fn test_all_undefined() {
        let curve = IntensityCurve::new(0.01, vec![f64::NAN, f64::NAN]);
        assert_eq!(curve.defined_values().count(), 0);
        assert_eq!(curve.values().len(), 2);
    }
}
