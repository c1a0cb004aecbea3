//! Structured measurement values.
//!
//! Statistics records store plain numeric values tagged with a unit;
//! rendering to a fixed-precision string with a unit suffix is a
//! presentation concern handled here. Absence is expressed as
//! `Option::<Measure>::None`, never as zero or NaN.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit tag for a measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Hertz,
    Seconds,
    Decibels,
    Percent,
}

impl Unit {
    /// Suffix appended after the numeric value. Percent binds without a
    /// space, like "4.123%".
    fn suffix(&self) -> &'static str {
        match self {
            Self::Hertz => " Hz",
            Self::Seconds => " seconds",
            Self::Decibels => " dB",
            Self::Percent => "%",
        }
    }
}

/// A numeric measurement tagged with its unit.
///
/// Relative (ratio) measures are stored already scaled to percent, so the
/// stored value is what rendering prints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub unit: Unit,
}

impl Measure {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn hz(value: f64) -> Self {
        Self::new(value, Unit::Hertz)
    }

    pub fn seconds(value: f64) -> Self {
        Self::new(value, Unit::Seconds)
    }

    pub fn db(value: f64) -> Self {
        Self::new(value, Unit::Decibels)
    }

    /// Wrap a fraction as a percent measure (scales by 100).
    pub fn percent_of(fraction: f64) -> Self {
        Self::new(fraction * 100.0, Unit::Percent)
    }

    /// Render with a fixed number of decimals and the unit suffix.
    pub fn render(&self, decimals: usize) -> String {
        format!("{:.*}{}", decimals, self.value, self.unit.suffix())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(3))
    }
}

/// Render an optional measure, used by the formatted-report layer.
pub(crate) fn render_opt(measure: Option<Measure>, decimals: usize) -> Option<String> {
    measure.map(|m| m.render(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hz() {
        assert_eq!(Measure::hz(142.5372).render(3), "142.537 Hz");
    }

    #[test]
    fn test_render_period_precision() {
        assert_eq!(
            Measure::seconds(0.0050364095).render(10),
            "0.0050364095 seconds"
        );
    }

    #[test]
    fn test_render_percent_no_space() {
        assert_eq!(Measure::percent_of(0.041229).render(3), "4.123%");
    }

    #[test]
    fn test_render_decibels() {
        assert_eq!(Measure::db(81.8327).render(3), "81.833 dB");
    }

    #[test]
    fn test_display_uses_three_decimals() {
        assert_eq!(Measure::hz(200.0).to_string(), "200.000 Hz");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = Measure::db(12.5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Measure = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
