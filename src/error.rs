//! Error types for voice analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the acoustic engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to load signal: {0}")]
    SignalLoad(String),

    #[error("computation failed: {0}")]
    Computation(String),
}

/// Errors that can abort an analysis call.
///
/// A category finding no usable data (e.g. zero voiced frames) is *not* an
/// error: it degrades that category's fields to absence values. These
/// variants cover the fatal cases only.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No supplied object is sufficient to derive a required artifact.
    #[error("cannot resolve {artifact}: {needed} must be provided")]
    MissingInput {
        artifact: &'static str,
        needed: &'static str,
    },

    /// The audio file is missing, unreadable or in an unsupported format.
    #[error("failed to load signal from {path:?}")]
    SignalLoad {
        path: PathBuf,
        #[source]
        source: EngineError,
    },

    /// The acoustic engine failed while computing a derived object or
    /// a named statistic.
    #[error("acoustic engine failed during {operation}")]
    Engine {
        operation: &'static str,
        #[source]
        source: EngineError,
    },

    /// Invalid analysis parameters (pitch bounds, time step).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AnalysisError {
    pub(crate) fn missing(artifact: &'static str, needed: &'static str) -> Self {
        Self::MissingInput { artifact, needed }
    }

    pub(crate) fn engine(operation: &'static str, source: EngineError) -> Self {
        Self::Engine { operation, source }
    }
}
