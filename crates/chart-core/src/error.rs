// File: crates/chart-core/src/error.rs
// Summary: Error types for chart generation and report export.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while scaling a series or rendering its chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Input data cannot be charted (empty series, non-finite values, unknown signal).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Series has a single point or a zero value range and the active policy rejects it.
    #[error("degenerate series '{name}': {reason}")]
    DegenerateSeries { name: String, reason: String },

    /// Canvas geometry or configuration leaves no drawable area.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while building or saving a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report has no signals")]
    NoSignals,
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("failed to parse config {path}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error(transparent)]
    Invalid(#[from] ChartError),
}
