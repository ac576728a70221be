//! Error types shared across the clustering library

use thiserror::Error;

/// Errors produced while loading data or running a clustering algorithm.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// No input points were available; clustering cannot proceed.
    #[error("dataset is empty, nothing to cluster")]
    EmptyDataset,

    /// A configuration value was out of range for the chosen algorithm.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An unknown distance metric name was supplied.
    #[error("unsupported distance metric {0:?} (expected \"euclidean\" or \"manhattan\")")]
    UnsupportedMetric(String),

    /// An unknown linkage name was supplied.
    #[error("unsupported linkage {0:?} (expected \"single\" or \"complete\")")]
    UnsupportedLinkage(String),

    /// Two feature vectors of different lengths were compared.
    #[error("feature vectors have mismatched lengths ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// A data row contained a field that does not parse as a number.
    #[error("malformed input on line {line}: {value:?} is not numeric")]
    MalformedInput { line: usize, value: String },

    /// The input file could not be read as CSV.
    #[error("failed to read dataset")]
    Io(#[from] csv::Error),
}

/// Result type used by the clustering core.
pub type Result<T> = std::result::Result<T, ClusterError>;
