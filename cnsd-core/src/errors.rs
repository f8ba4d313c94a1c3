//! Error types for cnsd-core.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for CNSD operations.
#[derive(Debug, Error)]
pub enum CnsdError {
    /// A node index passed to a setter is not within `[0, nodes)`.
    #[error("index out of range: ({row}, {col}) in a {nodes}-node matrix")]
    IndexOutOfRange {
        /// Row (source node) that was requested.
        row: usize,
        /// Column (destination node) that was requested.
        col: usize,
        /// Node count of the matrix.
        nodes: usize,
    },

    /// A linear index cannot be mapped onto the matrix at all.
    #[error("linear index {index} out of range for a matrix with {cells} cells")]
    LinearIndexOutOfRange {
        /// Linear index that was requested.
        index: usize,
        /// Number of cells in the matrix.
        cells: usize,
    },

    /// The textual matrix source could not be opened.
    #[error("cannot open matrix source {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The textual matrix source is malformed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number within the source.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for CNSD operations.
pub type Result<T> = std::result::Result<T, CnsdError>;
