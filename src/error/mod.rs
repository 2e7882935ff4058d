//! Error handling for the inflammation crate.

use std::io;
use std::path::PathBuf;

/// Errors raised by the statistics engine and the matrix loader
#[derive(Debug, thiserror::Error)]
pub enum InflammationError {
    /// A precondition on the input values was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input is not a rectangular numeric matrix
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A patient row index does not address an existing row
    #[error("Patient index {index} out of bounds for matrix with {rows} rows")]
    IndexOutOfBounds {
        /// Requested row
        index: usize,
        /// Number of rows in the matrix
        rows: usize,
    },

    /// A daily aggregate was requested over a matrix without patients
    #[error("Cannot compute daily statistics over a matrix with no patients")]
    EmptyMatrix,

    /// A delimited field could not be read as a number
    #[error("Parse error at line {line}, column {column}: '{value}' is not a number")]
    Parse {
        /// 1-based line in the source text
        line: usize,
        /// 1-based field position within the line
        column: usize,
        /// Offending field content
        value: String,
    },

    /// Error opening or reading a file
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl InflammationError {
    /// Create an IO error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a type mismatch error for a matrix whose rows differ in length
    #[must_use]
    pub fn ragged(row: usize, expected: usize, found: usize) -> Self {
        Self::TypeMismatch(format!(
            "Inflammation data should be a rectangular 2D matrix: row {row} has {found} values, expected {expected}"
        ))
    }
}

/// Result type for inflammation operations
pub type Result<T> = std::result::Result<T, InflammationError>;
