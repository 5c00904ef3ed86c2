//! Error types for the rowcast crate.

use thiserror::Error;

/// Errors that can occur while encoding records to CSV.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The dynamic-path input is not a sequence of records.
    #[error("cannot encode {kind} input, expected a sequence of records")]
    UnsupportedInput {
        /// The kind of value that was passed instead.
        kind: &'static str,
    },

    /// The first element of a dynamic-path sequence is not a record.
    #[error("cannot encode a slice of {kind}s")]
    UnsupportedElement {
        /// The kind of the offending element.
        kind: &'static str,
    },

    /// A custom cell conversion hook failed.
    #[error("cannot render column '{column}': {source}")]
    Cell {
        /// The field whose conversion failed.
        column: &'static str,
        /// The error returned by the [`ToCell`](crate::ToCell) hook.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// CSV formatting or writing failed.
    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing or flushing the destination stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Converting input to an intermediate value failed (serde bridge).
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for rowcast operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
