//! Error types for catalog conversion.

use thiserror::Error;

/// Errors that can occur while reading a catalog or writing a table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure, including input that is not valid UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A data line did not carry the minimum number of `^`-separated fields.
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// 1-based line number in the catalog.
        line: usize,
        /// Fields actually present on the line.
        found: usize,
        /// Minimum field count for a data line.
        expected: usize,
    },
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
