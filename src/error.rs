//! Error types for layout computation.

use thiserror::Error;

/// Errors that can occur when validating content or computing a layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The canvas cannot give every column at least one cell.
    #[error("canvas width {available} cannot fit {columns} columns at one cell each")]
    InsufficientWidth {
        /// Number of columns in the table.
        columns: usize,
        /// Usable canvas width in cells.
        available: usize,
    },

    /// The content declares zero columns.
    #[error("content has no columns")]
    NoColumns,

    /// A row's cell count does not match the declared column count.
    #[error("row {row} has {got} cells, expected {expected}")]
    RowMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Cells actually present in the row.
        got: usize,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
