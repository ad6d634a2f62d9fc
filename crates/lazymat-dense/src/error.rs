//! Error types for dense matrices and expression materialization.

use thiserror::Error;

use crate::shape::Shape;

/// Errors reported by fallible matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An operand differs in shape from the one it is combined with.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Shape of the destination or of the first operand.
        expected: Shape,
        /// Shape of the offending operand.
        found: Shape,
    },

    /// `rows * cols` does not fit in `usize`.
    #[error("dimensions {rows}x{cols} overflow the addressable element count")]
    DimensionOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A buffer or expression does not hold as many elements as its target.
    #[error("element count mismatch: expected {expected} elements, found {found}")]
    LengthMismatch {
        /// Element count of the destination.
        expected: usize,
        /// Element count of the supplied buffer or expression.
        found: usize,
    },

    /// Rows of a nested input have different lengths.
    #[error("ragged input: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first row with a different length.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
}
