//! Matrix dimensions.

use std::fmt;

use crate::error::MatrixError;

/// Row and column counts of a dense matrix or expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Creates a new shape.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Creates a shape after checking that `rows * cols` is addressable.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOverflow`] if the element count
    /// overflows `usize`.
    pub fn checked(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        match rows.checked_mul(cols) {
            Some(_) => Ok(Self { rows, cols }),
            None => Err(MatrixError::DimensionOverflow { rows, cols }),
        }
    }

    /// Total number of elements.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Shapes built through
    /// [`Shape::checked`] or taken from a [`DenseMatrix`](crate::DenseMatrix)
    /// never do.
    #[must_use]
    pub const fn len(self) -> usize {
        match self.rows.checked_mul(self.cols) {
            Some(n) => n,
            None => panic!("shape element count overflows usize"),
        }
    }

    /// Returns true if the shape holds no elements.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Maps `(row, col)` to its row-major flat index.
    #[inline]
    #[must_use]
    pub const fn flat_index(self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns true if `(row, col)` lies inside the shape.
    #[inline]
    #[must_use]
    pub const fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Checks that `other` equals `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] with `self` as the expected
    /// shape.
    pub fn ensure_eq(self, other: Self) -> Result<(), MatrixError> {
        if self == other {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch {
                expected: self,
                found: other,
            })
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}
