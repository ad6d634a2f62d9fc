//! Dense matrix storage.
//!
//! A [`DenseMatrix`] owns a contiguous row-major buffer. It is the only
//! owning type in the crate: expression nodes borrow matrices and are
//! evaluated back into one through [`DenseMatrix::assign`].

use std::ops::{Index, IndexMut};

use lazymat_scalar::Scalar;

use crate::error::MatrixError;
use crate::shape::Shape;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `num_rows * num_cols` overflows `usize`.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        match Self::try_zeros(num_rows, num_cols) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a new matrix filled with zeros, reporting overflowing
    /// dimensions instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOverflow`] if `num_rows * num_cols`
    /// overflows `usize`.
    pub fn try_zeros(num_rows: usize, num_cols: usize) -> Result<Self, MatrixError> {
        let shape = Shape::checked(num_rows, num_cols)?;
        Ok(Self {
            data: vec![T::zero(); shape.len()],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Ok(Self::zeros(0, 0));
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != num_cols)
        {
            return Err(MatrixError::RaggedRows {
                row,
                expected: num_cols,
                found,
            });
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionOverflow`] for unaddressable
    /// dimensions and [`MatrixError::LengthMismatch`] if `data` does not
    /// hold exactly `num_rows * num_cols` elements.
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let shape = Shape::checked(num_rows, num_cols)?;
        if data.len() != shape.len() {
            return Err(MatrixError::LengthMismatch {
                expected: shape.len(),
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix whose entry at `(row, col)` is `f(row, col)`.
    ///
    /// Entries are produced in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `num_rows * num_cols` overflows `usize`.
    #[must_use]
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut m = Self::zeros(num_rows, num_cols);
        for row in 0..num_rows {
            for col in 0..num_cols {
                m.data[row * num_cols + col] = f(row, col);
            }
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the dimensions.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.num_rows, self.num_cols)
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        let shape = self.shape();
        if shape.contains(row, col) {
            Some(&self.data[shape.flat_index(row, col)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let shape = self.shape();
        if shape.contains(row, col) {
            Some(&mut self.data[shape.flat_index(row, col)])
        } else {
            None
        }
    }

    /// Returns a reference to the entry at (row, col) without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `row < self.num_rows()` and `col < self.num_cols()` must hold.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(self.shape().contains(row, col));
        // SAFETY: the caller guarantees (row, col) is in bounds, so the flat
        // index is below rows * cols == data.len().
        unsafe { self.data.get_unchecked(row * self.num_cols + col) }
    }

    /// Returns a mutable reference to the entry at (row, col) without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `row < self.num_rows()` and `col < self.num_cols()` must hold.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(self.shape().contains(row, col));
        // SAFETY: see `get_unchecked`.
        unsafe { self.data.get_unchecked_mut(row * self.num_cols + col) }
    }

    /// Returns a reference to the entry at a flat row-major index without
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()` must hold.
    #[inline]
    #[must_use]
    pub unsafe fn flat_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len());
        // SAFETY: the caller guarantees index < data.len().
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the entry at a flat row-major index
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// `index < self.len()` must hold.
    #[inline]
    pub unsafe fn flat_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.data.len());
        // SAFETY: the caller guarantees index < data.len().
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.num_rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.num_rows, "row {row} out of range for {}", self.shape());
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.num_rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.num_rows, "row {row} out of range for {}", self.shape());
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the entries in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the entries in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Overwrites every entry with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Eager elementwise addition: allocates and returns `self + other`.
    ///
    /// Every call allocates a fresh result, so a chain of `n` additions
    /// allocates `n` temporaries. Prefer `&a + &b` with
    /// [`assign`](Self::assign) to fuse the chain into one pass.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    #[must_use]
    pub fn add_eager(&self, other: &Self) -> Self {
        assert_eq!(self.num_rows, other.num_rows);
        assert_eq!(self.num_cols, other.num_cols);

        tracing::debug!(shape = %self.shape(), "allocating eager sum");

        Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let shape = self.shape();
        assert!(
            shape.contains(row, col),
            "index ({row}, {col}) out of range for {shape}"
        );
        &self.data[shape.flat_index(row, col)]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let shape = self.shape();
        assert!(
            shape.contains(row, col),
            "index ({row}, {col}) out of range for {shape}"
        );
        &mut self.data[shape.flat_index(row, col)]
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DenseMatrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
