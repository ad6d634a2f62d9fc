//! Materialization of expressions into dense matrices.
//!
//! Assigning an expression is the only point where elements are computed.
//! The destination's index range is walked once in increasing order and the
//! expression tree is evaluated at each index, so a chain of any length
//! costs one pass and no temporaries.
//!
//! Shapes are validated once, before the loop: every leaf must share the
//! expression's shape exactly, and the destination must hold the same number
//! of elements. The loop itself then uses the unchecked evaluators and
//! carries no per-element bounds checks.

use lazymat_scalar::Scalar;

use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;
use crate::expr::Expression;

/// Loop shape used to walk the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopStrategy {
    /// One index per iteration.
    #[default]
    Sequential,
    /// Eight consecutive indices per iteration, followed by a scalar tail.
    Unrolled8,
}

/// Configuration for expression materialization.
#[derive(Clone, Debug, Default)]
pub struct AssignConfig {
    /// How the destination index range is traversed.
    pub strategy: LoopStrategy,
}

impl AssignConfig {
    /// Configuration using the unrolled loop.
    #[must_use]
    pub fn unrolled() -> Self {
        Self {
            strategy: LoopStrategy::Unrolled8,
        }
    }
}

const LANES: usize = 8;

impl<T: Scalar> DenseMatrix<T> {
    /// Evaluates `expr` at every index and overwrites `self` with the result.
    ///
    /// Returns `self` so assignments can be chained.
    ///
    /// `self` cannot appear inside `expr`; the borrow checker rejects the
    /// aliasing read-then-write:
    ///
    /// ```compile_fail
    /// use lazymat_dense::DenseMatrix;
    ///
    /// let mut r = DenseMatrix::<f64>::zeros(2, 2);
    /// let b = DenseMatrix::<f64>::zeros(2, 2);
    /// r.assign(&r + &b);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the leaves of `expr` do not all share one shape, or if
    /// `self` holds a different number of elements than `expr`.
    pub fn assign<E>(&mut self, expr: E) -> &mut Self
    where
        E: Expression<Elem = T>,
    {
        self.assign_with(expr, &AssignConfig::default())
    }

    /// Like [`assign`](Self::assign), with an explicit loop configuration.
    ///
    /// # Panics
    ///
    /// Same conditions as [`assign`](Self::assign).
    pub fn assign_with<E>(&mut self, expr: E, config: &AssignConfig) -> &mut Self
    where
        E: Expression<Elem = T>,
    {
        match self.try_assign_with(expr, config) {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`assign`](Self::assign), reporting shape mismatches as errors.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the leaves of `expr` do not
    /// all share one shape, and [`MatrixError::LengthMismatch`] if `self`
    /// holds a different number of elements than `expr`. The destination is
    /// left untouched in both cases.
    pub fn try_assign<E>(&mut self, expr: E) -> Result<&mut Self, MatrixError>
    where
        E: Expression<Elem = T>,
    {
        self.try_assign_with(expr, &AssignConfig::default())
    }

    /// Fallible assignment with an explicit loop configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the leaves of `expr` do not
    /// all share one shape, and [`MatrixError::LengthMismatch`] if `self`
    /// holds a different number of elements than `expr`. The destination is
    /// left untouched in both cases.
    pub fn try_assign_with<E>(
        &mut self,
        expr: E,
        config: &AssignConfig,
    ) -> Result<&mut Self, MatrixError>
    where
        E: Expression<Elem = T>,
    {
        let shape = expr.shape();
        expr.check_shape(shape)?;
        if self.len() != shape.len() {
            return Err(MatrixError::LengthMismatch {
                expected: self.len(),
                found: shape.len(),
            });
        }

        tracing::trace!(
            %shape,
            elem = T::NAME,
            nodes = expr.node_count(),
            strategy = ?config.strategy,
            "materializing expression"
        );

        let dst = self.as_mut_slice();
        match config.strategy {
            LoopStrategy::Sequential => materialize_sequential(dst, &expr),
            LoopStrategy::Unrolled8 => materialize_unrolled(dst, &expr),
        }
        Ok(self)
    }

    /// Allocates a matrix shaped like `expr` and assigns `expr` into it.
    ///
    /// # Panics
    ///
    /// Panics if the leaves of `expr` do not all share one shape.
    #[must_use]
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: Expression<Elem = T>,
    {
        match Self::try_from_expr(expr) {
            Ok(m) => m,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible version of [`from_expr`](Self::from_expr).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the leaves of `expr` do not
    /// all share one shape.
    pub fn try_from_expr<E>(expr: E) -> Result<Self, MatrixError>
    where
        E: Expression<Elem = T>,
    {
        let shape = expr.shape();
        let mut m = Self::zeros(shape.rows, shape.cols);
        m.try_assign(expr)?;
        Ok(m)
    }
}

/// Writes `expr` into `dst`, one index per iteration.
///
/// `expr` must have passed `check_shape` against its own shape, and that
/// shape must hold `dst.len()` elements.
#[inline]
fn materialize_sequential<T, E>(dst: &mut [T], expr: &E)
where
    T: Scalar,
    E: Expression<Elem = T>,
{
    for (index, slot) in dst.iter_mut().enumerate() {
        // SAFETY: every leaf has dst.len() elements and index < dst.len().
        *slot = unsafe { expr.eval_unchecked(index) };
    }
}

/// Writes `expr` into `dst`, eight indices per iteration.
///
/// Same precondition as [`materialize_sequential`]. Indices are still
/// visited in increasing order.
#[inline]
fn materialize_unrolled<T, E>(dst: &mut [T], expr: &E)
where
    T: Scalar,
    E: Expression<Elem = T>,
{
    let mut chunks = dst.chunks_exact_mut(LANES);
    let mut base = 0;
    for chunk in &mut chunks {
        for (lane, slot) in chunk.iter_mut().enumerate() {
            // SAFETY: base + lane < dst.len(), see materialize_sequential.
            *slot = unsafe { expr.eval_unchecked(base + lane) };
        }
        base += LANES;
    }
    for (lane, slot) in chunks.into_remainder().iter_mut().enumerate() {
        // SAFETY: the tail starts at `base` and ends at dst.len().
        *slot = unsafe { expr.eval_unchecked(base + lane) };
    }
}

/// Writes the elementwise sum of `sources` into `dest` in a single pass.
///
/// This is the hand-fused counterpart of `dest.assign(&a + &b + ...)` for
/// operands that share one element type. An empty `sources` zeroes `dest`.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if any source differs in shape
/// from `dest`. The destination is left untouched.
pub fn sum_into<T: Scalar>(
    dest: &mut DenseMatrix<T>,
    sources: &[&DenseMatrix<T>],
) -> Result<(), MatrixError> {
    let shape = dest.shape();
    for source in sources {
        shape.ensure_eq(source.shape())?;
    }

    tracing::trace!(%shape, sources = sources.len(), "fused sum");

    for (index, slot) in dest.as_mut_slice().iter_mut().enumerate() {
        *slot = sources
            .iter()
            .fold(T::zero(), |acc, source| acc + source.as_slice()[index]);
    }
    Ok(())
}
