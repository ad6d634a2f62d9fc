//! Lazy elementwise expressions.
//!
//! Applying `+`, `-`, `*` or `/` to borrowed matrices does not compute
//! anything. It builds a [`BinaryExpr`] that holds its two operands and knows
//! how to produce the value at a flat index on demand. Nodes nest, so
//! `&a + &b + &c` is a two-level tree built without any heap allocation, and
//! evaluating it at index `i` computes `(a[i] + b[i]) + c[i]` directly.
//!
//! Work happens only when a tree is assigned into a destination matrix; see
//! [`DenseMatrix::assign`].
//!
//! ```
//! use lazymat_dense::DenseMatrix;
//!
//! let a = DenseMatrix::from_vec(1, 3, vec![1.0f64, 2.0, 3.0]).unwrap();
//! let b = DenseMatrix::from_vec(1, 3, vec![10.0f64, 20.0, 30.0]).unwrap();
//! let c = DenseMatrix::from_vec(1, 3, vec![100.0f64, 200.0, 300.0]).unwrap();
//!
//! let mut r = DenseMatrix::zeros(1, 3);
//! r.assign(&a + &b + &c);
//! assert_eq!(r.as_slice(), &[111.0, 222.0, 333.0]);
//! ```
//!
//! # Lifetimes
//!
//! Leaves are shared borrows, so a node can never outlive the matrices it
//! reads from:
//!
//! ```compile_fail
//! use lazymat_dense::DenseMatrix;
//!
//! let expr = {
//!     let a = DenseMatrix::<f64>::zeros(2, 2);
//!     let b = DenseMatrix::<f64>::zeros(2, 2);
//!     &a + &b
//! };
//! ```

use std::marker::PhantomData;
use std::ops::Neg;

use lazymat_scalar::{Promote, Promoted, Scalar};

use crate::dense_matrix::DenseMatrix;
use crate::error::MatrixError;
use crate::ops::{AddOp, BinaryOp, DivOp, MulOp, SubOp};
use crate::shape::Shape;

/// Anything that can be evaluated elementwise at a flat row-major index.
///
/// Borrowed matrices and expression nodes implement this trait; it is the
/// operand capability of every operator in the crate. All dispatch is
/// static: evaluating a nested tree inlines into a single arithmetic
/// expression.
pub trait Expression {
    /// Element type produced by [`eval`](Self::eval).
    type Elem: Scalar;

    /// Dimensions of the expression (those of its leftmost leaf).
    fn shape(&self) -> Shape;

    /// Computes the element at a flat index.
    ///
    /// Recomputed from the operands on every call.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for a leaf.
    fn eval(&self, index: usize) -> Self::Elem;

    /// Computes the element at a flat index without bounds checks.
    ///
    /// The default forwards to [`eval`](Self::eval).
    ///
    /// # Safety
    ///
    /// [`check_shape`](Self::check_shape) must have succeeded for some shape
    /// `s`, and `index < s.len()`.
    #[inline]
    unsafe fn eval_unchecked(&self, index: usize) -> Self::Elem {
        self.eval(index)
    }

    /// Verifies that every leaf has shape `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] naming the first leaf, in
    /// left-to-right order, whose shape differs.
    fn check_shape(&self, expected: Shape) -> Result<(), MatrixError> {
        expected.ensure_eq(self.shape())
    }

    /// Number of nodes in the tree, leaves included.
    fn node_count(&self) -> usize {
        1
    }
}

impl<T: Scalar> Expression for &DenseMatrix<T> {
    type Elem = T;

    #[inline]
    fn shape(&self) -> Shape {
        DenseMatrix::shape(self)
    }

    #[inline]
    fn eval(&self, index: usize) -> T {
        self[index]
    }

    #[inline(always)]
    unsafe fn eval_unchecked(&self, index: usize) -> T {
        // SAFETY: check_shape succeeded for `s` and index < s.len(), and this
        // matrix has shape `s`, so index < self.len().
        unsafe { *self.flat_unchecked(index) }
    }
}

/// A deferred elementwise binary operation `lhs OP rhs`.
///
/// Holds its operands by value; leaves are `&DenseMatrix` borrows and inner
/// nodes are themselves small `Copy` values, so building a tree never
/// allocates.
#[derive(Clone, Copy, Debug)]
pub struct BinaryExpr<L, R, Op> {
    lhs: L,
    rhs: R,
    op: PhantomData<Op>,
}

impl<L, R, Op> BinaryExpr<L, R, Op> {
    /// Creates a new node. No element is evaluated.
    #[inline]
    #[must_use]
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }

    /// Returns the left operand.
    #[must_use]
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Returns the right operand.
    #[must_use]
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<L, R, Op> Expression for BinaryExpr<L, R, Op>
where
    L: Expression,
    R: Expression,
    L::Elem: Promote<R::Elem>,
    Op: BinaryOp,
{
    type Elem = Promoted<L::Elem, R::Elem>;

    #[inline]
    fn shape(&self) -> Shape {
        self.lhs.shape()
    }

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        Op::apply(
            <L::Elem as Promote<R::Elem>>::promote_lhs(self.lhs.eval(index)),
            <L::Elem as Promote<R::Elem>>::promote_rhs(self.rhs.eval(index)),
        )
    }

    #[inline(always)]
    unsafe fn eval_unchecked(&self, index: usize) -> Self::Elem {
        // SAFETY: check_shape on this node checked both subtrees against the
        // same shape, so the caller's guarantee carries over to each operand.
        let (lhs, rhs) = unsafe { (self.lhs.eval_unchecked(index), self.rhs.eval_unchecked(index)) };
        Op::apply(
            <L::Elem as Promote<R::Elem>>::promote_lhs(lhs),
            <L::Elem as Promote<R::Elem>>::promote_rhs(rhs),
        )
    }

    fn check_shape(&self, expected: Shape) -> Result<(), MatrixError> {
        self.lhs.check_shape(expected)?;
        self.rhs.check_shape(expected)
    }

    fn node_count(&self) -> usize {
        1 + self.lhs.node_count() + self.rhs.node_count()
    }
}

/// A deferred elementwise negation `-inner`.
#[derive(Clone, Copy, Debug)]
pub struct NegExpr<E> {
    inner: E,
}

impl<E> NegExpr<E> {
    /// Creates a new node. No element is evaluated.
    #[inline]
    #[must_use]
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Returns the negated operand.
    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E> Expression for NegExpr<E>
where
    E: Expression,
    E::Elem: Neg<Output = E::Elem>,
{
    type Elem = E::Elem;

    #[inline]
    fn shape(&self) -> Shape {
        self.inner.shape()
    }

    #[inline]
    fn eval(&self, index: usize) -> Self::Elem {
        -self.inner.eval(index)
    }

    #[inline(always)]
    unsafe fn eval_unchecked(&self, index: usize) -> Self::Elem {
        // SAFETY: forwarded unchanged to the only operand.
        -unsafe { self.inner.eval_unchecked(index) }
    }

    fn check_shape(&self, expected: Shape) -> Result<(), MatrixError> {
        self.inner.check_shape(expected)
    }

    fn node_count(&self) -> usize {
        1 + self.inner.node_count()
    }
}

macro_rules! impl_binary_operators {
    ($($trait:ident, $method:ident => $op:ty);* $(;)?) => {
        $(
            impl<'a, T, Rhs> std::ops::$trait<Rhs> for &'a DenseMatrix<T>
            where
                T: Scalar + Promote<Rhs::Elem>,
                Rhs: Expression,
            {
                type Output = BinaryExpr<&'a DenseMatrix<T>, Rhs, $op>;

                #[inline]
                fn $method(self, rhs: Rhs) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }

            impl<L, R, Op, Rhs> std::ops::$trait<Rhs> for BinaryExpr<L, R, Op>
            where
                Self: Expression,
                <Self as Expression>::Elem: Promote<Rhs::Elem>,
                Rhs: Expression,
            {
                type Output = BinaryExpr<Self, Rhs, $op>;

                #[inline]
                fn $method(self, rhs: Rhs) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }

            impl<E, Rhs> std::ops::$trait<Rhs> for NegExpr<E>
            where
                Self: Expression,
                <Self as Expression>::Elem: Promote<Rhs::Elem>,
                Rhs: Expression,
            {
                type Output = BinaryExpr<Self, Rhs, $op>;

                #[inline]
                fn $method(self, rhs: Rhs) -> Self::Output {
                    BinaryExpr::new(self, rhs)
                }
            }
        )*
    };
}

impl_binary_operators! {
    Add, add => AddOp;
    Sub, sub => SubOp;
    Mul, mul => MulOp;
    Div, div => DivOp;
}

impl<'a, T> Neg for &'a DenseMatrix<T>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = NegExpr<&'a DenseMatrix<T>>;

    #[inline]
    fn neg(self) -> Self::Output {
        NegExpr::new(self)
    }
}

impl<L, R, Op> Neg for BinaryExpr<L, R, Op>
where
    Self: Expression,
    <Self as Expression>::Elem: Neg<Output = <Self as Expression>::Elem>,
{
    type Output = NegExpr<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        NegExpr::new(self)
    }
}

impl<E> Neg for NegExpr<E>
where
    Self: Expression,
    <Self as Expression>::Elem: Neg<Output = <Self as Expression>::Elem>,
{
    type Output = NegExpr<Self>;

    #[inline]
    fn neg(self) -> Self::Output {
        NegExpr::new(self)
    }
}
