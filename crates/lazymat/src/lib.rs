//! # lazymat
//!
//! Expression-template style lazy arithmetic for dense matrices.
//!
//! Elementwise operators on borrowed matrices build a deferred expression
//! tree instead of allocating a temporary per operation. Assigning the tree
//! into a destination evaluates the whole chain in a single fused pass.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazymat::prelude::*;
//!
//! let a = DenseMatrix::from_fn(2, 2, |r, c| (r + c) as f32);
//! let b = DenseMatrix::from_fn(2, 2, |r, c| (r * c) as f32);
//!
//! let mut r = DenseMatrix::zeros(2, 2);
//! r.assign(&a + &b);
//! assert_eq!(r.as_slice(), &[0.0, 1.0, 1.0, 3.0]);
//! ```
//!
//! Mixed element types promote to their common type:
//!
//! ```rust
//! use lazymat::prelude::*;
//!
//! let a = DenseMatrix::from_fn(1, 2, |_, c| c as f32);
//! let b = DenseMatrix::from_fn(1, 2, |_, _| 0.5f64);
//!
//! let r: DenseMatrix<f64> = DenseMatrix::from_expr(&a + &b);
//! assert_eq!(r.as_slice(), &[0.5, 1.5]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lazymat_dense as dense;
pub use lazymat_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lazymat_dense::{
        AssignConfig, BinaryExpr, DenseMatrix, Expression, LoopStrategy, MatrixError, NegExpr,
        Shape, sum_into,
    };
    pub use lazymat_scalar::{Promote, Promoted, Scalar};
}
