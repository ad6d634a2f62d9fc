//! # lazymat-dense
//!
//! Dense matrices with lazily evaluated elementwise expressions.
//!
//! This crate provides:
//! - [`DenseMatrix`]: an owning, row-major, fixed-shape numeric buffer
//! - [`Expression`]: the operand capability shared by borrowed matrices and
//!   expression nodes
//! - [`BinaryExpr`] / [`NegExpr`]: deferred elementwise operations built by
//!   `+`, `-`, `*`, `/` and unary `-` on `&DenseMatrix` and on other nodes
//! - Materialization through [`DenseMatrix::assign`], which fuses a whole
//!   expression tree into one pass over the destination
//!
//! ## Evaluation Model
//!
//! ```text
//! &a + &b + &c   ──build──▶  BinaryExpr(BinaryExpr(&a, &b), &c)   (no work)
//! r.assign(expr) ──eval───▶  for i in 0..len: r[i] = (a[i] + b[i]) + c[i]
//! ```
//!
//! Operand element types are promoted to their common type (see
//! [`lazymat_scalar::Promote`]); the destination must hold that type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assign;
pub mod dense_matrix;
pub mod error;
pub mod expr;
pub mod ops;
pub mod shape;

pub use assign::{AssignConfig, LoopStrategy, sum_into};
pub use dense_matrix::DenseMatrix;
pub use error::MatrixError;
pub use expr::{BinaryExpr, Expression, NegExpr};
pub use ops::{AddOp, BinaryOp, DivOp, MulOp, SubOp};
pub use shape::Shape;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
