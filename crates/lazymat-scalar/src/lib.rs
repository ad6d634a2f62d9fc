//! # lazymat-scalar
//!
//! Numeric element model for lazymat.
//!
//! This crate provides:
//! - The [`Scalar`] trait implemented by every element type a dense matrix
//!   may hold
//! - The [`Promote`] trait computing the common element type of two scalars,
//!   following the usual arithmetic conversions of systems languages
//!
//! ## Promotion Lattice
//!
//! ```text
//! f64
//!  └── f32
//!       ├── i64 ── i32 ── i16 ── i8
//!       │    \      \      \
//!       │     u32    u16    u8
//!       └── u64 ── u32 ── u16 ── u8
//! ```
//!
//! Any integer combined with a float promotes to that float. Two integers of
//! the same signedness promote to the wider one, and an unsigned integer
//! promotes into any strictly wider signed integer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod promote;
pub mod traits;

pub use promote::{Promote, Promoted};
pub use traits::Scalar;

#[cfg(test)]
mod proptests;
