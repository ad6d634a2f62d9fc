//! Element traits.
//!
//! This module defines the numeric element abstraction shared by containers
//! and expression nodes.

use std::fmt::Debug;

use num_traits::{Num, NumCast};

/// A numeric element that can be stored in a dense matrix.
///
/// Elements are plain `Copy` values: evaluating an expression node at an
/// index produces a fresh scalar and never hands out references into the
/// operands.
///
/// # Laws
///
/// - `Self::zero()` is the value a freshly constructed container holds
/// - `+`, `-`, `*`, `/` are the primitive operators of the underlying type
pub trait Scalar: Num + NumCast + Copy + PartialOrd + Debug + Default + Send + Sync + 'static {
    /// Short type name, recorded when an expression is materialized.
    const NAME: &'static str;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const NAME: &'static str = stringify!($t);
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
