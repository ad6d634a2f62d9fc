//! Elementwise binary operators.
//!
//! Each operator is a zero-sized marker type implementing [`BinaryOp`].
//! Expression nodes carry the marker as a type parameter, so the operator
//! applied at every index is resolved at compile time.

use lazymat_scalar::Scalar;

/// An elementwise binary operator.
pub trait BinaryOp: Copy + Default + std::fmt::Debug {
    /// Applies the operator to two elements of the common type.
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T;
}

/// Elementwise addition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddOp;

/// Elementwise subtraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubOp;

/// Elementwise (Hadamard) multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MulOp;

/// Elementwise division.
///
/// Integer division by zero panics, like the primitive operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DivOp;

impl BinaryOp for AddOp {
    #[inline(always)]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl BinaryOp for SubOp {
    #[inline(always)]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

impl BinaryOp for MulOp {
    #[inline(always)]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

impl BinaryOp for DivOp {
    #[inline(always)]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs / rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(AddOp::apply(2, 3), 5);
        assert_eq!(SubOp::apply(2.5f64, 0.5), 2.0);
        assert_eq!(MulOp::apply(4u8, 3), 12);
        assert_eq!(DivOp::apply(7i32, 2), 3);
    }
}
