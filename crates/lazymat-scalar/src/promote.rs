//! Common element type of two scalars.
//!
//! A binary expression over operands with element types `A` and `B`
//! produces elements of type `<A as Promote<B>>::Output`. The conversion
//! follows the usual arithmetic conversions: mixing `f32` and `f64` yields
//! `f64`, mixing an integer with a float yields the float, and mixing two
//! integers yields the wider one.
//!
//! Integer operands of the same type are not widened further (`i8 + i8`
//! stays `i8`), and conversions from 64-bit integers into floats may round,
//! exactly as an `as` cast does.

use crate::traits::Scalar;

/// Computes the common element type of `Self` and `Rhs`.
///
/// Implemented symmetrically: whenever `A: Promote<B>` exists,
/// `B: Promote<A>` exists with the same `Output`.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The common element type.
    type Output: Scalar;

    /// Converts the left operand into the common type.
    fn promote_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right operand into the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for the common element type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline(always)]
                fn promote_lhs(self) -> $t {
                    self
                }

                #[inline(always)]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

macro_rules! promote_pair {
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline(always)]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline(always)]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn promote_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;

                #[inline(always)]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn promote_lhs(self) -> $out {
                    self as $out
                }

                #[inline(always)]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn promote_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote_identity!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// Floats
promote_pair! {
    f32, f64 => f64;
}

// Integers with floats
promote_pair! {
    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
}

// Signed widening
promote_pair! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;
}

// Unsigned widening
promote_pair! {
    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;
}

// Unsigned into strictly wider signed
promote_pair! {
    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u16, i32 => i32;
    u16, i64 => i64;
    u32, i64 => i64;
}
