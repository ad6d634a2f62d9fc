//! Property-based tests for scalar promotion.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Promote, Promoted};

    proptest! {
        #[test]
        fn widening_ints_preserve_value(a in any::<i16>(), b in any::<i32>()) {
            let wide_a: Promoted<i16, i32> = <i16 as Promote<i32>>::promote_lhs(a);
            let wide_b: Promoted<i16, i32> = <i16 as Promote<i32>>::promote_rhs(b);
            prop_assert_eq!(wide_a, i32::from(a));
            prop_assert_eq!(wide_b, b);
        }

        #[test]
        fn unsigned_into_signed_preserves_value(a in any::<u32>()) {
            let wide = <u32 as Promote<i64>>::promote_lhs(a);
            prop_assert!(wide >= 0);
            prop_assert_eq!(wide, i64::from(a));
        }

        #[test]
        fn f32_into_f64_is_exact(a in -1.0e30f32..1.0e30f32) {
            let wide = <f32 as Promote<f64>>::promote_lhs(a);
            prop_assert_eq!(wide, f64::from(a));
            #[allow(clippy::cast_possible_truncation)]
            let back = wide as f32;
            prop_assert_eq!(back, a);
        }

        #[test]
        fn promotion_is_order_independent(a in any::<u8>(), b in any::<i16>()) {
            let left = <u8 as Promote<i16>>::promote_lhs(a) + <u8 as Promote<i16>>::promote_rhs(b).signum();
            let right = <i16 as Promote<u8>>::promote_rhs(a) + <i16 as Promote<u8>>::promote_lhs(b).signum();
            prop_assert_eq!(left, right);
        }
    }
}
