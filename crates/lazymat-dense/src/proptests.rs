//! Property-based tests for lazy expressions and materialization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::assign::{AssignConfig, sum_into};
    use crate::dense_matrix::DenseMatrix;
    use crate::expr::Expression;

    // Strategy for a shape and three same-shape integer buffers
    fn operands() -> impl Strategy<Value = (usize, usize, Vec<i64>, Vec<i64>, Vec<i64>)> {
        (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(-1000i64..1000, n),
                prop::collection::vec(-1000i64..1000, n),
                prop::collection::vec(-1000i64..1000, n),
            )
        })
    }

    // Strategy for a shape and two same-shape float buffers
    fn float_operands() -> impl Strategy<Value = (usize, usize, Vec<f32>, Vec<f64>)> {
        (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(-1.0e3f32..1.0e3, n),
                prop::collection::vec(-1.0e3f64..1.0e3, n),
            )
        })
    }

    proptest! {
        #[test]
        fn sum_is_elementwise((rows, cols, a, b, _) in operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let mut r = DenseMatrix::zeros(rows, cols);
            r.assign(&a + &b);
            for i in 0..rows * cols {
                prop_assert_eq!(r[i], a[i] + b[i]);
            }
        }

        #[test]
        fn chain_equals_two_passes((rows, cols, a, b, c) in operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let c = DenseMatrix::from_vec(rows, cols, c).unwrap();

            let mut fused = DenseMatrix::zeros(rows, cols);
            fused.assign(&a + &b + &c);

            let mut tmp = DenseMatrix::zeros(rows, cols);
            tmp.assign(&a + &b);
            let mut two_pass = DenseMatrix::zeros(rows, cols);
            two_pass.assign(&tmp + &c);

            prop_assert_eq!(fused, two_pass);
        }

        #[test]
        fn strategies_agree((rows, cols, a, b, c) in operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let c = DenseMatrix::from_vec(rows, cols, c).unwrap();

            let mut seq = DenseMatrix::zeros(rows, cols);
            seq.assign(&a * &b - &c);
            let mut unrolled = DenseMatrix::zeros(rows, cols);
            unrolled.assign_with(&a * &b - &c, &AssignConfig::unrolled());

            prop_assert_eq!(seq, unrolled);
        }

        #[test]
        fn forming_expression_does_not_mutate((rows, cols, a, b, _) in operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let (a0, b0) = (a.clone(), b.clone());
            let e = &a + &b;
            prop_assert_eq!(e.node_count(), 3);
            prop_assert_eq!(&a, &a0);
            prop_assert_eq!(&b, &b0);
        }

        #[test]
        fn assign_overwrites_everything((rows, cols, a, b, _) in operands(), sentinel in any::<i64>()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let mut r = DenseMatrix::zeros(rows, cols);
            r.fill(sentinel);
            r.assign(&a - &b);
            for i in 0..rows * cols {
                prop_assert_eq!(r[i], a[i] - b[i]);
            }
        }

        #[test]
        fn hand_fused_matches_expression((rows, cols, a, b, c) in operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let c = DenseMatrix::from_vec(rows, cols, c).unwrap();

            let mut expr = DenseMatrix::zeros(rows, cols);
            expr.assign(&a + &b + &c);
            let mut hand = DenseMatrix::zeros(rows, cols);
            sum_into(&mut hand, &[&a, &b, &c]).unwrap();

            prop_assert_eq!(expr, hand);
        }

        #[test]
        fn promotion_widens_before_operating((rows, cols, a, b) in float_operands()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let mut r: DenseMatrix<f64> = DenseMatrix::zeros(rows, cols);
            r.assign(&a + &b);
            for i in 0..rows * cols {
                prop_assert_eq!(r[i], f64::from(a[i]) + b[i]);
            }
        }

        #[test]
        fn eval_is_idempotent((rows, cols, a, b, c) in operands(), pick in any::<prop::sample::Index>()) {
            let a = DenseMatrix::from_vec(rows, cols, a).unwrap();
            let b = DenseMatrix::from_vec(rows, cols, b).unwrap();
            let c = DenseMatrix::from_vec(rows, cols, c).unwrap();
            let e = &a * &b + &c;
            let i = pick.index(rows * cols);
            let first = e.eval(i);
            prop_assert_eq!(e.eval(i), first);
            prop_assert_eq!(e.eval(i), first);
        }
    }
}
