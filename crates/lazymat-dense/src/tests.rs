//! Integration tests for lazymat-dense.

#[cfg(test)]
mod integration_tests {
    use crate::assign::{AssignConfig, sum_into};
    use crate::dense_matrix::DenseMatrix;
    use crate::expr::Expression;
    use crate::shape::Shape;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Fills three operands the way the benchmarks do:
    /// `a = row + col`, `b = row * col`, `c = row - col`.
    fn bench_operands(rows: usize, cols: usize) -> [DenseMatrix<f32>; 3] {
        #[allow(clippy::cast_precision_loss)]
        let f = |v: isize| v as f32;
        [
            DenseMatrix::from_fn(rows, cols, |r, c| f(r as isize + c as isize)),
            DenseMatrix::from_fn(rows, cols, |r, c| f(r as isize * c as isize)),
            DenseMatrix::from_fn(rows, cols, |r, c| f(r as isize - c as isize)),
        ]
    }

    #[test]
    fn test_two_by_two_scenario() {
        init_tracing();
        let [a, b, _] = bench_operands(2, 2);
        let mut r = DenseMatrix::zeros(2, 2);
        r.assign(&a + &b);
        assert_eq!(r.as_slice(), &[0.0, 1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_three_chain_scenario() {
        init_tracing();
        let a = DenseMatrix::from_vec(1, 3, vec![1i32, 2, 3]).unwrap();
        let b = DenseMatrix::from_vec(1, 3, vec![10i32, 20, 30]).unwrap();
        let c = DenseMatrix::from_vec(1, 3, vec![100i32, 200, 300]).unwrap();
        let mut r = DenseMatrix::zeros(1, 3);
        r.assign(&a + &b + &c);
        assert_eq!(r.as_slice(), &[111, 222, 333]);
    }

    #[test]
    fn test_fused_matches_eager_and_hand_fused() {
        init_tracing();
        let [a, b, c] = bench_operands(17, 23);

        let mut fused = DenseMatrix::zeros(17, 23);
        fused.assign(&a + &b + &c);

        let eager = a.add_eager(&b).add_eager(&c);

        let mut two_pass = DenseMatrix::zeros(17, 23);
        let mut tmp = DenseMatrix::zeros(17, 23);
        tmp.assign(&a + &b);
        two_pass.assign(&tmp + &c);

        let mut hand = DenseMatrix::zeros(17, 23);
        sum_into(&mut hand, &[&a, &b, &c]).unwrap();

        // All four accumulate left to right, so they agree exactly.
        assert_eq!(fused, eager);
        assert_eq!(fused, two_pass);
        assert_eq!(fused, hand);
    }

    #[test]
    fn test_long_chain() {
        let ones = DenseMatrix::from_fn(4, 4, |_, _| 1u64);
        let mut r = DenseMatrix::zeros(4, 4);
        r.assign(&ones + &ones + &ones + &ones + &ones + &ones + &ones + &ones);
        assert!(r.iter().all(|&v| v == 8));
    }

    #[test]
    fn test_mixed_precision_chain() {
        let a = DenseMatrix::from_fn(2, 3, |r, c| (r * 3 + c) as f32 * 0.1);
        let b = DenseMatrix::from_fn(2, 3, |r, c| (r * 3 + c) as f64 * 0.01);
        let c = DenseMatrix::from_fn(2, 3, |_, _| 1i32);

        let mut r: DenseMatrix<f64> = DenseMatrix::zeros(2, 3);
        r.assign(&a + &b + &c);
        for i in 0..6 {
            let expected = (f64::from(a[i]) + b[i]) + f64::from(c[i]);
            assert_eq!(r[i], expected);
        }
    }

    #[test]
    fn test_rows_and_flat_agree_after_assign() {
        let [a, b, c] = bench_operands(3, 4);
        let mut r = DenseMatrix::zeros(3, 4);
        r.assign_with(&a - &b * &c, &AssignConfig::unrolled());
        for row in 0..3 {
            for col in 0..4 {
                let i = Shape::new(3, 4).flat_index(row, col);
                assert_eq!(r[(row, col)], r[i]);
                assert_eq!(r[(row, col)], a[i] - b[i] * c[i]);
            }
        }
    }

    #[test]
    fn test_reassign_reuses_destination() {
        let [a, b, c] = bench_operands(5, 5);
        let mut r = DenseMatrix::zeros(5, 5);
        let before = r.as_slice().as_ptr();
        r.assign(&a + &b).assign(&b + &c);
        assert_eq!(r.as_slice().as_ptr(), before);
        assert_eq!(r, b.add_eager(&c));
    }

    #[test]
    fn test_expression_shape_follows_leftmost_leaf() {
        let a: DenseMatrix<f32> = DenseMatrix::zeros(2, 5);
        let b: DenseMatrix<f32> = DenseMatrix::zeros(5, 2);
        let e = &a + &b;
        assert_eq!(e.shape(), Shape::new(2, 5));
        assert!(e.check_shape(Shape::new(2, 5)).is_err());
    }
}
