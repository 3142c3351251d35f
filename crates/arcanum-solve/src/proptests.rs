//! Property-based tests for secret reconstruction.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::point::{Point, PointSet};
    use crate::reconstruct::reconstruct_constant;
    use arcanum_integers::Integer;

    // Strategy for small integer coefficient vectors, constant term first
    fn coefficients() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-50i64..=50, 1..=6)
    }

    // Exact evaluation at integer x, no floating point involved
    fn sample(coeffs: &[i64], x: i64) -> Integer {
        let x = Integer::new(x);
        let mut y = Integer::zero();
        for &c in coeffs.iter().rev() {
            y = y * x.clone() + Integer::new(c);
        }
        y
    }

    fn sample_points(coeffs: &[i64], count: usize) -> PointSet {
        (1..=count as i64)
            .map(|x| Point::new(x, sample(coeffs, x)))
            .collect()
    }

    proptest! {
        #[test]
        fn round_trips_the_constant_term(coeffs in coefficients()) {
            let k = coeffs.len();
            let points = sample_points(&coeffs, k);

            let constant = reconstruct_constant(&points, k).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let truth = coeffs[0] as f64;
            prop_assert!(
                (constant - truth).abs() < 1e-6,
                "expected {truth}, reconstructed {constant}"
            );
        }

        #[test]
        fn surplus_points_never_influence_the_fit(
            coeffs in coefficients(),
            extras in proptest::collection::vec((7i64..100, -1_000i64..1_000), 0..4),
        ) {
            let k = coeffs.len();
            let baseline = reconstruct_constant(&sample_points(&coeffs, k), k).unwrap();

            let mut padded = sample_points(&coeffs, k);
            for (x, y) in extras {
                padded.push(Point::new(x, Integer::new(y)));
            }
            let with_extras = reconstruct_constant(&padded, k).unwrap();

            // Same selected points, same arithmetic, same bits.
            prop_assert_eq!(baseline.to_bits(), with_extras.to_bits());
        }

        #[test]
        fn repeated_runs_are_bitwise_identical(coeffs in coefficients()) {
            let k = coeffs.len();
            let points = sample_points(&coeffs, k);

            let first = reconstruct_constant(&points, k).unwrap();
            let second = reconstruct_constant(&points, k).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}
