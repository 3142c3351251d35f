//! Integration tests for arcanum-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::dense_matrix::DenseMatrix;
    use crate::elimination::{solve_augmented, Pivoting, SingularMatrix};

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {expected:?}, got {actual:?}");
        }
    }

    #[test]
    fn solves_a_three_by_three_system() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        // has the solution (2, 3, -1).
        let system = DenseMatrix::from_rows(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ]);

        let solution = solve_augmented(system, Pivoting::None).unwrap();
        assert_close(&solution, &[2.0, 3.0, -1.0]);
    }

    #[test]
    fn duplicate_rows_are_reported_singular() {
        let system = DenseMatrix::from_rows(vec![
            vec![1.0, 2.0, 5.0],
            vec![1.0, 2.0, 9.0],
        ]);

        assert_eq!(
            solve_augmented(system, Pivoting::None),
            Err(SingularMatrix { row: 1 })
        );
    }

    #[test]
    fn zero_diagonal_needs_pivoting() {
        // Solvable system whose first diagonal entry is zero: the
        // no-pivot path must fail cleanly, the pivoting path succeeds.
        let rows = vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 2.0]];

        let plain = solve_augmented(DenseMatrix::from_rows(rows.clone()), Pivoting::None);
        assert_eq!(plain, Err(SingularMatrix { row: 0 }));

        let pivoted =
            solve_augmented(DenseMatrix::from_rows(rows), Pivoting::Partial).unwrap();
        assert_close(&pivoted, &[2.0, 1.0]);
    }

    #[test]
    fn pivoting_strategies_agree_on_well_conditioned_systems() {
        let rows = vec![
            vec![4.0, 1.0, 0.0, 9.0],
            vec![1.0, 3.0, 1.0, 10.0],
            vec![0.0, 1.0, 2.0, 7.0],
        ];

        let plain = solve_augmented(DenseMatrix::from_rows(rows.clone()), Pivoting::None)
            .unwrap();
        let pivoted =
            solve_augmented(DenseMatrix::from_rows(rows), Pivoting::Partial).unwrap();
        assert_close(&plain, &pivoted);
    }

    #[test]
    fn singular_systems_never_leak_non_finite_values() {
        let system = DenseMatrix::from_rows(vec![
            vec![1.0, 1.0, 3.0],
            vec![1.0, 1.0, 4.0],
        ]);

        match solve_augmented(system, Pivoting::None) {
            Err(SingularMatrix { .. }) => {}
            Ok(solution) => panic!("expected an error, got {solution:?}"),
        }
    }

    #[test]
    fn row_operations_compose() {
        let mut m = DenseMatrix::from_rows(vec![vec![2.0, 4.0], vec![1.0, 7.0]]);
        m.div_row(0, 2.0);
        m.sub_scaled_row(1, 0, 1.0);
        m.swap_rows(0, 1);

        assert_eq!(m.row(0), &[0.0, 5.0]);
        assert_eq!(m.row(1), &[1.0, 2.0]);
        assert_eq!(m.get(2, 0), None);
    }
}
