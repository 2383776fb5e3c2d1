//! Concrete end-to-end scenarios, including the singularity policy and the
//! deliberate asymmetry between the hard and advisory thresholds.

use approx::assert_abs_diff_eq;
use robust_linalg::{
    condition_number, determinant, determinant_with, diagonal, eigenvalues, identity, inverse,
    inverse_with, matrix_from_rows, multiply, rank, solve_linear_system, vector_from_slice,
    DetOptions, InverseOptions, LinAlgError, NalgebraKernel, ADVISORY_THRESHOLD,
    SINGULAR_THRESHOLD,
};

#[test]
fn determinant_of_known_2x2() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_abs_diff_eq!(determinant(&a).unwrap(), -2.0, epsilon = 1e-12);
}

#[test]
fn inverse_of_known_2x2_round_trips() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let inv = inverse(&a).unwrap();
    let prod = multiply(&a, &inv).unwrap();
    let eye = identity(2);
    for i in 0..2 {
        for j in 0..2 {
            assert_abs_diff_eq!(prod[[i, j]], eye[[i, j]], epsilon = 1e-10);
        }
    }
}

#[test]
fn solve_known_system() {
    let a = matrix_from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
    let b = vector_from_slice(&[1.0, 2.0]);
    let x = solve_linear_system(&a, &b).unwrap();
    assert_abs_diff_eq!(x[[0]], 0.2, epsilon = 1e-10);
    assert_abs_diff_eq!(x[[1]], 0.6, epsilon = 1e-10);
}

#[test]
fn inverse_of_dependent_rows_is_singular_error() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    assert!(matches!(
        inverse(&a),
        Err(LinAlgError::SingularMatrix { .. })
    ));
}

#[test]
fn eigenvalues_of_diag_1_2_3() {
    let d = diagonal(&[1.0, 2.0, 3.0]);
    let result = eigenvalues(&d).unwrap();
    let mut reals: Vec<f64> = result.values.iter().map(|c| c.re).collect();
    reals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for (got, want) in reals.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-10);
    }
}

#[test]
fn incompatible_multiply_reports_expected_3_got_4() {
    let a_rows = vec![vec![0.0; 3]; 2];
    let b_rows = vec![vec![0.0; 2]; 4];
    let a = matrix_from_rows(&a_rows).unwrap();
    let b = matrix_from_rows(&b_rows).unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert_eq!(
        err,
        LinAlgError::DimensionMismatch {
            expected: vec![3],
            got: vec![4],
        }
    );
}

/// A Hilbert matrix of order n, the standard ill-conditioned test case.
fn hilbert(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..n).map(|j| 1.0 / (i + j + 1) as f64).collect())
        .collect()
}

#[test]
fn large_hilbert_determinant_warns_but_returns() {
    // cond(H12) is around 1e16, far past the advisory threshold.
    let h = matrix_from_rows(&hilbert(12)).unwrap();
    let out = determinant_with(&NalgebraKernel, &h, DetOptions::default()).unwrap();
    assert_eq!(out.advisories.len(), 1);
    assert!(out.value.is_finite());
}

#[test]
fn small_hilbert_determinant_is_silent() {
    // cond(H8) is around 1e10 but the matrix is not larger than 10x10, so
    // the advisory path is never entered.
    let h = matrix_from_rows(&hilbert(8)).unwrap();
    let out = determinant_with(&NalgebraKernel, &h, DetOptions::default()).unwrap();
    assert!(out.advisories.is_empty());
}

#[test]
fn threshold_asymmetry_is_preserved() {
    // cond(H8) sits between the advisory threshold (1e10) and the hard
    // threshold (1/eps): severely ill-conditioned, yet inverse succeeds
    // with no warning of any kind. This mirrors the documented policy and
    // must not be "fixed" by tightening either threshold.
    let h = matrix_from_rows(&hilbert(8)).unwrap();
    let cond = condition_number(&h).unwrap();
    assert!(cond > ADVISORY_THRESHOLD);
    assert!(cond < SINGULAR_THRESHOLD);
    assert!(inverse(&h).is_ok());
}

#[test]
fn unchecked_inverse_skips_the_conditioning_gate() {
    let h = matrix_from_rows(&hilbert(8)).unwrap();
    let checked = inverse(&h).unwrap();
    let unchecked = inverse_with(
        &NalgebraKernel,
        &h,
        InverseOptions {
            check_singular: false,
        },
    )
    .unwrap();
    // The switch affects gating only, never the computed value.
    for i in 0..8 {
        for j in 0..8 {
            assert_abs_diff_eq!(checked[[i, j]], unchecked[[i, j]], epsilon = 1e-15);
        }
    }
}

#[test]
fn rank_of_rank_deficient_matrix() {
    let a = matrix_from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 6.0],
        vec![1.0, 0.0, 1.0],
    ])
    .unwrap();
    assert_eq!(rank(&a).unwrap(), 2);
}

#[test]
fn solve_against_singular_matrix_fails_with_diagnostics() {
    let a = matrix_from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = vector_from_slice(&[1.0, 2.0]);
    match solve_linear_system(&a, &b) {
        Err(LinAlgError::SingularMatrix { condition_number }) => {
            assert!(condition_number.unwrap().is_infinite());
        }
        other => panic!("expected SingularMatrix, got {other:?}"),
    }
}
