//! Least-squares solver shared by both fitters.
//!
//! Two small systems come through here:
//!
//! - the tall `n x 3` Vandermonde system of the quadratic fit
//! - the damped `3 x 3` normal equations of each Gauss-Newton step
//!
//! The parameter dimension is always 3, so SVD is cheap and lets us detect
//! rank deficiency explicitly instead of silently returning a minimum-norm
//! solution for degenerate designs (e.g., all watt values identical).

use nalgebra::{DMatrix, DVector};

/// Relative singular-value cutoff below which the design is treated as
/// rank-deficient.
const RANK_TOL: f64 = 1e-10;

/// Solve a least-squares problem using SVD.
///
/// Returns `None` when the system is rank-deficient or produces a non-finite
/// solution; the caller decides which error that maps to.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    let max_sv = svd.singular_values.max();
    let min_sv = svd.singular_values.min();
    if !max_sv.is_finite() || max_sv <= 0.0 || min_sv < RANK_TOL * max_sv {
        return None;
    }

    let beta = svd.solve(y, RANK_TOL * max_sv).ok()?;
    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}

/// Solve a damped normal-equations system via truncated SVD.
///
/// Unlike [`solve_least_squares`], rank deficiency is not an error here:
/// components along near-null directions are dropped, which yields a shorter
/// but still useful descent step even when the curvature matrix is badly
/// scaled. The iterative caller accepts or rejects the step on its own
/// merits, so a truncated step is safe.
pub fn solve_truncated(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    let max_sv = svd.singular_values.max();
    if !max_sv.is_finite() || max_sv <= 0.0 {
        return None;
    }

    let beta = svd.solve(y, f64::EPSILON * max_sv).ok()?;
    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}
