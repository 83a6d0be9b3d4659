//! Closed-form least-squares fit of the fat (quadratic) curve.
//!
//! `consumption(w) = a*w^2 + d*w + c` is linear in `(a, d, c)`, so the fit is
//! a single tall least-squares solve over the Vandermonde design matrix of
//! the watt values. No iteration, no initial guess.

use nalgebra::{DMatrix, DVector};

use crate::domain::Observations;
use crate::error::FitError;
use crate::math::solve_least_squares;
use crate::models::fat_design_row;

/// Fit the quadratic curve, returning `(a, d, c)`.
///
/// Fails with [`FitError::SingularSystem`] only for degenerate designs, e.g.
/// watt values that do not span three distinct points.
pub fn fit_quadratic(obs: &Observations) -> Result<[f64; 3], FitError> {
    let n = obs.len();
    let mut x = DMatrix::<f64>::zeros(n, 3);
    let mut y = DVector::<f64>::zeros(n);
    let mut row = [0.0; 3];

    for (i, (&w, &c)) in obs.watts().iter().zip(obs.consumption()).enumerate() {
        fat_design_row(w, &mut row);
        for (j, &v) in row.iter().enumerate() {
            x[(i, j)] = v;
        }
        y[i] = c;
    }

    let beta = solve_least_squares(&x, &y).ok_or(FitError::SingularSystem)?;
    Ok([beta[0], beta[1], beta[2]])
}
