//! Damped Gauss-Newton (Levenberg-Marquardt) fit of the CHO curve.
//!
//! `consumption(w) = m * exp(-t * w) + b` is nonlinear in `t`, so there is no
//! closed form. We minimize the sum of squared residuals iteratively:
//!
//! - linearize the model at the current `(m, t, b)` via the analytic Jacobian
//! - solve the damped normal equations for a parameter update
//! - accept the update only if it reduces the SSE, otherwise raise the
//!   damping factor and retry the step
//!
//! The search is seeded from a fixed initial guess and uses no randomness, so
//! fitting the same dataset twice yields identical parameters. Convergence is
//! not guaranteed for arbitrary inputs: the seed is tuned for data shaped
//! like an exponential trend, and the caller judges the result through R²
//! rather than through a hard optimizer contract.

use nalgebra::{DMatrix, DVector};

use crate::domain::{ModelKind, Observations};
use crate::error::FitError;
use crate::math::solve_truncated;
use crate::models::{cho_jacobian_row, predict};

/// Fixed initial guess `(m, t, b)`.
const INITIAL_GUESS: [f64; 3] = [1.0, -0.1, 1.0];

/// Outer iteration budget.
const MAX_ITERS: usize = 200;

/// Damping retries within a single step before declaring the step stuck.
const MAX_STEP_RETRIES: usize = 16;

/// Starting damping factor, and how it moves on rejected/accepted steps.
const LAMBDA_INIT: f64 = 1e-3;
const LAMBDA_UP: f64 = 10.0;
const LAMBDA_DOWN: f64 = 0.1;
const LAMBDA_MIN: f64 = 1e-12;

/// Floor applied to the curvature diagonal when damping, so a flat direction
/// still receives some regularization.
const DIAG_FLOOR: f64 = 1e-12;

/// Largest exponent change `|δt| * w_max` allowed in a single step.
///
/// The Gauss-Newton linearization of `exp(-t * w)` only holds while the
/// exponent moves by O(1); an unclamped first step from the seed can
/// overshoot `t` so far that the search lands in a spurious basin and never
/// recovers. Steps that would move the exponent further are scaled down
/// whole, preserving their direction.
const EXP_STEP_LIMIT: f64 = 2.0;

/// Converged when the solved update is this small relative to the parameters.
const STEP_TOL: f64 = 1e-10;

/// Converged when an accepted step reduces the SSE by less than this fraction.
const SSE_TOL: f64 = 1e-12;

/// Fit the CHO curve, returning the converged `(m, t, b)`.
///
/// Fails with [`FitError::NoConvergence`] when the iteration budget runs out,
/// or when no damped step can be solved or accepted anymore at any damping
/// level.
pub fn fit_exponential(obs: &Observations) -> Result<[f64; 3], FitError> {
    let mut params = INITIAL_GUESS;
    let mut lambda = LAMBDA_INIT;
    let mut sse = sum_squared_residuals(obs, &params);

    let watt_max = obs
        .watts()
        .iter()
        .copied()
        .fold(0.0_f64, f64::max)
        .max(1.0);

    for _ in 0..MAX_ITERS {
        let (jtj, jtr) = normal_terms(obs, &params);

        let mut accepted = false;
        for _ in 0..MAX_STEP_RETRIES {
            let Some(mut delta) = solve_damped(&jtj, &jtr, lambda) else {
                lambda *= LAMBDA_UP;
                continue;
            };

            let exponent_change = delta[1].abs() * watt_max;
            if exponent_change > EXP_STEP_LIMIT {
                let scale = EXP_STEP_LIMIT / exponent_change;
                for d in &mut delta {
                    *d *= scale;
                }
            }

            // A vanishing update means the gradient is (numerically) zero at
            // the current point: converged, whether or not the step would
            // have been accepted.
            let step_norm =
                (delta[0] * delta[0] + delta[1] * delta[1] + delta[2] * delta[2]).sqrt();
            let param_norm =
                (params[0] * params[0] + params[1] * params[1] + params[2] * params[2]).sqrt();
            if step_norm < STEP_TOL * (1.0 + param_norm) {
                return Ok(params);
            }

            let trial = [
                params[0] + delta[0],
                params[1] + delta[1],
                params[2] + delta[2],
            ];
            let trial_sse = sum_squared_residuals(obs, &trial);

            if trial_sse.is_finite() && trial_sse < sse {
                let reduction = sse - trial_sse;
                let prev_sse = sse;
                params = trial;
                sse = trial_sse;
                lambda = (lambda * LAMBDA_DOWN).max(LAMBDA_MIN);
                accepted = true;

                if reduction < SSE_TOL * prev_sse {
                    return Ok(params);
                }
                break;
            }

            lambda *= LAMBDA_UP;
        }

        if !accepted {
            // Every retry either failed to solve (singular curvature) or
            // failed to descend; more outer iterations cannot help.
            return Err(FitError::NoConvergence { max_iters: MAX_ITERS });
        }
    }

    Err(FitError::NoConvergence { max_iters: MAX_ITERS })
}

/// Sum of squared residuals of the CHO curve at `params`.
fn sum_squared_residuals(obs: &Observations, params: &[f64; 3]) -> f64 {
    obs.watts()
        .iter()
        .zip(obs.consumption())
        .map(|(&w, &y)| {
            let r = y - predict(ModelKind::Cho, w, params);
            r * r
        })
        .sum()
}

/// Build `JᵀJ` and `Jᵀr` at the current parameters.
fn normal_terms(obs: &Observations, params: &[f64; 3]) -> (DMatrix<f64>, DVector<f64>) {
    let n = obs.len();
    let mut jac = DMatrix::<f64>::zeros(n, 3);
    let mut resid = DVector::<f64>::zeros(n);
    let mut row = [0.0; 3];

    for i in 0..n {
        let w = obs.watts()[i];
        cho_jacobian_row(w, params, &mut row);
        for (j, &v) in row.iter().enumerate() {
            jac[(i, j)] = v;
        }
        resid[i] = obs.consumption()[i] - predict(ModelKind::Cho, w, params);
    }

    let jtr = jac.transpose() * &resid;
    let jtj = jac.transpose() * jac;
    (jtj, jtr)
}

/// Solve `(JᵀJ + λ diag(JᵀJ)) δ = Jᵀr` for the update δ.
///
/// Marquardt scaling (damping proportional to each diagonal entry) keeps the
/// step usable even though `m`, `t` and `b` live on wildly different scales.
fn solve_damped(jtj: &DMatrix<f64>, jtr: &DVector<f64>, lambda: f64) -> Option<[f64; 3]> {
    let mut damped = jtj.clone();
    for j in 0..3 {
        damped[(j, j)] += lambda * jtj[(j, j)].max(DIAG_FLOOR);
    }

    let delta = solve_truncated(&damped, jtr)?;
    Some([delta[0], delta[1], delta[2]])
}
