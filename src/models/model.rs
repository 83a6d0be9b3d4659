//! Curve evaluation for the CHO and fat models.
//!
//! The fitters rely on two primitive operations per kind:
//! - evaluate the curve at a watt value given parameters (for residuals/R²)
//! - build the derivative or design row the regression needs
//!
//! These are implemented here for each model kind.

use crate::domain::ModelKind;

/// Evaluate the curve at `watt`.
///
/// `params` are `(m, t, b)` for [`ModelKind::Cho`] and `(a, d, c)` for
/// [`ModelKind::Fat`].
pub fn predict(kind: ModelKind, watt: f64, params: &[f64; 3]) -> f64 {
    match kind {
        ModelKind::Cho => {
            let [m, t, b] = *params;
            m * (-t * watt).exp() + b
        }
        ModelKind::Fat => {
            let [a, d, c] = *params;
            a * watt * watt + d * watt + c
        }
    }
}

/// Fill the Jacobian row of the CHO curve at `watt`: partial derivatives of
/// `m * exp(-t * watt) + b` with respect to `(m, t, b)`.
pub fn cho_jacobian_row(watt: f64, params: &[f64; 3], out: &mut [f64; 3]) {
    let [m, t, _] = *params;
    let e = (-t * watt).exp();
    out[0] = e;
    out[1] = -m * watt * e;
    out[2] = 1.0;
}

/// Fill the quadratic design row at `watt`: the coefficients of `(a, d, c)`
/// in the fat curve, highest power first.
pub fn fat_design_row(watt: f64, out: &mut [f64; 3]) {
    out[0] = watt * watt;
    out[1] = watt;
    out[2] = 1.0;
}
