//! Goodness of fit: the coefficient of determination.

use crate::error::FitError;

/// Sum-of-squares below this is treated as zero variance.
const VARIANCE_EPS: f64 = 1e-12;

/// Compute `R² = 1 - SSE / SST` of `fitted` against `observed`.
///
/// At most 1; there is no floor, since a fit worse than the mean produces a
/// negative value. Zero-variance observations leave the ratio undefined: we
/// report 1.0 when the residuals are also (numerically) zero, and fail with
/// [`FitError::DegenerateData`] otherwise rather than divide silently.
pub fn r_squared(fitted: &[f64], observed: &[f64]) -> Result<f64, FitError> {
    debug_assert_eq!(fitted.len(), observed.len());

    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;

    let ss_res: f64 = observed
        .iter()
        .zip(fitted)
        .map(|(y, f)| (y - f) * (y - f))
        .sum();
    let ss_tot: f64 = observed.iter().map(|y| (y - mean) * (y - mean)).sum();

    if ss_tot <= VARIANCE_EPS {
        return if ss_res <= VARIANCE_EPS {
            Ok(1.0)
        } else {
            Err(FitError::DegenerateData)
        };
    }

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_scores_one() {
        let observed = [1.0, 2.0, 4.0, 8.0];
        let r2 = r_squared(&observed, &observed).unwrap();
        assert!((r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_predictor_scores_zero() {
        let observed = [1.0, 2.0, 3.0];
        let fitted = [2.0, 2.0, 2.0];
        let r2 = r_squared(&fitted, &observed).unwrap();
        assert!(r2.abs() < 1e-12);
    }

    #[test]
    fn bad_fit_goes_negative() {
        let observed = [1.0, 2.0, 3.0];
        let fitted = [30.0, -10.0, 50.0];
        let r2 = r_squared(&fitted, &observed).unwrap();
        assert!(r2 < 0.0, "r2 = {r2}");
    }

    #[test]
    fn constant_data_with_exact_fit_scores_one() {
        let observed = [5.0, 5.0, 5.0];
        let fitted = [5.0, 5.0, 5.0];
        assert_eq!(r_squared(&fitted, &observed).unwrap(), 1.0);
    }

    #[test]
    fn constant_data_with_residuals_is_degenerate() {
        let observed = [5.0, 5.0, 5.0];
        let fitted = [4.0, 5.0, 6.0];
        let err = r_squared(&fitted, &observed).unwrap_err();
        assert_eq!(err, FitError::DegenerateData);
    }
}
