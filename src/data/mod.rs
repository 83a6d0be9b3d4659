//! Input validation for raw observation arrays.
//!
//! Every fitting request starts from two caller-supplied parallel arrays.
//! Nothing downstream (the fitters, the R² computation) re-checks shape or
//! sign, so this gate runs before anything else.
//!
//! Check order: length sufficiency, then length equality, then
//! non-negativity. Lengths are compared before elements because the
//! element-wise walk only makes sense on structurally sound arrays.

use crate::error::FitError;

/// Minimum number of points needed to identify a 3-parameter curve.
pub const MIN_POINTS: usize = 3;

/// Validate raw `(watts, consumption)` arrays prior to fitting.
///
/// Succeeds silently; the first violated precondition decides the error.
pub fn validate(watts: &[f64], consumption: &[f64]) -> Result<(), FitError> {
    let shortest = watts.len().min(consumption.len());
    if shortest < MIN_POINTS {
        return Err(FitError::InsufficientData { got: shortest });
    }

    if watts.len() != consumption.len() {
        return Err(FitError::LengthMismatch {
            watts: watts.len(),
            consumption: consumption.len(),
        });
    }

    // Power output and metabolic consumption are physically non-negative.
    for (column, values) in [("watts", watts), ("consumption", consumption)] {
        if let Some((index, value)) = values
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, v)| v < 0.0)
        {
            return Err(FitError::NegativeValue {
                column,
                index,
                value,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_valid_arrays() {
        assert!(validate(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).is_ok());
    }

    #[test]
    fn rejects_too_few_points() {
        let err = validate(&[0.0, 75.0], &[21.0, 38.0]).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { got: 2 });
    }

    #[test]
    fn too_few_points_reported_before_mismatch() {
        // One array is long enough, the other is not; the shortfall wins.
        let err = validate(&[0.0, 75.0], &[21.0, 38.0, 50.0, 63.0]).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { got: 2 });
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let watts: Vec<f64> = (0..9).map(|i| i as f64 * 25.0).collect();
        let consumption: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let err = validate(&watts, &consumption).unwrap_err();
        assert_eq!(
            err,
            FitError::LengthMismatch {
                watts: 9,
                consumption: 10
            }
        );
    }

    #[test]
    fn rejects_negative_watt() {
        let err = validate(&[0.0, -75.0, 100.0], &[21.0, 38.0, 50.0]).unwrap_err();
        assert_eq!(
            err,
            FitError::NegativeValue {
                column: "watts",
                index: 1,
                value: -75.0
            }
        );
    }

    #[test]
    fn rejects_negative_consumption() {
        let err = validate(&[0.0, 75.0, 100.0], &[21.0, 38.0, -250.0]).unwrap_err();
        assert_eq!(
            err,
            FitError::NegativeValue {
                column: "consumption",
                index: 2,
                value: -250.0
            }
        );
    }

    #[test]
    fn zero_values_are_allowed() {
        assert!(validate(&[0.0, 125.0, 275.0], &[13.0, 31.0, 0.0]).is_ok());
    }
}
