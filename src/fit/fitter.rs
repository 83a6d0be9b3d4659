//! Model dispatch and result assembly.
//!
//! The only place aware of both fitters: route the selected kind to its
//! algorithm, score the fitted curve against the same data, and assemble the
//! result record. No algorithmic logic lives here.

use crate::domain::{FittedModel, ModelKind, Observations};
use crate::error::FitError;
use crate::fit::levenberg::fit_exponential;
use crate::fit::quadratic::fit_quadratic;
use crate::fit::quality::r_squared;
use crate::models::predict;

/// Fit the selected curve to a validated observation set.
pub fn fit_model(kind: ModelKind, obs: &Observations) -> Result<FittedModel, FitError> {
    let params = match kind {
        ModelKind::Cho => fit_exponential(obs)?,
        ModelKind::Fat => fit_quadratic(obs)?,
    };

    let fitted: Vec<f64> = obs
        .watts()
        .iter()
        .map(|&w| predict(kind, w, &params))
        .collect();
    let fit_quality = r_squared(&fitted, obs.consumption())?;

    Ok(FittedModel {
        model: kind,
        params,
        fit_quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(watts: &[f64], consumption: &[f64]) -> Observations {
        Observations::new(watts.to_vec(), consumption.to_vec()).unwrap()
    }

    #[test]
    fn cho_scenario_fits_well() {
        let data = obs(
            &[0.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 275.0],
            &[21.0, 38.0, 50.0, 63.0, 83.0, 104.0, 121.0, 142.0, 250.0],
        );

        let fitted = fit_model(ModelKind::Cho, &data).unwrap();
        assert_eq!(fitted.model, ModelKind::Cho);
        assert!(
            fitted.fit_quality > 0.99,
            "fit_quality = {}",
            fitted.fit_quality
        );
        // Growing consumption means a negative decay rate.
        assert!(fitted.params[1] < 0.0, "t = {}", fitted.params[1]);
    }

    #[test]
    fn fat_scenario_is_concave_down() {
        let data = obs(
            &[0.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0],
            &[13.0, 31.0, 31.0, 33.0, 29.0, 25.0, 17.0, 0.0],
        );

        let fitted = fit_model(ModelKind::Fat, &data).unwrap();
        assert_eq!(fitted.model, ModelKind::Fat);
        assert!(fitted.params[0] < 0.0, "a = {}", fitted.params[0]);
        assert!(
            fitted.fit_quality > 0.9,
            "fit_quality = {}",
            fitted.fit_quality
        );
    }

    #[test]
    fn exact_parabola_scores_one() {
        let data = obs(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]);

        let fitted = fit_model(ModelKind::Fat, &data).unwrap();
        assert!((fitted.params[0] - 1.0).abs() < 1e-9);
        assert!(fitted.params[1].abs() < 1e-9);
        assert!(fitted.params[2].abs() < 1e-9);
        assert!((fitted.fit_quality - 1.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_fits_are_identical() {
        let data = obs(
            &[0.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 275.0],
            &[21.0, 38.0, 50.0, 63.0, 83.0, 104.0, 121.0, 142.0, 250.0],
        );

        let first = fit_model(ModelKind::Cho, &data).unwrap();
        let second = fit_model(ModelKind::Cho, &data).unwrap();
        assert_eq!(first.params, second.params);
        assert_eq!(first.fit_quality, second.fit_quality);
    }
}
