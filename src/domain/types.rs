//! Shared domain types.
//!
//! These types are intentionally lightweight and (where they cross the wire)
//! serializable, so they can be:
//!
//! - used in-memory during fitting
//! - embedded directly in transport payloads

use serde::{Deserialize, Serialize};

use crate::data::validate;
use crate::error::FitError;

/// Which consumption curve to fit.
///
/// The two kinds differ in curve family *and* fitting algorithm:
/// carbohydrate consumption is a monotonic exponential fitted iteratively,
/// fat consumption is a quadratic fitted in closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Cho,
    Fat,
}

impl ModelKind {
    /// Label used in logs and wire payloads.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Cho => "cho",
            ModelKind::Fat => "fat",
        }
    }
}

/// A validated observation set: parallel `(watt, consumption)` arrays.
///
/// `new` is the only constructor and it runs the input validator, so every
/// `Observations` value in the system has equal lengths of at least 3 and no
/// negative entries. The set is immutable after construction and lives only
/// for the duration of one fitting request.
#[derive(Debug, Clone)]
pub struct Observations {
    watts: Vec<f64>,
    consumption: Vec<f64>,
}

impl Observations {
    pub fn new(watts: Vec<f64>, consumption: Vec<f64>) -> Result<Self, FitError> {
        validate(&watts, &consumption)?;
        Ok(Self { watts, consumption })
    }

    pub fn len(&self) -> usize {
        self.watts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watts.is_empty()
    }

    pub fn watts(&self) -> &[f64] {
        &self.watts
    }

    pub fn consumption(&self) -> &[f64] {
        &self.consumption
    }
}

/// Fitted curve parameters and quality for one model kind.
#[derive(Debug, Clone, Serialize)]
pub struct FittedModel {
    pub model: ModelKind,
    /// Curve parameters in kind order: `(m, t, b)` for cho, `(a, d, c)` for fat.
    pub params: [f64; 3],
    /// Coefficient of determination against the input data. At most 1; poor
    /// fits can go arbitrarily negative.
    pub fit_quality: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ModelKind::Cho).unwrap(), "\"cho\"");
        assert_eq!(serde_json::to_string(&ModelKind::Fat).unwrap(), "\"fat\"");
    }

    #[test]
    fn observations_construction_validates() {
        let err = Observations::new(vec![1.0, 2.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, FitError::InsufficientData { got: 2 });

        let obs = Observations::new(vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]).unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(obs.watts(), &[0.0, 1.0, 2.0]);
        assert_eq!(obs.consumption(), &[3.0, 4.0, 5.0]);
    }
}
