use thiserror::Error;

/// Everything that can go wrong between raw input arrays and a fitted model.
///
/// None of these are transient: each failure is a direct consequence of the
/// supplied data and will recur identically unless the data changes, so
/// nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("not enough data, at least 3 data points required (got {got})")]
    InsufficientData { got: usize },

    #[error("watts and consumption differ in length ({watts} vs {consumption})")]
    LengthMismatch { watts: usize, consumption: usize },

    #[error("negative values not allowed ({column}[{index}] = {value})")]
    NegativeValue {
        column: &'static str,
        index: usize,
        value: f64,
    },

    #[error("fit did not converge within {max_iters} iterations")]
    NoConvergence { max_iters: usize },

    #[error("design matrix is numerically singular")]
    SingularSystem,

    #[error("consumption data has zero variance, fit quality is undefined")]
    DegenerateData,
}
