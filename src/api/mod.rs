//! HTTP transport adapter.
//!
//! A deliberately thin layer: deserialize the payload, resolve the model
//! selector from the path, hand both to the fitting engine, serialize the
//! result. Every rejection (unknown model name, invalid input arrays,
//! fitting-stage failure) maps to 422, since each one is the client's data
//! and will recur identically until the data changes.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::domain::{FittedModel, ModelKind, Observations};
use crate::error::FitError;
use crate::fit::fit_model;

/// Request payload: parallel observation arrays.
#[derive(Debug, Deserialize)]
pub struct FitRequest {
    #[serde(default)]
    pub watts: Vec<f64>,
    #[serde(default)]
    pub consumption: Vec<f64>,
}

/// Response payload.
///
/// The positional `param_1..3` layout is part of the wire contract: clients
/// interpret them as `(m, t, b)` for cho and `(a, d, c)` for fat.
#[derive(Debug, Serialize)]
pub struct FitResponse {
    pub model: ModelKind,
    pub param_1: f64,
    pub param_2: f64,
    pub param_3: f64,
    pub fit_quality: f64,
}

impl From<FittedModel> for FitResponse {
    fn from(fitted: FittedModel) -> Self {
        let [param_1, param_2, param_3] = fitted.params;
        Self {
            model: fitted.model,
            param_1,
            param_2,
            param_3,
            fit_quality: fitted.fit_quality,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown model '{0}', expected 'cho' or 'fat'")]
    UnknownModel(String),

    #[error(transparent)]
    Fit(#[from] FitError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client errors, not server faults: worth a line in the log, but no
        // more than that.
        info!("fit request rejected: {self}");

        let body = Json(json!({
            "error": self.to_string(),
        }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

/// Build the application router.
pub fn router() -> Router {
    Router::new().route("/models/{model_name}", post(create_model))
}

/// Fit one model to the posted observation arrays.
async fn create_model(
    Path(model_name): Path<String>,
    Json(data): Json<FitRequest>,
) -> Result<Json<FitResponse>, ApiError> {
    let kind = match model_name.as_str() {
        "cho" => ModelKind::Cho,
        "fat" => ModelKind::Fat,
        _ => return Err(ApiError::UnknownModel(model_name)),
    };

    let obs = Observations::new(data.watts, data.consumption)?;
    let fitted = fit_model(kind, &obs)?;

    info!(
        model = kind.display_name(),
        n = obs.len(),
        fit_quality = fitted.fit_quality,
        "model fitted"
    );

    Ok(Json(fitted.into()))
}
