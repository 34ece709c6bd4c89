//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sensorboard_domain::error::SensorboardError;

/// JSON error body returned by the diagnostic endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Exposes a fetch failure to the client as `{"error": "<message>"}`.
///
/// The status stays `200 OK`: the diagnostic endpoint reports the store's
/// health in the body, not in the status line.
#[derive(Debug)]
pub struct CheckError(SensorboardError);

impl From<SensorboardError> for CheckError {
    fn from(err: SensorboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "item store check failed");
        (
            StatusCode::OK,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Template rendering failure, mapped to `500 Internal Server Error`.
#[derive(Debug)]
pub struct DashboardError(askama::Error);

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render dashboard page");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
