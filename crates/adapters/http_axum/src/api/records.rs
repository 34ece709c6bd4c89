//! JSON handlers for records.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use sensorboard_app::ports::RecordStore;
use sensorboard_domain::record::Record;

use crate::error::CheckError;
use crate::state::AppState;

/// Possible responses from the record endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Record>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /data` — every record, newest first.
///
/// A failed fetch is logged and answered with `[]`.
pub async fn list<S>(State(state): State<AppState<S>>) -> ListResponse
where
    S: RecordStore + Send + Sync + 'static,
{
    let records = state.record_service.fetch_or_empty().await;
    ListResponse::Ok(Json(records))
}

/// `GET /test_dynamodb` — same as `/data`, but a failed fetch is answered
/// with `{"error": "<message>"}`.
///
/// # Errors
///
/// Returns [`CheckError`], rendered with status `200 OK`, when the fetch
/// fails.
pub async fn check<S>(State(state): State<AppState<S>>) -> Result<ListResponse, CheckError>
where
    S: RecordStore + Send + Sync + 'static,
{
    let records = state.record_service.fetch().await?;
    Ok(ListResponse::Ok(Json(records)))
}
