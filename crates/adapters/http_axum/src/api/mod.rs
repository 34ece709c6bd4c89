//! JSON handler modules.

pub mod records;

use axum::Router;
use axum::routing::get;

use sensorboard_app::ports::RecordStore;

use crate::state::AppState;

/// Build the JSON sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: RecordStore + Send + Sync + 'static,
{
    Router::new()
        .route("/data", get(records::list::<S>))
        .route("/test_dynamodb", get(records::check::<S>))
}
