//! Dashboard page served at the root path.

pub mod home;

use axum::Router;
use axum::routing::get;

use sensorboard_app::ports::RecordStore;

use crate::state::AppState;

/// Build the dashboard sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: RecordStore + Send + Sync + 'static,
{
    Router::new().route("/", get(home::index))
}
