//! Dashboard home page — static shell that polls `/data`.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::DashboardError;

/// Home page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    data_path: &'static str,
    refresh_seconds: u32,
}

/// Rendered home page.
pub struct HomePage(String);

impl IntoResponse for HomePage {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}

/// `GET /` — dashboard shell.
///
/// # Errors
///
/// Returns [`DashboardError`] if the template fails to render.
pub async fn index() -> Result<HomePage, DashboardError> {
    let page = HomeTemplate {
        data_path: "/data",
        refresh_seconds: 10,
    }
    .render()?;
    Ok(HomePage(page))
}
