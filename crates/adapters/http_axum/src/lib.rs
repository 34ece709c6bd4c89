//! # sensorboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON record endpoints** (`/data`, `/test_dynamodb`)
//! - Serve the **dashboard page** at `/`, rendered from an askama template;
//!   the page pulls `/data` from the browser, no record reaches the template
//! - Map HTTP requests into application service calls (driving adapter)
//! - Decide per endpoint how much of a fetch failure the client sees
//!
//! ## Dependency rule
//! Depends on `sensorboard-app` (for port traits and services) and
//! `sensorboard-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
