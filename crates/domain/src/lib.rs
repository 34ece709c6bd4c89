//! # sensorboard-domain
//!
//! Pure domain model for the sensorboard telemetry dashboard.
//!
//! ## Responsibilities
//! - Define **Records** (schema-less items reported by sensors)
//! - Derive the **ordering key** of a record from its `timestamp` field
//! - Sort record sequences newest-first without mutating the records
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod record;
