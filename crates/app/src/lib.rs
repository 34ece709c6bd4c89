//! # sensorboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordStore` — full scan of the item store
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RecordService` — fetch, order, and hand back records
//! - Orchestrate domain objects without knowing *how* the store is reached
//!
//! ## Dependency rule
//! Depends on `sensorboard-domain` only (plus `tracing` for logs).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
