//! # thermohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API:
//!   - `GET /health`: liveness probe
//!   - `GET /rules`: the full rule tree
//!   - `GET /sensors`: per-relay resolved temperatures
//!   - `PATCH /relays`: partial update of one relay
//! - Decode wire payloads into domain types (driving adapter), including
//!   the mapping of wire sentinels onto explicit field updates
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `thermohub-app` (for port traits and services) and `thermohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
