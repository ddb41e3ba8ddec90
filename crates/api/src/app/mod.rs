//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store/gateway wiring behind the sequencer (in-memory vs
//!   persistent, selected by environment)
//! - `routes/`: HTTP routes + handlers, one file per area
//! - `dto.rs`: dev-route DTOs and JSON response builders
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    router(services)
}

/// Build the router around already-wired services (used by tests).
pub fn router(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(Extension(services))
}
