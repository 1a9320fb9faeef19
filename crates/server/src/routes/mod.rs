//! HTTP route handlers for the lookup server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /api/getAddresses       - Address lookup (?postcode=&streetnumber=)
//! ```

pub mod lookup;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/getAddresses", get(lookup::get_addresses))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
