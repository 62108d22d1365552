//! Customer Registry API library.
//!
//! This crate provides the HTTP service as a library, allowing it to be
//! tested and reused. The binary in `main.rs` only wires configuration,
//! logging and the listener around [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
///
/// CORS is fully permissive: any origin, method and header, with credentials.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
