//! HTTP surface: route declarations and the top-level router assembly.

use axum::Router;

use crate::state::SharedState;

/// Admin command endpoints.
pub mod admin;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Health check endpoint.
pub mod health;
/// Player join/leave endpoints.
pub mod player;
/// Read-only state endpoint.
pub mod public;
/// Server-sent events endpoint.
pub mod sse;

/// Assemble the full application router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(sse::router())
        .merge(public::router())
        .merge(player::router())
        .merge(admin::router(state.clone()))
        .merge(docs::router())
        .with_state(state)
}
