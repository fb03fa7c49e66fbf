//! Read-only endpoints for page renderers.

use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::public::GameSnapshot, services::public_service, state::SharedState};

/// Read-only endpoints, open to everyone.
pub fn router() -> Router<SharedState> {
    Router::new().route("/state", get(get_state))
}

/// Return the full game state as one snapshot.
#[utoipa::path(
    get,
    path = "/state",
    tag = "public",
    responses((status = 200, description = "Current game snapshot", body = GameSnapshot))
)]
pub async fn get_state(State(state): State<SharedState>) -> Json<GameSnapshot> {
    Json(public_service::get_snapshot(&state).await)
}
