//! Player registration endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use axum_valid::Valid;

use crate::{
    dto::player::{JoinRequest, JoinResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Join/leave endpoints, open to everyone.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", post(join))
        .route("/players/{id}", delete(leave))
}

/// Register a new player under the supplied username.
#[utoipa::path(
    post,
    path = "/players",
    tag = "player",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Player registered", body = JoinResponse),
        (status = 400, description = "Invalid username"),
    )
)]
pub async fn join(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<JoinRequest>>,
) -> Result<Json<JoinResponse>, AppError> {
    Ok(Json(game_service::join_player(&state, payload).await?))
}

/// Remove a player from the roster. Unknown ids are ignored.
#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = "player",
    params(("id" = String, Path, description = "Player identifier issued at join")),
    responses((status = 204, description = "Player removed (or was already gone)"))
)]
pub async fn leave(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    game_service::leave_player(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
