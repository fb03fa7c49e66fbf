//! Admin-only command endpoints driving the shared session.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::post,
};
use axum_valid::Valid;

use crate::{
    dto::admin::{
        ActionResponse, DiceResponse, NextQuestionResponse, RevealAnswerResponse, RouletteResponse,
        ScoreUpdateRequest, ScoreUpdateResponse, StartCountdownRequest,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Admin command endpoints, all guarded by the shared-secret middleware.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/admin/teams/auto", post(auto_assign_teams))
        .route("/admin/score", post(update_score))
        .route("/admin/countdown/start", post(start_countdown))
        .route("/admin/countdown/stop", post(stop_countdown))
        .route("/admin/roulette/spin", post(spin_roulette))
        .route("/admin/dice/roll", post(roll_dice))
        .route("/admin/quiz/next", post(next_question))
        .route("/admin/quiz/answer", post(reveal_answer))
        .route("/admin/reset", post(reset_game))
        .route_layer(middleware::from_fn_with_state(state, require_admin_secret))
}

/// Shuffle every connected player into two even teams.
#[utoipa::path(
    post,
    path = "/admin/teams/auto",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Teams assigned", body = ActionResponse))
)]
pub async fn auto_assign_teams(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(game_service::auto_assign_teams(&state).await?))
}

/// Apply a score delta to team 1 or team 2.
#[utoipa::path(
    post,
    path = "/admin/score",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    request_body = ScoreUpdateRequest,
    responses((status = 200, description = "Score updated", body = ScoreUpdateResponse))
)]
pub async fn update_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreUpdateRequest>,
) -> Result<Json<ScoreUpdateResponse>, AppError> {
    Ok(Json(game_service::update_score(&state, payload).await?))
}

/// Arm the countdown for the requested number of seconds.
#[utoipa::path(
    post,
    path = "/admin/countdown/start",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    request_body = StartCountdownRequest,
    responses((status = 200, description = "Countdown armed", body = ActionResponse))
)]
pub async fn start_countdown(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<StartCountdownRequest>>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(game_service::start_countdown(&state, payload).await?))
}

/// Halt the running countdown.
#[utoipa::path(
    post,
    path = "/admin/countdown/stop",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Countdown stopped", body = ActionResponse))
)]
pub async fn stop_countdown(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(game_service::stop_countdown(&state).await?))
}

/// Spin the theme roulette and announce the selected theme.
#[utoipa::path(
    post,
    path = "/admin/roulette/spin",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Theme selected", body = RouletteResponse))
)]
pub async fn spin_roulette(
    State(state): State<SharedState>,
) -> Result<Json<RouletteResponse>, AppError> {
    Ok(Json(game_service::spin_roulette(&state).await?))
}

/// Roll a six-sided die and announce the result.
#[utoipa::path(
    post,
    path = "/admin/dice/roll",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Dice rolled", body = DiceResponse))
)]
pub async fn roll_dice(State(state): State<SharedState>) -> Result<Json<DiceResponse>, AppError> {
    Ok(Json(game_service::roll_dice(&state).await?))
}

/// Advance to the next quiz question.
#[utoipa::path(
    post,
    path = "/admin/quiz/next",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Advanced to next question", body = NextQuestionResponse))
)]
pub async fn next_question(
    State(state): State<SharedState>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    Ok(Json(game_service::next_question(&state).await?))
}

/// Reveal the answer of the question last sent.
#[utoipa::path(
    post,
    path = "/admin/quiz/answer",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Answer revealed", body = RevealAnswerResponse))
)]
pub async fn reveal_answer(
    State(state): State<SharedState>,
) -> Result<Json<RevealAnswerResponse>, AppError> {
    Ok(Json(game_service::reveal_answer(&state).await?))
}

/// Reset the whole session to its initial state.
#[utoipa::path(
    post,
    path = "/admin/reset",
    tag = "admin",
    params(("X-Admin-Secret" = String, Header, description = "Shared admin secret")),
    responses((status = 200, description = "Game reset", body = ActionResponse))
)]
pub async fn reset_game(
    State(state): State<SharedState>,
) -> Result<Json<ActionResponse>, AppError> {
    Ok(Json(game_service::reset_game(&state).await?))
}

async fn require_admin_secret(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let provided = req
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("missing admin secret header `X-Admin-Secret`".into())
        })?;

    if provided == state.config().admin_secret() {
        Ok(next.run(req).await)
    } else {
        Err(AppError::Unauthorized("invalid admin secret".into()))
    }
}
