use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Trivia Night Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::event_stream,
        crate::routes::public::get_state,
        crate::routes::player::join,
        crate::routes::player::leave,
        crate::routes::admin::auto_assign_teams,
        crate::routes::admin::update_score,
        crate::routes::admin::start_countdown,
        crate::routes::admin::stop_countdown,
        crate::routes::admin::spin_roulette,
        crate::routes::admin::roll_dice,
        crate::routes::admin::next_question,
        crate::routes::admin::reveal_answer,
        crate::routes::admin::reset_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::player::JoinRequest,
            crate::dto::player::JoinResponse,
            crate::dto::public::GameSnapshot,
            crate::dto::admin::ScoreUpdateRequest,
            crate::dto::admin::StartCountdownRequest,
            crate::dto::admin::ActionResponse,
            crate::dto::admin::ScoreUpdateResponse,
            crate::dto::admin::RouletteResponse,
            crate::dto::admin::DiceResponse,
            crate::dto::admin::NextQuestionResponse,
            crate::dto::admin::RevealAnswerResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events stream"),
        (name = "player", description = "Player join/leave operations"),
        (name = "public", description = "Read-only game state projections"),
        (name = "admin", description = "Admin game control commands"),
    )
)]
pub struct ApiDoc;
