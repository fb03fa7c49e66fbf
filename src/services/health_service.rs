use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload including the loaded deck size.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let questions = state.game().read().await.quiz().len();
    HealthResponse::ok(questions)
}
