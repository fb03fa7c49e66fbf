//! DTO definitions used by the admin command surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to apply a score delta to one of the two teams.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreUpdateRequest {
    /// Team number; anything other than 1 or 2 is rejected.
    pub team: u8,
    /// Delta to apply, may be negative.
    pub points: i64,
}

/// Request to arm the countdown.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StartCountdownRequest {
    /// Countdown duration in seconds. No upper bound is enforced.
    #[validate(range(min = 1))]
    pub seconds: u64,
}

/// Generic action acknowledgement used by admin endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Result of a score adjustment, returning the updated tally.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreUpdateResponse {
    /// Team whose score changed.
    pub team: u8,
    /// Score after applying the delta.
    pub score: i64,
}

/// Theme picked by the roulette.
#[derive(Debug, Serialize, ToSchema)]
pub struct RouletteResponse {
    /// The selected theme.
    pub theme: String,
}

/// Result of a dice roll.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiceResponse {
    /// Rolled value, 1 through 6.
    pub value: u8,
}

/// State of the quiz after advancing to the next question.
#[derive(Debug, Serialize, ToSchema)]
pub struct NextQuestionResponse {
    /// True once the deck is exhausted.
    pub finished: bool,
    /// The new active question, absent when exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

/// Answer revealed for the question last sent.
#[derive(Debug, Serialize, ToSchema)]
pub struct RevealAnswerResponse {
    /// The revealed answer; absent when there is nothing to reveal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}
