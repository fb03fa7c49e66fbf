//! Event payloads carried on the SSE push channel.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{dto::common::PlayerSnapshot, state::game::TeamScores};

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    /// SSE event name, when the payload is a named event.
    pub event: Option<String>,
    /// Serialized JSON data field.
    pub data: String,
}

impl ServerEvent {
    /// Build an event from a name and a raw data string.
    pub fn new(event: Option<String>, data: String) -> Self {
        Self { event, data }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Full roster and score snapshot, broadcast whenever either changes.
pub struct TeamsUpdatedEvent {
    /// Connected players keyed by id.
    pub players: IndexMap<String, PlayerSnapshot>,
    /// Scores of both teams.
    pub scores: TeamScores,
}

#[derive(Debug, Serialize, ToSchema)]
/// New theme selected by the roulette (or the reset sentinel).
pub struct RouletteResultEvent {
    /// Theme text.
    pub theme: String,
}

#[derive(Debug, Serialize, ToSchema)]
/// One-shot dice roll result.
pub struct DiceResultEvent {
    /// Rolled value, 1 through 6.
    pub value: u8,
}

#[derive(Debug, Serialize, ToSchema)]
/// Countdown (re)armed; also sent to late joiners while the clock runs.
pub struct CountdownStartedEvent {
    /// Seconds on the clock.
    pub seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
/// One-second countdown decrement.
pub struct CountdownTickEvent {
    /// Seconds left after the decrement.
    pub seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
/// New active quiz question (or a sentinel text at exhaustion/reset).
pub struct QuizQuestionEvent {
    /// Question text.
    pub question: String,
}

#[derive(Debug, Serialize, ToSchema)]
/// Reveal of the answer to the question last sent.
pub struct QuizAnswerEvent {
    /// Answer text.
    pub answer: String,
}
