//! Read models exposed to view layers.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::common::{CountdownSnapshot, PlayerSnapshot, roster},
    state::game::{GameState, TeamScores},
};

/// Complete snapshot of the current game state, served to page renderers.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameSnapshot {
    /// Connected players keyed by id, in join order.
    pub players: IndexMap<String, PlayerSnapshot>,
    /// Scores of both teams.
    pub scores: TeamScores,
    /// Current theme text.
    pub theme: String,
    /// Countdown status.
    pub countdown: CountdownSnapshot,
    /// Active quiz question, when one is in play.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        Self {
            players: roster(game),
            scores: game.scores(),
            theme: game.theme().to_string(),
            countdown: CountdownSnapshot::from(game),
            question: game
                .quiz()
                .current()
                .map(|question| question.question.clone()),
        }
    }
}
