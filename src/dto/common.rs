//! Snapshot fragments shared between the SSE events and the read models.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::game::{GameState, Player};

/// Public projection of a single player.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSnapshot {
    /// Display name chosen at join time.
    pub username: String,
    /// Team number (1 or 2), absent until teams have been formed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<u8>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            username: player.username.clone(),
            team: player.team.map(u8::from),
        }
    }
}

/// Full roster keyed by player id, in join order.
pub fn roster(game: &GameState) -> IndexMap<String, PlayerSnapshot> {
    game.players()
        .iter()
        .map(|(id, player)| (id.clone(), PlayerSnapshot::from(player)))
        .collect()
}

/// Public projection of the countdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CountdownSnapshot {
    /// Seconds left on the clock.
    pub seconds: u64,
    /// Whether the countdown is currently running.
    pub running: bool,
}

impl From<&GameState> for CountdownSnapshot {
    fn from(game: &GameState) -> Self {
        Self {
            seconds: game.countdown().remaining(),
            running: game.countdown().is_running(),
        }
    }
}
