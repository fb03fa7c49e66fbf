//! Service helpers that expose read-only projections of the current game.

use crate::{dto::public::GameSnapshot, state::SharedState};

/// Return the full game snapshot used by page renderers as their read model.
pub async fn get_snapshot(state: &SharedState) -> GameSnapshot {
    let game = state.game().read().await;
    GameSnapshot::from(&*game)
}
