//! Countdown scheduler: a perpetual background task advancing the countdown
//! once per second, independent of request handling.

use std::time::Duration;

use tokio::time::interval;
use tracing::debug;

use crate::{
    services::sse_events,
    state::{SharedState, countdown::TickOutcome},
};

/// Run the scheduler loop for the lifetime of the process.
///
/// Spawned once from the binary entrypoint. The interval catches up on missed
/// ticks rather than skipping them, so the countdown never loses seconds under
/// load. There is no cancellation: the loop only ends when the process does.
pub async fn run(state: SharedState) {
    let mut ticker = interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so every
    // countdown decrement comes a full second apart.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        tick_once(&state).await;
    }
}

/// Advance the countdown by one second and publish the outcome.
///
/// The tick decision, the decrement, and the broadcast all happen under the
/// game write guard: a stop recorded before this tick suppresses it entirely,
/// and a stop issued during it is ordered strictly after.
pub async fn tick_once(state: &SharedState) {
    let mut game = state.game().write().await;
    match game.countdown_mut().tick() {
        Some(TickOutcome::Tick(remaining)) => {
            sse_events::broadcast_countdown_tick(state, remaining);
        }
        Some(TickOutcome::Finished) => {
            debug!("countdown finished");
            sse_events::broadcast_countdown_finished(state);
        }
        None => {}
    }
}
