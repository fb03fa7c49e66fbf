//! Live event stream endpoint.

use std::convert::Infallible;

use axum::{
    Router,
    extract::State,
    response::sse::{Event, Sse},
    routing::get,
};
use futures::Stream;

use crate::{
    services::{sse_events, sse_service},
    state::SharedState,
};

/// Event stream endpoint, open to everyone.
pub fn router() -> Router<SharedState> {
    Router::new().route("/sse", get(event_stream))
}

/// Open the push channel. The current game snapshot is delivered first so a
/// late joiner catches up before receiving live events.
#[utoipa::path(
    get,
    path = "/sse",
    tag = "sse",
    responses((status = 200, description = "Server-sent event stream", content_type = "text/event-stream"))
)]
pub async fn event_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before reading the snapshot: any event published after the
    // snapshot was taken is then guaranteed to reach this channel.
    let receiver = sse_service::subscribe(&state);
    let snapshot = {
        let game = state.game().read().await;
        sse_events::snapshot_events(&game)
    };

    tracing::info!("SSE stream connected");
    sse_service::to_sse_stream(snapshot, receiver)
}
