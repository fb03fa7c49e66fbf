//! Shared application state: the guarded [`GameState`] plus the SSE hub.

pub mod countdown;
pub mod game;
pub mod quiz;
mod sse;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::AppConfig, questions::QuizQuestion, state::game::GameState};

pub use self::sse::SseHub;

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared by the HTTP handlers and the scheduler.
///
/// `game` is the single piece of shared mutable state. Every mutation goes
/// through its write lock, and the resulting events are published while the
/// guard is still held so the broadcast order always matches the mutation
/// order. That ordering is what keeps a stop command and an in-flight tick
/// from interleaving destructively.
pub struct AppState {
    config: AppConfig,
    game: RwLock<GameState>,
    sse: SseHub,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig, questions: Vec<QuizQuestion>) -> SharedState {
        Arc::new(Self {
            config,
            game: RwLock::new(GameState::new(questions)),
            sse: SseHub::new(16),
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lock guarding the authoritative game state.
    pub fn game(&self) -> &RwLock<GameState> {
        &self.game
    }

    /// Broadcast hub used for the SSE stream.
    pub fn sse(&self) -> &SseHub {
        &self.sse
    }
}
