//! Service layer: business logic between the HTTP surface and shared state.

/// OpenAPI documentation generation.
pub mod documentation;
/// Command handlers mutating the shared game state.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Read-only projections for view layers.
pub mod public_service;
/// Countdown scheduler background task.
pub mod scheduler;
/// Server-Sent Events message generation.
pub mod sse_events;
/// Server-Sent Events broadcasting service.
pub mod sse_service;
