//! DTO definitions for the player join/leave surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to join the session under a display name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct JoinRequest {
    /// Display name shown on the scoreboard.
    #[validate(length(min = 1, max = 32))]
    pub username: String,
}

/// Issued identity for a freshly joined player.
#[derive(Debug, Serialize, ToSchema)]
pub struct JoinResponse {
    /// Opaque token identifying the player; the only handle clients hold.
    pub id: String,
    /// Echo of the accepted display name.
    pub username: String,
}
