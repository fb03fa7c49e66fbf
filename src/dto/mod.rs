//! Request, response, and event payload types exchanged over the API.

pub mod admin;
pub mod common;
pub mod health;
pub mod player;
pub mod public;
pub mod sse;
