//! Library crate for trivia-night-back, exposing modules for binaries and integration tests.

mod config;
mod dto;
mod error;
mod questions;
pub mod routes;
pub mod services;
pub mod state;
