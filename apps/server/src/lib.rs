//! Goalstreak HTTP server - the axum REST surface over the core engine.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, AppState};
