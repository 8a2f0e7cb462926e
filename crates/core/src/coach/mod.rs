//! Coach module - tough-love responses from a text-generation provider.
//!
//! The provider is treated as a pure `(message, goal name) -> text` function
//! behind a trait. Any provider failure degrades to a canned line; the coach
//! never returns a hard error to the caller.

mod coach_provider;
mod coach_service;

pub use coach_provider::{CoachProviderTrait, HttpCoachProvider};
pub use coach_service::{CoachService, CoachServiceTrait};
