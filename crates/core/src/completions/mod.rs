//! Completion ledger - the append-oriented record of per-day completion
//! facts.

mod completions_model;
mod completions_service;
mod completions_traits;

pub use completions_model::DailyCompletion;
pub use completions_service::CompletionService;
pub use completions_traits::{CompletionRepositoryTrait, CompletionServiceTrait};
