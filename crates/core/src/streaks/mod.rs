//! Streak aggregator - derives the consecutive-day counters from the
//! completion ledger.

mod streaks_model;
mod streaks_service;
mod streaks_traits;

#[cfg(test)]
mod streaks_service_tests;

pub use streaks_model::{replay, Streak};
pub use streaks_service::StreakService;
pub use streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
