//! Screen time tracking module.

mod screen_time_model;
mod screen_time_service;
mod screen_time_traits;

pub use screen_time_model::{NewScreenTimeEntry, ScreenTimeEntry};
pub use screen_time_service::ScreenTimeService;
pub use screen_time_traits::{ScreenTimeRepositoryTrait, ScreenTimeServiceTrait};
