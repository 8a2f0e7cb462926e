//! Focus sessions module.

mod focus_model;
mod focus_service;
mod focus_traits;

pub use focus_model::{FocusSession, FocusSessionUpdate, NewFocusSession};
pub use focus_service::FocusService;
pub use focus_traits::{FocusRepositoryTrait, FocusServiceTrait};
