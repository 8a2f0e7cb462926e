//! SQLite storage implementation for focus sessions.

mod model;
mod repository;

pub use model::{FocusSessionDB, FocusSessionUpdateDB, NewFocusSessionDB};
pub use repository::FocusRepository;
