//! SQLite storage implementation for screen time entries.

mod model;
mod repository;

pub use model::{NewScreenTimeEntryDB, ScreenTimeEntryDB};
pub use repository::ScreenTimeRepository;
