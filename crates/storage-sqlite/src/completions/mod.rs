//! SQLite storage implementation for the completion ledger.

mod model;
mod repository;

pub use model::CompletionDB;
pub use repository::CompletionRepository;
