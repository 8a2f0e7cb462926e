//! SQLite storage implementation for goalstreak.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `goalstreak-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!       core (domain)
//!             │
//!             ▼
//!   storage-sqlite (this crate)
//!             │
//!             ▼
//!         SQLite DB
//! ```
//!
//! All writes funnel through a single writer actor (see [`db::write_actor`]),
//! which runs each job inside an immediate transaction. Multi-statement jobs
//! (goal + zeroed streak, completion + recomputed streak) are therefore
//! atomic, and the `UNIQUE (goal_id, day)` index on completions decides
//! races between duplicate submissions.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod completions;
pub mod focus;
pub mod goals;
pub mod rewards;
pub mod screen_time;
pub mod streaks;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from goalstreak-core for convenience
pub use goalstreak_core::errors::{DatabaseError, Error, Result};
