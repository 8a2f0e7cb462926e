//! Goalstreak core - domain services for goal and streak tracking.
//!
//! This crate is database-agnostic: every module defines its domain models,
//! repository traits and a service that implements the business rules on top
//! of those traits. The SQLite implementation of the repository traits lives
//! in `goalstreak-storage-sqlite`.
//!
//! # Architecture
//!
//! ```text
//! goals ──────► streaks ◄────── completions
//!   │              │                 │
//!   └──────────────┴────────┬────────┘
//!                           │
//!                  repository traits
//!                           │
//!                           ▼
//!                 storage-sqlite (impl)
//! ```
//!
//! The streak engine is the heart of the crate: `completions` owns the
//! one-completion-per-calendar-day ledger and `streaks` owns the recompute
//! rules that derive the counters from it.

pub mod errors;

pub mod coach;
pub mod completions;
pub mod focus;
pub mod goals;
pub mod rewards;
pub mod screen_time;
pub mod streaks;

pub use errors::{Error, Result};
