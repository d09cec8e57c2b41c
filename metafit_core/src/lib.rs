#![forbid(unsafe_code)]

//! Core domain model and business logic for the MetaFit 30-day program.
//!
//! This crate provides:
//! - Domain types (tiers, exercises, day plans, program state)
//! - Workout template catalog and plan generation
//! - Persistence over an injected key-value storage capability
//! - Day cursor, countdown timer and completion summary
//! - Profile/calorie math, nutrition log, progress journal and milestones

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod plan;
pub mod store;
pub mod cursor;
pub mod timer;
pub mod summary;
pub mod tracker;
pub mod profile;
pub mod nutrition;
pub mod journal;
pub mod csv_rollup;
pub mod progress;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use plan::generate_program;
pub use store::{FileStore, KeyValueStore, MemoryStore, ProgramStore};
pub use cursor::DayCursor;
pub use timer::{ExerciseTimer, TickOutcome, TimerState};
pub use summary::{summarize, ProgramSummary};
pub use tracker::WorkoutTracker;
pub use profile::UserProfile;
pub use journal::{EntrySink, JsonlJournal, ProgressEntry};
