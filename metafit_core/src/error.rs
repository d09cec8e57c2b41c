//! Error types for the metafit_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for metafit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input failed a contract check (bad tier name, zero timer duration,
    /// unknown exercise id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Day index outside the 30-day program
    #[error("day {0} out of range (1..=30)")]
    DayOutOfRange(u32),

    /// Persistence layer is unavailable (read or write failed)
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
