//! Error types for the season rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("Unknown team: {team}")]
    UnknownTeam { team: String },

    #[error("Invalid match result: {reason}")]
    InvalidResult { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
