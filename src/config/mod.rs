//! Configuration management for the season rating engine
//!
//! This module handles configuration loading from TOML files, validation,
//! and default values for the rating model and the league roster.

pub mod league;
pub mod rating;

// Re-export commonly used types
pub use league::LeagueConfig;
pub use rating::RatingConfig;
