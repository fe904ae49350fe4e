//! Gridiron Elo - season-long team ratings with weekly history
//!
//! This crate computes Elo-style strength ratings for a fixed league roster
//! from a chronological feed of match results, and accumulates a week-by-week
//! snapshot history of every team's rating for tables and charts.

pub mod config;
pub mod error;
pub mod feed;
pub mod rating;
pub mod season;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use config::{LeagueConfig, RatingConfig};
pub use rating::{EloEngine, RatingBook};
pub use season::{run_season, SeasonDriver, SeasonHistory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
