//! Rating engine for league play
//!
//! This module owns the current-rating state for every team and the Elo-style
//! update applied after each match result: a logistic expected-outcome model
//! with a home-field offset and a margin-of-victory scaling factor.

pub mod engine;
pub mod storage;

// Re-export commonly used types
pub use engine::EloEngine;
pub use storage::RatingBook;
