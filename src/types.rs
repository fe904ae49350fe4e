//! Common types used throughout the season rating engine

use serde::{Deserialize, Serialize};

/// Unique identifier for teams
pub type TeamId = String;

/// The final score of one completed match
///
/// Away/home distinction matters: the engine applies a home-field
/// adjustment. Scores are unsigned, so a negative score cannot be
/// represented. Results are created once by the input feed and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Season (calendar year) this match belongs to
    pub season: u16,
    /// Week of play, starting at 1
    pub week: u32,
    pub away_team: TeamId,
    pub away_score: u32,
    pub home_team: TeamId,
    pub home_score: u32,
}

impl MatchResult {
    pub fn new(
        season: u16,
        week: u32,
        away_team: impl Into<TeamId>,
        away_score: u32,
        home_team: impl Into<TeamId>,
        home_score: u32,
    ) -> Self {
        Self {
            season,
            week,
            away_team: away_team.into(),
            away_score,
            home_team: home_team.into(),
            home_score,
        }
    }

    /// Absolute score differential, used for margin-of-victory scaling
    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }

    /// True when both sides scored the same number of points
    pub fn is_tie(&self) -> bool {
        self.home_score == self.away_score
    }
}

/// One team's rating at a point in time, the unit of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRating {
    pub team: TeamId,
    pub rating: i32,
}

/// Rating movement for one participant of a processed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub team: TeamId,
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    /// Signed rating delta for this participant
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}
