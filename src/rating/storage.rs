//! Rating state storage
//!
//! The single piece of mutable shared state in the system: a mapping from
//! each rostered team to its current rating. The roster is fixed at
//! construction time; no team is added or removed during processing, and
//! iteration always follows roster declaration order so snapshots stay
//! stable across the whole run.

use crate::error::{LeagueError, Result};
use crate::types::{TeamId, TeamRating};
use std::collections::HashMap;

/// Current ratings for a fixed roster of teams, in declaration order
#[derive(Debug, Clone)]
pub struct RatingBook {
    order: Vec<TeamId>,
    ratings: HashMap<TeamId, i32>,
}

impl RatingBook {
    /// Create a book with every team at the baseline rating
    ///
    /// Fails if the roster is empty or contains duplicates.
    pub fn new(teams: &[TeamId], baseline: i32) -> Result<Self> {
        if teams.is_empty() {
            return Err(LeagueError::ConfigurationError {
                message: "Cannot build a rating book for an empty roster".to_string(),
            }
            .into());
        }

        let mut ratings = HashMap::with_capacity(teams.len());
        for team in teams {
            if ratings.insert(team.clone(), baseline).is_some() {
                return Err(LeagueError::ConfigurationError {
                    message: format!("Duplicate team in roster: {}", team),
                }
                .into());
            }
        }

        Ok(Self {
            order: teams.to_vec(),
            ratings,
        })
    }

    /// Current rating for a team
    pub fn rating(&self, team: &str) -> Result<i32> {
        self.ratings
            .get(team)
            .copied()
            .ok_or_else(|| {
                LeagueError::UnknownTeam {
                    team: team.to_string(),
                }
                .into()
            })
    }

    /// Overwrite a team's rating
    pub fn set_rating(&mut self, team: &str, rating: i32) -> Result<()> {
        match self.ratings.get_mut(team) {
            Some(entry) => {
                *entry = rating;
                Ok(())
            }
            None => Err(LeagueError::UnknownTeam {
                team: team.to_string(),
            }
            .into()),
        }
    }

    /// True if the team is part of the roster
    pub fn contains(&self, team: &str) -> bool {
        self.ratings.contains_key(team)
    }

    /// Number of rostered teams
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Teams in roster declaration order
    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.order.iter()
    }

    /// `(team, rating)` pairs in roster declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&TeamId, i32)> {
        self.order.iter().map(|team| (team, self.ratings[team]))
    }

    /// Capture the current state as owned `TeamRating` records
    pub fn capture(&self) -> Vec<TeamRating> {
        self.iter()
            .map(|(team, rating)| TeamRating {
                team: team.clone(),
                rating,
            })
            .collect()
    }
}
