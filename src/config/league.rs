//! League configuration
//!
//! Defines the fixed roster of rated teams and the season it covers.
//! The roster's declaration order is the stable team order used by every
//! snapshot, so config files double as the display order.

use crate::config::rating::RatingConfig;
use crate::error::{LeagueError, Result};
use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Complete league configuration: roster, season, and model constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Display name for logging and report output
    pub name: String,
    /// Season (calendar year) covered by the result feed
    pub season: u16,
    /// Fixed set of rated teams, in display order
    pub teams: Vec<TeamId>,
    /// Rating model constants
    #[serde(default)]
    pub rating: RatingConfig,
}

impl LeagueConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LeagueError::ConfigurationError {
                message: "League name cannot be empty".to_string(),
            }
            .into());
        }

        if self.teams.is_empty() {
            return Err(LeagueError::ConfigurationError {
                message: "League must declare at least one team".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for team in &self.teams {
            if team.is_empty() {
                return Err(LeagueError::ConfigurationError {
                    message: "Team names cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(team) {
                return Err(LeagueError::ConfigurationError {
                    message: format!("Duplicate team in roster: {}", team),
                }
                .into());
            }
        }

        self.rating.validate()
    }
}
