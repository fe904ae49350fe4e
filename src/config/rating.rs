//! Rating model configuration

use serde::{Deserialize, Serialize};

/// Tunable constants of the rating model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Base adjustment magnitude (K), scaled by margin of victory
    pub k_factor: f64,
    /// Home-field advantage in rating points, applied to both expected scores
    pub home_field_advantage: f64,
    /// Rating every team starts the season with
    pub baseline_rating: i32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 25.0,
            home_field_advantage: 25.0,
            baseline_rating: 1500,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.k_factor <= 0.0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "K factor must be positive".to_string(),
            }
            .into());
        }

        if self.home_field_advantage < 0.0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "Home-field advantage must be non-negative".to_string(),
            }
            .into());
        }

        if self.baseline_rating <= 0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "Baseline rating must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RatingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.k_factor, 25.0);
        assert_eq!(config.home_field_advantage, 25.0);
        assert_eq!(config.baseline_rating, 1500);
    }

    #[test]
    fn test_rejects_non_positive_k() {
        let config = RatingConfig {
            k_factor: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RatingConfig {
            k_factor: -5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_hfa() {
        let config = RatingConfig {
            home_field_advantage: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_hfa_is_allowed() {
        // A neutral-site league is a legal configuration
        let config = RatingConfig {
            home_field_advantage: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
