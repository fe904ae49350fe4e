//! Match result feed adapter
//!
//! The core consumes results as an in-memory slice; this adapter loads that
//! slice from a JSON file. Shape checks happen here at the boundary so the
//! engine can assume weeks start at 1.

use crate::error::{LeagueError, Result};
use crate::types::MatchResult;
use anyhow::Context;
use std::path::Path;

/// Load a season's results from a JSON file
///
/// The file holds an array of match result objects in schedule order.
pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<MatchResult>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file {}", path.display()))?;
    results_from_json(&contents)
}

/// Parse results from a JSON string
pub fn results_from_json(contents: &str) -> Result<Vec<MatchResult>> {
    let results: Vec<MatchResult> =
        serde_json::from_str(contents).context("Failed to parse results JSON")?;

    for result in &results {
        if result.week == 0 {
            return Err(LeagueError::InvalidResult {
                reason: format!(
                    "{} at {}: week numbers start at 1",
                    result.away_team, result.home_team
                ),
            }
            .into());
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_array() {
        let results = results_from_json(
            r#"[
                {"season": 2025, "week": 1, "away_team": "Ottawa", "away_score": 26,
                 "home_team": "Saskatchewan", "home_score": 31},
                {"season": 2025, "week": 2, "away_team": "BC", "away_score": 20,
                 "home_team": "Winnipeg", "home_score": 34}
            ]"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].away_team, "Ottawa");
        assert_eq!(results[1].week, 2);
    }

    #[test]
    fn test_empty_array_is_allowed() {
        assert!(results_from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_week_zero_is_rejected() {
        let err = results_from_json(
            r#"[{"season": 2025, "week": 0, "away_team": "A", "away_score": 1,
                 "home_team": "B", "home_score": 2}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("week numbers start at 1"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(results_from_json("{not json").is_err());
    }
}
