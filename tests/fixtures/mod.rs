//! Test fixtures for integration testing
//!
//! Provides a nine-team league roster and an excerpt of a real season
//! schedule so tests exercise the same shape of data the engine sees in
//! production: four matches per week, one idle team on bye.

use gridiron_elo::config::LeagueConfig;
use gridiron_elo::types::MatchResult;

/// Nine-team league with default rating constants (K = HFA = 25, baseline 1500)
pub fn league_config() -> LeagueConfig {
    LeagueConfig {
        name: "CFL".to_string(),
        season: 2025,
        teams: [
            "BC",
            "Calgary",
            "Edmonton",
            "Hamilton",
            "Montreal",
            "Ottawa",
            "Saskatchewan",
            "Toronto",
            "Winnipeg",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        rating: Default::default(),
    }
}

/// Shorthand for building one 2025 result
pub fn result(week: u32, away: &str, away_score: u32, home: &str, home_score: u32) -> MatchResult {
    MatchResult::new(2025, week, away, away_score, home, home_score)
}

/// The first three weeks of the 2025 schedule
pub fn opening_weeks() -> Vec<MatchResult> {
    vec![
        result(1, "Ottawa", 26, "Saskatchewan", 31),
        result(1, "Toronto", 10, "Montreal", 28),
        result(1, "Hamilton", 26, "Calgary", 38),
        result(1, "Edmonton", 14, "BC", 31),
        result(2, "BC", 20, "Winnipeg", 34),
        result(2, "Montreal", 39, "Ottawa", 18),
        result(2, "Calgary", 29, "Toronto", 19),
        result(2, "Saskatchewan", 28, "Hamilton", 23),
        result(3, "Montreal", 38, "Edmonton", 28),
        result(3, "Saskatchewan", 39, "Toronto", 32),
        result(3, "Ottawa", 20, "Calgary", 12),
        result(3, "Winnipeg", 27, "BC", 14),
    ]
}
