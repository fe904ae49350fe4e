//! Elo-style rating engine with home-field adjustment and margin scaling
//!
//! This module implements the rating update applied after each match: a
//! logistic expected-outcome model offset by home-field advantage, scaled
//! by the logarithm of the score differential, with results rounded to
//! whole rating points.

use crate::config::RatingConfig;
use crate::error::{LeagueError, Result};
use crate::rating::storage::RatingBook;
use crate::types::{MatchResult, RatingChange};
use tracing::debug;

/// Round a rating update to the nearest whole point, halves away from zero
pub fn round_rating(value: f64) -> i32 {
    value.round() as i32
}

/// Rating calculator owning the model constants
///
/// The engine holds no rating state of its own; callers pass the shared
/// `RatingBook` into every update, which keeps the engine trivially
/// testable with any caller-supplied state.
#[derive(Debug, Clone)]
pub struct EloEngine {
    config: RatingConfig,
}

impl EloEngine {
    /// Create an engine from validated model constants
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Expected scores `(away, home)` for the given pre-match ratings
    ///
    /// Each side's rating gap carries the full home-field offset, exactly
    /// as the reference model defines it: `away_diff = home − away + HFA`
    /// and `home_diff = away − home − HFA`.
    pub fn expected_scores(&self, away_rating: i32, home_rating: i32) -> (f64, f64) {
        let hfa = self.config.home_field_advantage;
        let away_diff = f64::from(home_rating - away_rating) + hfa;
        let home_diff = f64::from(away_rating - home_rating) - hfa;
        (logistic_expectation(away_diff), logistic_expectation(home_diff))
    }

    /// Margin-of-victory scaling factor: `K * ln(|score diff| + 1)`
    ///
    /// A tied match has margin 0, so the factor collapses to 0 and the
    /// ratings do not move regardless of the prior gap.
    pub fn margin_factor(&self, result: &MatchResult) -> f64 {
        self.config.k_factor * f64::from(result.margin() + 1).ln()
    }

    /// Apply one match result, writing both participants' new ratings
    ///
    /// Both updates are computed from the same pre-match state before
    /// either write happens, so neither side ever observes the other's
    /// already-updated rating. Returns the away and home changes, in that
    /// order. On error nothing is written.
    pub fn apply_result(
        &self,
        book: &mut RatingBook,
        result: &MatchResult,
    ) -> Result<(RatingChange, RatingChange)> {
        if result.away_team == result.home_team {
            return Err(LeagueError::InvalidResult {
                reason: format!("{} cannot play itself", result.home_team),
            }
            .into());
        }

        let away_rating = book.rating(&result.away_team)?;
        let home_rating = book.rating(&result.home_team)?;

        let (expected_away, expected_home) = self.expected_scores(away_rating, home_rating);
        let k_mod = self.margin_factor(result);

        let (actual_away, actual_home) = match result.home_score.cmp(&result.away_score) {
            std::cmp::Ordering::Greater => (0.0, 1.0),
            std::cmp::Ordering::Less => (1.0, 0.0),
            std::cmp::Ordering::Equal => (0.5, 0.5),
        };

        let new_away = round_rating(f64::from(away_rating) + k_mod * (actual_away - expected_away));
        let new_home = round_rating(f64::from(home_rating) + k_mod * (actual_home - expected_home));

        book.set_rating(&result.away_team, new_away)?;
        book.set_rating(&result.home_team, new_home)?;

        debug!(
            week = result.week,
            away = %result.away_team,
            home = %result.home_team,
            score = %format!("{}-{}", result.away_score, result.home_score),
            away_rating = new_away,
            home_rating = new_home,
            "applied result"
        );

        Ok((
            RatingChange {
                team: result.away_team.clone(),
                old_rating: away_rating,
                new_rating: new_away,
            },
            RatingChange {
                team: result.home_team.clone(),
                old_rating: home_rating,
                new_rating: new_home,
            },
        ))
    }
}

/// Logistic win expectation for a rating gap: `1 / (10^(diff/400) + 1)`
fn logistic_expectation(diff: f64) -> f64 {
    1.0 / (10f64.powf(diff / 400.0) + 1.0)
}
