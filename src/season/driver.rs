//! Season driver: the week-by-week fold over match results
//!
//! Owns the rating book and the snapshot history for one season run.
//! Results are applied strictly in week order; each week's snapshot is
//! taken only after every result of that week has been applied, so an
//! aborted run leaves the history truncated at the last completed week.

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::rating::{EloEngine, RatingBook};
use crate::season::snapshot::{SeasonHistory, WeekSnapshot};
use crate::types::MatchResult;
use tracing::{debug, info};

/// Drives a full season of results through the rating engine
#[derive(Debug)]
pub struct SeasonDriver {
    engine: EloEngine,
    book: RatingBook,
    history: SeasonHistory,
}

impl SeasonDriver {
    /// Build a driver with every rostered team at the baseline rating
    pub fn new(config: &LeagueConfig) -> Result<Self> {
        config.validate()?;
        let engine = EloEngine::new(config.rating.clone())?;
        let book = RatingBook::new(&config.teams, config.rating.baseline_rating)?;
        Ok(Self {
            engine,
            book,
            history: SeasonHistory::new(),
        })
    }

    /// Capture the current ratings as the snapshot for the given week
    pub fn take_snapshot(&mut self, week: u32) {
        self.history.push(WeekSnapshot {
            week,
            ratings: self.book.capture(),
        });
    }

    /// Process an entire season of results
    ///
    /// Takes the week-0 baseline snapshot first, then for each week from 1
    /// through the highest week present in the input applies that week's
    /// results in their given order and snapshots the outcome. Weeks with
    /// no matches still receive a snapshot. An empty input is a valid
    /// degenerate run that produces only the baseline.
    ///
    /// Assumes no team plays twice in the same week; within-week order is
    /// simply input order. On error the history stays truncated at the last
    /// fully processed week and remains readable via [`Self::history`].
    pub fn run(&mut self, results: &[MatchResult]) -> Result<()> {
        self.take_snapshot(0);

        let total_weeks = results.iter().map(|r| r.week).max().unwrap_or(0);
        info!(
            teams = self.book.len(),
            results = results.len(),
            weeks = total_weeks,
            "starting season run"
        );

        for week in 1..=total_weeks {
            let mut applied = 0usize;
            for result in results.iter().filter(|r| r.week == week) {
                self.engine.apply_result(&mut self.book, result)?;
                applied += 1;
            }
            self.take_snapshot(week);
            debug!(week, applied, "week complete");
        }

        info!(snapshots = self.history.len(), "season run complete");
        Ok(())
    }

    /// Snapshot history accumulated so far
    pub fn history(&self) -> &SeasonHistory {
        &self.history
    }

    /// Current rating state
    pub fn ratings(&self) -> &RatingBook {
        &self.book
    }

    /// Consume the driver, keeping only the history
    pub fn into_history(self) -> SeasonHistory {
        self.history
    }
}

/// Run a season end to end, returning the full history
///
/// Convenience for the all-or-nothing case; use [`SeasonDriver`] directly
/// when a partially processed history must survive an error.
pub fn run_season(config: &LeagueConfig, results: &[MatchResult]) -> Result<SeasonHistory> {
    let mut driver = SeasonDriver::new(config)?;
    driver.run(results)?;
    Ok(driver.into_history())
}
