//! Weekly rating snapshots and the season history they accumulate into

use crate::types::{TeamId, TeamRating};
use serde::{Deserialize, Serialize};

/// Every team's rating at one week boundary
///
/// Week 0 is the baseline captured before any match is applied. Entries
/// follow roster declaration order, which is stable across all snapshots
/// of a run. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub week: u32,
    pub ratings: Vec<TeamRating>,
}

impl WeekSnapshot {
    /// Rating of a single team in this snapshot, if rostered
    pub fn rating_of(&self, team: &str) -> Option<i32> {
        self.ratings
            .iter()
            .find(|entry| entry.team == team)
            .map(|entry| entry.rating)
    }
}

/// Append-only sequence of weekly snapshots, one per week starting at 0
///
/// Grows by exactly one snapshot per processed week and is never mutated
/// after the run completes. A history that ends before the schedule does
/// means processing stopped at its last recorded week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonHistory {
    snapshots: Vec<WeekSnapshot>,
}

impl SeasonHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next week's snapshot
    ///
    /// Panics in debug builds if weeks arrive out of order; the driver is
    /// the only writer and always appends consecutively from 0.
    pub(crate) fn push(&mut self, snapshot: WeekSnapshot) {
        debug_assert_eq!(snapshot.week as usize, self.snapshots.len());
        self.snapshots.push(snapshot);
    }

    /// All snapshots in week order
    pub fn snapshots(&self) -> &[WeekSnapshot] {
        &self.snapshots
    }

    /// The most recent snapshot, if any week has been captured
    pub fn latest(&self) -> Option<&WeekSnapshot> {
        self.snapshots.last()
    }

    /// The snapshot for a specific week
    pub fn week(&self, week: u32) -> Option<&WeekSnapshot> {
        self.snapshots.get(week as usize)
    }

    /// Number of captured weeks, including the week-0 baseline
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// One team's `(week, rating)` trajectory across the whole history
    ///
    /// This is the series a chart plots per team.
    pub fn team_series(&self, team: &str) -> Vec<(u32, i32)> {
        self.snapshots
            .iter()
            .filter_map(|snapshot| {
                snapshot
                    .rating_of(team)
                    .map(|rating| (snapshot.week, rating))
            })
            .collect()
    }

    /// Teams present in the history, in roster declaration order
    pub fn teams(&self) -> Vec<TeamId> {
        self.snapshots
            .first()
            .map(|snapshot| {
                snapshot
                    .ratings
                    .iter()
                    .map(|entry| entry.team.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(week: u32, entries: &[(&str, i32)]) -> WeekSnapshot {
        WeekSnapshot {
            week,
            ratings: entries
                .iter()
                .map(|(team, rating)| TeamRating {
                    team: team.to_string(),
                    rating: *rating,
                })
                .collect(),
        }
    }

    fn sample_history() -> SeasonHistory {
        let mut history = SeasonHistory::new();
        history.push(snapshot(0, &[("Ottawa", 1500), ("Toronto", 1500)]));
        history.push(snapshot(1, &[("Ottawa", 1534), ("Toronto", 1466)]));
        history.push(snapshot(2, &[("Ottawa", 1521), ("Toronto", 1479)]));
        history
    }

    #[test]
    fn test_latest_and_week_lookup() {
        let history = sample_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().week, 2);
        assert_eq!(history.week(1).unwrap().rating_of("Ottawa"), Some(1534));
        assert!(history.week(3).is_none());
    }

    #[test]
    fn test_team_series() {
        let history = sample_history();
        assert_eq!(
            history.team_series("Toronto"),
            vec![(0, 1500), (1, 1466), (2, 1479)]
        );
        assert!(history.team_series("Moncton").is_empty());
    }

    #[test]
    fn test_teams_follow_snapshot_order() {
        let history = sample_history();
        assert_eq!(history.teams(), vec!["Ottawa", "Toronto"]);
        assert!(SeasonHistory::new().teams().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let history = sample_history();
        let json = serde_json::to_string(&history).unwrap();
        let back: SeasonHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
