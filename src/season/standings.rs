//! Ranked standings derived from a weekly snapshot

use crate::season::snapshot::WeekSnapshot;
use crate::types::TeamId;
use serde::{Deserialize, Serialize};

/// One row of a ranked leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTeam {
    /// 1-based position after sorting by descending rating
    pub rank: u32,
    pub team: TeamId,
    pub rating: i32,
}

/// Rank a snapshot's teams by descending rating
///
/// The sort is stable, so teams with equal ratings keep their roster
/// order. Ranks are sequential even on ties, matching how the weekly
/// tables have always been displayed.
pub fn standings(snapshot: &WeekSnapshot) -> Vec<RankedTeam> {
    let mut ordered = snapshot.ratings.clone();
    ordered.sort_by_key(|entry| std::cmp::Reverse(entry.rating));

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedTeam {
            rank: index as u32 + 1,
            team: entry.team,
            rating: entry.rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamRating;

    fn snapshot(entries: &[(&str, i32)]) -> WeekSnapshot {
        WeekSnapshot {
            week: 5,
            ratings: entries
                .iter()
                .map(|(team, rating)| TeamRating {
                    team: team.to_string(),
                    rating: *rating,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sorted_by_descending_rating() {
        let table = standings(&snapshot(&[
            ("Ottawa", 1480),
            ("Toronto", 1530),
            ("Hamilton", 1510),
        ]));

        let order: Vec<&str> = table.iter().map(|row| row.team.as_str()).collect();
        assert_eq!(order, ["Toronto", "Hamilton", "Ottawa"]);
        assert_eq!(table[0].rank, 1);
        assert_eq!(table[2].rank, 3);
    }

    #[test]
    fn test_ties_keep_roster_order_with_sequential_ranks() {
        let table = standings(&snapshot(&[
            ("Ottawa", 1500),
            ("Toronto", 1500),
            ("Hamilton", 1520),
        ]));

        assert_eq!(table[0].team, "Hamilton");
        // Stable sort: Ottawa was declared before Toronto
        assert_eq!(table[1].team, "Ottawa");
        assert_eq!(table[2].team, "Toronto");
        assert_eq!(table[1].rank, 2);
        assert_eq!(table[2].rank, 3);
    }

    #[test]
    fn test_empty_snapshot_gives_empty_table() {
        assert!(standings(&snapshot(&[])).is_empty());
    }
}
