//! Season processing and snapshot history
//!
//! The season driver feeds each week's results through the rating engine in
//! chronological order and captures a snapshot of every team's rating at
//! each week boundary. The resulting history is the artifact consumed by
//! tables and charts.

pub mod driver;
pub mod snapshot;
pub mod standings;

// Re-export commonly used types
pub use driver::{run_season, SeasonDriver};
pub use snapshot::{SeasonHistory, WeekSnapshot};
pub use standings::{standings, RankedTeam};
