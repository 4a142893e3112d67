use core_types::Breed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every analyzer query over one roster, gathered in a single snapshot.
///
/// This struct is the output of `ContestAnalyzer::summarize` and is what
/// callers hand on when they want the whole picture rather than one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestReport {
    // I. Roster
    pub total_participants: usize,
    pub scored_participants: usize,

    // II. Totals (`NO_RESULT` when nothing qualifies)
    pub max_result: i32,
    pub min_result: i32,

    // III. Ranking
    pub winning_score: Option<i32>, // None when nobody has competed
    pub leaderboard: Vec<i32>,      // Descending, at most `leaderboard_size` entries

    // IV. Breeds. Only breeds with at least one scored participant appear.
    pub breed_averages: BTreeMap<Breed, f64>,

    // V. Completeness
    pub all_sums_positive: bool,
    pub all_results_set: bool,
}

impl ContestReport {
    /// Whether at least one participant has competed.
    pub fn has_results(&self) -> bool {
        self.scored_participants > 0
    }

    /// Participants still waiting to compete.
    ///
    /// A report read back from elsewhere may carry inconsistent counts; those clamp to 0.
    pub fn pending_participants(&self) -> usize {
        self.total_participants.saturating_sub(self.scored_participants)
    }
}
