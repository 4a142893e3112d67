use crate::error::AnalyzerError;
use crate::report::ContestReport;
use configuration::{AnalysisConfig, ContestConfig};
use core_types::{Breed, ContestResult, Contestant};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Returned by `max_result` and `min_result` when no participant qualifies.
///
/// A roster of deliberately negative scores can produce a real `-1` total too;
/// callers cannot tell the two apart.
pub const NO_RESULT: i32 = -1;

/// The number of participants `three_leaders` keeps.
const PODIUM_SIZE: usize = 3;

/// A stateless calculator for contest statistics.
#[derive(Debug, Clone, Default)]
pub struct ContestAnalyzer {
    config: AnalysisConfig,
}

impl ContestAnalyzer {
    /// Creates an analyzer with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer from a loaded configuration, validating it first.
    pub fn with_config(config: ContestConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;
        Ok(Self {
            config: config.analysis,
        })
    }

    /// The settings this analyzer was built with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The highest total in the roster. Participants without a result count as 0.
    ///
    /// Returns `NO_RESULT` for an empty roster.
    pub fn max_result<T: Contestant>(&self, cats: &[T]) -> i32 {
        let max = cats.iter().map(score_of).max().unwrap_or(NO_RESULT);
        tracing::debug!("Max result over {} participants: {}", cats.len(), max);
        max
    }

    /// The lowest strictly positive total in the roster.
    ///
    /// Returns `NO_RESULT` when no participant has a positive total.
    pub fn min_result<T: Contestant>(&self, cats: &[T]) -> i32 {
        let min = cats
            .iter()
            .map(score_of)
            .filter(|&score| score > 0)
            .min()
            .unwrap_or(NO_RESULT);
        tracing::debug!("Min positive result over {} participants: {}", cats.len(), min);
        min
    }

    /// The mean total of the participants of `breed` that have competed.
    pub fn average_result_by_breed<T: Contestant>(&self, cats: &[T], breed: Breed) -> Option<f64> {
        let (total, count) = cats
            .iter()
            .filter(|cat| cat.breed() == breed)
            .filter_map(|cat| cat.contest_result())
            .fold((0i64, 0usize), |(total, count), result| {
                (total + i64::from(result.sum()), count + 1)
            });

        if count == 0 {
            tracing::debug!("No scored participants for breed {}", breed);
            return None;
        }

        let average = total as f64 / count as f64;
        tracing::debug!("Average for breed {}: {} over {} participants", breed, average, count);
        Some(average)
    }

    /// The competed participant with the highest total. Ties go to the earliest entry.
    pub fn winner<'a, T: Contestant>(&self, cats: &'a [T]) -> Option<&'a T> {
        let winner = cats
            .iter()
            .filter(|cat| cat.contest_result().is_some())
            .reduce(|best, cat| {
                if score_of(cat) > score_of(best) {
                    cat
                } else {
                    best
                }
            });
        tracing::debug!(
            "Winner over {} participants: {:?}",
            cats.len(),
            winner.map(score_of)
        );
        winner
    }

    /// The top three competed participants, highest total first.
    pub fn three_leaders<'a, T: Contestant>(&self, cats: &'a [T]) -> Vec<&'a T> {
        self.leaders(cats, PODIUM_SIZE)
    }

    /// The top `n` competed participants, highest total first.
    ///
    /// Equal totals keep their roster order.
    pub fn leaders<'a, T: Contestant>(&self, cats: &'a [T], n: usize) -> Vec<&'a T> {
        let mut ranked: Vec<&T> = cats
            .iter()
            .filter(|cat| cat.contest_result().is_some())
            .collect();

        // `sort_by_key` is stable.
        ranked.sort_by_key(|cat| Reverse(score_of(*cat)));
        ranked.truncate(n);
        tracing::debug!("Top {} of {} participants: {} ranked", n, cats.len(), ranked.len());
        ranked
    }

    /// The leaders, as many as `leaderboard_size` asks for.
    pub fn leaderboard<'a, T: Contestant>(&self, cats: &'a [T]) -> Vec<&'a T> {
        self.leaders(cats, self.config.leaderboard_size)
    }

    /// Whether every participant has competed with a strictly positive total.
    ///
    /// True for an empty roster.
    pub fn validate_result_sum_not_null<T: Contestant>(&self, cats: &[T]) -> bool {
        let valid = cats
            .iter()
            .all(|cat| cat.contest_result().is_some_and(|result| result.sum() > 0));
        tracing::debug!("Positive sums over {} participants: {}", cats.len(), valid);
        valid
    }

    /// Whether every participant has competed with all three sub-scores non-zero.
    ///
    /// Negative sub-scores pass. True for an empty roster.
    pub fn validate_all_results_set<T: Contestant>(&self, cats: &[T]) -> bool {
        let valid = cats.iter().all(|cat| {
            cat.contest_result().is_some_and(|result| {
                result.running() != 0 && result.jumping() != 0 && result.purring() != 0
            })
        });
        tracing::debug!("All results set over {} participants: {}", cats.len(), valid);
        valid
    }

    /// A competed participant of `breed` whose total beats the breed average.
    ///
    /// The first such participant in roster order is returned.
    pub fn find_any_with_above_average_result_by_breed<'a, T: Contestant>(
        &self,
        cats: &'a [T],
        breed: Breed,
    ) -> Option<&'a T> {
        let average = self.average_result_by_breed(cats, breed)?;

        let found = cats
            .iter()
            .filter(|cat| cat.breed() == breed && cat.contest_result().is_some())
            .find(|cat| f64::from(score_of(*cat)) > average);
        tracing::debug!(
            "Above-average {} over {} participants: {:?}",
            breed,
            cats.len(),
            found.map(score_of)
        );
        found
    }

    /// Runs every query against the roster and collects the answers.
    #[tracing::instrument(name = "contest_summarize", skip(self, cats), fields(participants = cats.len()))]
    pub fn summarize<T: Contestant>(&self, cats: &[T]) -> ContestReport {
        let breed_averages: BTreeMap<Breed, f64> = Breed::ALL
            .into_iter()
            .filter_map(|breed| {
                self.average_result_by_breed(cats, breed)
                    .map(|average| (breed, average))
            })
            .collect();

        let report = ContestReport {
            total_participants: cats.len(),
            scored_participants: cats
                .iter()
                .filter(|cat| cat.contest_result().is_some())
                .count(),
            max_result: self.max_result(cats),
            min_result: self.min_result(cats),
            winning_score: self.winner(cats).map(score_of),
            leaderboard: self.leaderboard(cats).into_iter().map(score_of).collect(),
            breed_averages,
            all_sums_positive: self.validate_result_sum_not_null(cats),
            all_results_set: self.validate_all_results_set(cats),
        };

        tracing::debug!(
            scored = report.scored_participants,
            winning_score = ?report.winning_score,
            "Contest summary complete."
        );
        report
    }
}

/// A participant's total, or 0 if they have not competed.
fn score_of<T: Contestant>(cat: &T) -> i32 {
    cat.contest_result().map_or(0, ContestResult::sum)
}
