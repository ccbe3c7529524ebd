//! Ranking and selection: pure post-processing over scored results.
//!
//! Selection recomputes nothing and never re-enters the scorers. Ordering
//! is fully deterministic: descending by score, with the order results
//! were produced in breaking ties.

use backbar_core::ScoredResult;

use crate::pairing::PairingMatch;

/// Score a recommendation must exceed to be shown.
pub const RECOMMENDATION_MIN_SCORE: u8 = 20;
/// Recommendation list length.
pub const RECOMMENDATION_LIMIT: usize = 10;
/// Leading slice of the recommendation list surfaced as top picks.
pub const TOP_PICKS: usize = 3;
/// Dish-pairing list length.
pub const PAIRING_LIMIT: usize = 8;

/// Anything carrying a 0–100 ranking score.
pub trait Ranked {
    /// The score selection sorts by.
    fn ranking_score(&self) -> u8;
}

impl Ranked for ScoredResult {
    fn ranking_score(&self) -> u8 {
        self.score
    }
}

impl Ranked for PairingMatch {
    fn ranking_score(&self) -> u8 {
        self.confidence
    }
}

/// Threshold, sort, and truncate `results`.
///
/// Entries scoring at or below `min_score` (when one is given) are
/// dropped; the rest sort descending by score with production order
/// breaking ties; the list is cut to `limit`. Selecting an already
/// selected list returns it unchanged.
///
/// # Examples
/// ```
/// use backbar_core::{Beverage, BeverageCategory, Reasons, ScoredResult};
/// use backbar_scorer::select;
///
/// let result = |id, score| {
///     let beverage = Beverage::new(id, "Pour", BeverageCategory::Wine, "red");
///     ScoredResult::new(beverage, score, Reasons::new())
/// };
/// let picked = select(vec![result(1, 15), result(2, 80), result(3, 45)], Some(20), 2);
/// let scores: Vec<u8> = picked.iter().map(|r| r.score).collect();
/// assert_eq!(scores, [80, 45]);
/// ```
#[must_use]
pub fn select<T: Ranked>(results: Vec<T>, min_score: Option<u8>, limit: usize) -> Vec<T> {
    let mut kept: Vec<T> = results
        .into_iter()
        .filter(|result| min_score.is_none_or(|threshold| result.ranking_score() > threshold))
        .collect();
    kept.sort_by(|a, b| b.ranking_score().cmp(&a.ranking_score()));
    kept.truncate(limit);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use backbar_core::{Beverage, BeverageCategory, Reasons};
    use rstest::rstest;

    fn result(id: u64, score: u8) -> ScoredResult {
        ScoredResult::new(
            Beverage::new(id, format!("Pour #{id}"), BeverageCategory::Wine, "red"),
            score,
            Reasons::new(),
        )
    }

    #[rstest]
    fn threshold_is_exclusive() {
        let picked = select(vec![result(1, 20), result(2, 21)], Some(20), 10);
        let ids: Vec<u64> = picked.iter().map(|r| r.beverage.id).collect();
        assert_eq!(ids, [2]);
    }

    #[rstest]
    fn ties_keep_production_order() {
        let picked = select(
            vec![result(1, 50), result(2, 80), result(3, 50)],
            None,
            10,
        );
        let ids: Vec<u64> = picked.iter().map(|r| r.beverage.id).collect();
        assert_eq!(ids, [2, 1, 3]);
    }

    #[rstest]
    fn selection_is_idempotent() {
        let input = vec![result(1, 30), result(2, 90), result(3, 10), result(4, 60)];
        let once = select(input, Some(20), 3);
        let twice = select(once.clone(), Some(20), 3);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn truncation_applies_after_sorting() {
        let picked = select(vec![result(1, 10), result(2, 99)], None, 1);
        let ids: Vec<u64> = picked.iter().map(|r| r.beverage.id).collect();
        assert_eq!(ids, [2]);
    }
}
