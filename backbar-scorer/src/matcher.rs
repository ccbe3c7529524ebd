//! Beverage match scoring: additive, individually capped signals.
//!
//! Each signal contributes independently, reasons are voiced in the fixed
//! evaluation order, and the total is clamped into `0..=100`. Missing
//! optional data contributes nothing; scoring never fails.

use backbar_core::{
    Beverage, BeverageId, JournalEntry, PreferenceProfile, Reasons, ScoredResult, clamp_score,
};

use crate::types::MatchWeights;

/// Per-beverage user signals the scorer folds in alongside the profile.
#[derive(Debug, Clone, Default)]
pub struct MatchContext<'a> {
    /// Whether the beverage itself is favorited.
    pub is_favorite: bool,
    /// The user's journal entry for this beverage, if any.
    pub journal_entry: Option<&'a JournalEntry>,
    /// Other favorited beverages, for similarity detection.
    pub other_favorites: Vec<&'a Beverage>,
}

impl<'a> MatchContext<'a> {
    /// Collect the context for `beverage` from snapshot slices.
    ///
    /// The journal is append-only, so the first entry referencing the
    /// beverage is the one used. Favorites that no longer resolve against
    /// the catalog are ignored.
    #[must_use]
    pub fn gather(
        beverage: &Beverage,
        favorites: &[BeverageId],
        journal: &'a [JournalEntry],
        catalog: &'a [Beverage],
    ) -> Self {
        let is_favorite = favorites.contains(&beverage.id);
        let journal_entry = journal
            .iter()
            .find(|entry| entry.beverage_id == Some(beverage.id));
        let other_favorites = favorites
            .iter()
            .filter(|&&id| id != beverage.id)
            .filter_map(|&id| catalog.iter().find(|candidate| candidate.id == id))
            .collect();
        Self {
            is_favorite,
            journal_entry,
            other_favorites,
        }
    }
}

/// Scores a single beverage against a preference profile.
///
/// # Examples
/// ```
/// use backbar_core::{Beverage, BeverageCategory, FlavorProfile, PreferenceProfile, PriceRange};
/// use backbar_scorer::{BeverageMatcher, MatchContext};
///
/// let rioja = Beverage::new(1, "Rioja Reserva", BeverageCategory::Wine, "red")
///     .with_price(40)
///     .with_flavor(FlavorProfile::new(3, 2, 3, 3).expect("valid profile"));
/// let profile = PreferenceProfile::new(FlavorProfile::new(3, 2, 3, 3).expect("valid profile"))
///     .with_style("red")
///     .with_price_range(PriceRange::new(0, 50).expect("valid band"));
///
/// let result = BeverageMatcher::new().score(&rioja, &profile, &MatchContext::default());
/// assert_eq!(result.score, 70);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BeverageMatcher {
    weights: MatchWeights,
}

impl BeverageMatcher {
    /// A matcher with the production weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A matcher with a custom weight table.
    #[must_use]
    pub const fn with_weights(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Score `beverage` against `profile`, folding in the user's signals.
    #[must_use]
    pub fn score(
        &self,
        beverage: &Beverage,
        profile: &PreferenceProfile,
        context: &MatchContext<'_>,
    ) -> ScoredResult {
        let weights = self.weights;
        let mut total = 0_i32;
        let mut reasons = Reasons::new();

        if profile.prefers_style(&beverage.style) {
            total += weights.style_match;
            reasons.push(format!(
                "Matches your preferred {} style",
                beverage.style
            ));
        }

        if let (Some(price), Some(band)) = (beverage.price, profile.price_range()) {
            if band.contains(price) {
                total += weights.price_in_range;
            } else if price < band.min() {
                total += weights.price_below_range;
                reasons.push("Great value option");
            }
        }

        let flavor = beverage.flavor_or_default();
        let distance = i32::from(flavor.distance(profile.flavor()));
        let flavor_term = (weights.flavor_ceiling - weights.flavor_slope * distance).max(0);
        total += flavor_term;
        if flavor_term >= weights.flavor_reason_threshold {
            reasons.push("Matches your flavor preferences");
        }

        if profile.avoid_high_tannins() && flavor.tannins() >= weights.high_tannin_cutoff {
            total -= weights.high_tannin_penalty;
        }

        if context.is_favorite {
            total += weights.favorite;
            reasons.push("One of your favorites");
        }

        if let Some(entry) = context.journal_entry {
            if entry.rating.is_positive() {
                total += weights.journal_rating;
                reasons.push(format!("You rated this {}/5", entry.rating.get()));
            } else if entry.rating.is_negative() {
                total -= weights.journal_rating;
            }
        }

        if beverage.featured {
            total += weights.featured;
            reasons.push("Staff pick");
        }

        let shares_a_favorite_style = context.other_favorites.iter().any(|other| {
            other.id != beverage.id && other.style.eq_ignore_ascii_case(&beverage.style)
        });
        if shares_a_favorite_style {
            total += weights.similar_favorite;
            reasons.push("Similar to wines you love");
        }

        ScoredResult::new(beverage.clone(), clamp_score(total), reasons)
    }
}
