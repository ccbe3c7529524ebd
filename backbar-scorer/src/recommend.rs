//! The engine facade: one snapshot in, ranked explained lists out.
//!
//! A [`Recommender`] borrows one coherent snapshot of the user's library
//! and exposes the query surfaces the UI consumes. Everything is
//! recomputed per call from the borrowed snapshot; the engine caches
//! nothing, so callers own snapshot freshness.

use backbar_core::{
    Beverage, BeverageId, CatalogProvider, FavoritesProvider, JournalEntry, JournalProvider,
    PreferenceProfile, PreferenceStore, ScoredResult,
};
use log::trace;

use crate::learner::{PreferenceSource, price_band};
use crate::matcher::{BeverageMatcher, MatchContext};
use crate::occasion::Occasion;
use crate::pairing::{PairingMatch, PairingResolver};
use crate::rank::{
    PAIRING_LIMIT, RECOMMENDATION_LIMIT, RECOMMENDATION_MIN_SCORE, TOP_PICKS, select,
};

/// Scores one coherent snapshot of the user's library.
///
/// # Examples
/// ```
/// use backbar_core::{Beverage, BeverageCategory, FlavorProfile};
/// use backbar_scorer::Recommender;
///
/// let catalog = vec![
///     Beverage::new(1, "Mendoza Malbec", BeverageCategory::Wine, "red")
///         .with_price(38)
///         .with_flavor(FlavorProfile::new(4, 2, 4, 3).expect("valid profile")),
///     Beverage::new(2, "Grüner Veltliner", BeverageCategory::Wine, "white")
///         .with_price(30)
///         .with_flavor(FlavorProfile::new(2, 2, 1, 4).expect("valid profile")),
/// ];
/// let favorites = vec![1];
///
/// let recommender = Recommender::new(&catalog, &favorites, &[], None);
/// let ranked = recommender.recommendations();
/// assert_eq!(ranked.first().map(|r| r.beverage.id), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    catalog: &'a [Beverage],
    favorites: &'a [BeverageId],
    journal: &'a [JournalEntry],
    preferences: Option<&'a PreferenceProfile>,
    matcher: BeverageMatcher,
    resolver: PairingResolver,
}

impl<'a> Recommender<'a> {
    /// Build from raw snapshot slices.
    #[must_use]
    pub fn new(
        catalog: &'a [Beverage],
        favorites: &'a [BeverageId],
        journal: &'a [JournalEntry],
        preferences: Option<&'a PreferenceProfile>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            journal,
            preferences,
            matcher: BeverageMatcher::new(),
            resolver: PairingResolver::new(),
        }
    }

    /// Build from a library implementing every provider seam.
    #[must_use]
    pub fn from_providers<P>(library: &'a P) -> Self
    where
        P: CatalogProvider + FavoritesProvider + JournalProvider + PreferenceStore,
    {
        Self::new(
            library.beverages(),
            library.favorites(),
            library.entries(),
            library.preferences(),
        )
    }

    /// The profile scoring uses: explicit when stored, learned otherwise.
    #[must_use]
    pub fn profile(&self) -> PreferenceProfile {
        let source = self.preferences.map_or(
            PreferenceSource::Learned {
                favorites: self.favorites,
                journal: self.journal,
            },
            PreferenceSource::Explicit,
        );
        source.resolve(self.catalog)
    }

    /// Ranked personalized recommendations over the available catalog.
    #[must_use]
    pub fn recommendations(&self) -> Vec<ScoredResult> {
        let profile = self.profile();
        self.ranked(
            self.catalog.iter().filter(|beverage| beverage.available),
            &profile,
        )
    }

    /// The leading recommendations.
    #[must_use]
    pub fn top_picks(&self) -> Vec<ScoredResult> {
        let mut picks = self.recommendations();
        picks.truncate(TOP_PICKS);
        picks
    }

    /// Beverages similar to `id`: candidates ranked against a profile
    /// derived from the target's own style, flavor, and price band, with
    /// the target excluded. An unknown id yields an empty list.
    #[must_use]
    pub fn similar_to(&self, id: BeverageId) -> Vec<ScoredResult> {
        let Some(target) = self.catalog.iter().find(|beverage| beverage.id == id) else {
            trace!("similar-to query for unknown beverage {id}");
            return Vec::new();
        };
        let mut profile =
            PreferenceProfile::new(target.flavor_or_default()).with_style(target.style.clone());
        if let Some(band) = target.price.and_then(price_band) {
            profile = profile.with_price_range(band);
        }
        self.ranked(
            self.catalog
                .iter()
                .filter(|beverage| beverage.available && beverage.id != id),
            &profile,
        )
    }

    /// Recommendations narrowed to an occasion before scoring.
    #[must_use]
    pub fn for_occasion(&self, occasion: Occasion) -> Vec<ScoredResult> {
        let profile = self.profile();
        self.ranked(
            self.catalog
                .iter()
                .filter(|beverage| beverage.available && occasion.admits(beverage)),
            &profile,
        )
    }

    /// Ranked dish pairings over the available catalog.
    #[must_use]
    pub fn pair_with_dishes(&self, dishes: &[String]) -> Vec<PairingMatch> {
        let matches = self
            .resolver
            .resolve(dishes, self.catalog)
            .into_iter()
            .filter(|matched| matched.beverage.available)
            .collect();
        select(matches, None, PAIRING_LIMIT)
    }

    fn ranked<I>(&self, candidates: I, profile: &PreferenceProfile) -> Vec<ScoredResult>
    where
        I: Iterator<Item = &'a Beverage>,
    {
        let scored = candidates
            .map(|beverage| {
                let context =
                    MatchContext::gather(beverage, self.favorites, self.journal, self.catalog);
                self.matcher.score(beverage, profile, &context)
            })
            .collect();
        select(scored, Some(RECOMMENDATION_MIN_SCORE), RECOMMENDATION_LIMIT)
    }
}
