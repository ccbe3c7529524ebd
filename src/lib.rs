//! Facade crate for the Backbar recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring surfaces so
//! applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use backbar_core::{
    Beverage, BeverageCategory, BeverageId, CatalogProvider, DishCategory, FavoritesProvider,
    FlavorAttribute, FlavorProfile, FlavorProfileError, JournalEntry, JournalProvider,
    PreferenceProfile, PreferenceStore, PriceRange, PriceRangeError, Rating, RatingError, Reasons,
    ScoredResult,
};

pub use backbar_scorer::{
    BeverageMatcher, LearnedPreferences, MatchContext, MatchWeights, Occasion, PairingMatch,
    PairingResolver, PairingWeights, PreferenceSource, Recommender, learn, select,
};
