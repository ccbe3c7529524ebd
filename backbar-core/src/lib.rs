//! Core domain types for the Backbar matching engine.
//!
//! The crate models catalog snapshots, taste signals, and the shared flavor
//! math the scoring crates operate over. Constructors validate invariants
//! and return `Result` to surface invalid input early; the scoring paths
//! built on top of these types never fail.

#![forbid(unsafe_code)]

pub mod beverage;
pub mod dish;
pub mod flavor;
pub mod journal;
pub mod profile;
pub mod provider;
pub mod scored;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use beverage::{Beverage, BeverageCategory, BeverageId};
pub use dish::{
    DISH_TAXONOMY, DishCategory, DishCategoryProfile, IdealRange, categories_for, taxonomy_row,
};
pub use flavor::{FLAVOR_MAX, FLAVOR_MIN, FlavorAttribute, FlavorProfile, FlavorProfileError};
pub use journal::{JournalEntry, Rating, RatingError};
pub use profile::{MAX_PREFERRED_STYLES, PreferenceProfile, PriceRange, PriceRangeError};
pub use provider::{CatalogProvider, FavoritesProvider, JournalProvider, PreferenceStore};
pub use scored::{Reasons, ScoredResult, clamp_score};
