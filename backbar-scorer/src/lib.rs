//! Flavor-profile matching and recommendation scoring for Backbar.
//!
//! The crate turns a user's taste signals and a catalog snapshot into
//! ranked, explained match lists:
//! - **Preference learning** derives an implicit profile from favorites and
//!   highly rated journal entries when no explicit preferences exist.
//! - **Beverage matching** scores a single beverage against a profile with
//!   additive, individually capped signals and human-readable reasons.
//! - **Dish pairing** merges text overlap with category flavor fit into a
//!   confidence figure per beverage.
//! - **Ranking** thresholds, stably sorts, and truncates the results.
//!
//! Everything is pure and synchronous: given immutable snapshots, every
//! function is deterministic and side-effect free, so repeated calls with
//! the same inputs are idempotent and trivially safe to run concurrently.
//!
//! # Examples
//!
//! ```
//! use backbar_core::{Beverage, BeverageCategory, FlavorProfile};
//! use backbar_scorer::Recommender;
//!
//! let catalog = vec![
//!     Beverage::new(1, "Mendoza Malbec", BeverageCategory::Wine, "red")
//!         .with_price(38)
//!         .with_flavor(FlavorProfile::new(4, 2, 4, 3).expect("valid profile"))
//!         .with_pairings(["Steak"]),
//! ];
//! let favorites = vec![1];
//!
//! let recommender = Recommender::new(&catalog, &favorites, &[], None);
//! let pairings = recommender.pair_with_dishes(&["Grilled Steak".into()]);
//! assert_eq!(pairings.len(), 1);
//! ```

#![forbid(unsafe_code)]

mod learner;
mod matcher;
mod occasion;
mod pairing;
mod rank;
mod recommend;
mod types;

pub use learner::{LearnedPreferences, PreferenceSource, learn};
pub use matcher::{BeverageMatcher, MatchContext};
pub use occasion::{OCCASION_TABLE, Occasion, OccasionProfile};
pub use pairing::{PairingMatch, PairingResolver};
pub use rank::{
    PAIRING_LIMIT, RECOMMENDATION_LIMIT, RECOMMENDATION_MIN_SCORE, Ranked, TOP_PICKS, select,
};
pub use recommend::Recommender;
pub use types::{MatchWeights, PairingWeights};
