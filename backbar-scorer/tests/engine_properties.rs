//! Property-based tests for the engine invariants.
//!
//! These complement the example-based scenario tests by asserting what must
//! hold for all valid inputs:
//!
//! - **Bounded score:** every match score and pairing confidence fits in
//!   `0..=100`.
//! - **Determinism:** identical inputs always produce identical output.
//! - **Monotonic flavor distance:** a closer flavor never scores lower when
//!   flavor is the only signal.
//! - **Idempotent selection:** selecting an already selected list is a
//!   no-op.
//! - **No duplicate reasons:** justification lists never repeat a string.

use std::collections::HashSet;

use backbar_core::{
    Beverage, BeverageCategory, FlavorProfile, PreferenceProfile, PriceRange, Reasons,
    ScoredResult,
};
use backbar_scorer::{BeverageMatcher, MatchContext, PairingResolver, select};
use proptest::prelude::*;

fn flavor_strategy() -> impl Strategy<Value = FlavorProfile> {
    (1_u8..=5, 1_u8..=5, 1_u8..=5, 1_u8..=5).prop_map(|(body, sweetness, tannins, acidity)| {
        FlavorProfile::new(body, sweetness, tannins, acidity).expect("generated on the scale")
    })
}

fn style_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["red", "white", "ipa", "stout", "gin", "mezcal"])
}

fn beverage_strategy() -> impl Strategy<Value = Beverage> {
    (
        1_u64..64,
        style_strategy(),
        proptest::option::of(1_u32..150),
        proptest::option::of(flavor_strategy()),
        any::<bool>(),
        proptest::collection::vec(
            prop::sample::select(vec!["Steak", "Oysters", "Salad", "Chocolate Cake", "Brie"]),
            0..3,
        ),
    )
        .prop_map(|(id, style, price, flavor, featured, pairings)| {
            let mut beverage = Beverage::new(id, format!("Pour #{id}"), BeverageCategory::Wine, style)
                .with_pairings(pairings);
            beverage.price = price;
            beverage.flavor = flavor;
            beverage.featured = featured;
            beverage
        })
}

fn profile_strategy() -> impl Strategy<Value = PreferenceProfile> {
    (
        flavor_strategy(),
        proptest::collection::vec(style_strategy(), 0..4),
        proptest::option::of((0_u32..80, 0_u32..80)),
        any::<bool>(),
    )
        .prop_map(|(flavor, styles, band, avoid)| {
            let mut profile = PreferenceProfile::new(flavor);
            for style in styles {
                profile = profile.with_style(style);
            }
            if let Some((a, b)) = band {
                let range =
                    PriceRange::new(a.min(b), a.max(b)).expect("ordered bounds are valid");
                profile = profile.with_price_range(range);
            }
            if avoid {
                profile = profile.avoiding_high_tannins();
            }
            profile
        })
}

fn dishes_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        prop::sample::select(vec!["Steak", "Oysters", "Salad", "Chocolate Cake", "Miso Soup"])
            .prop_map(str::to_owned),
        0..4,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn match_scores_stay_in_band(
        beverage in beverage_strategy(),
        profile in profile_strategy(),
    ) {
        let result = BeverageMatcher::new().score(&beverage, &profile, &MatchContext::default());
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn scoring_is_deterministic(
        beverage in beverage_strategy(),
        profile in profile_strategy(),
    ) {
        let matcher = BeverageMatcher::new();
        let first = matcher.score(&beverage, &profile, &MatchContext::default());
        let second = matcher.score(&beverage, &profile, &MatchContext::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn closer_flavors_never_score_lower(
        near in flavor_strategy(),
        far in flavor_strategy(),
        target in flavor_strategy(),
    ) {
        // Flavor is the only live signal: no styles, no band, no context.
        let profile = PreferenceProfile::new(target);
        let matcher = BeverageMatcher::new();
        let bottle = |id: u64, flavor: FlavorProfile| {
            Beverage::new(id, "Pour", BeverageCategory::Wine, "red").with_flavor(flavor)
        };
        let near_score = matcher
            .score(&bottle(1, near), &profile, &MatchContext::default())
            .score;
        let far_score = matcher
            .score(&bottle(2, far), &profile, &MatchContext::default())
            .score;
        if near.distance(target) <= far.distance(target) {
            prop_assert!(near_score >= far_score);
        }
    }

    #[test]
    fn selection_is_idempotent(
        scores in proptest::collection::vec(0_u8..=100, 0..24),
        threshold in proptest::option::of(0_u8..=100),
        limit in 0_usize..12,
    ) {
        let results: Vec<ScoredResult> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| {
                let id = u64::try_from(index).expect("small index");
                let beverage = Beverage::new(id, "Pour", BeverageCategory::Wine, "red");
                ScoredResult::new(beverage, score, Reasons::new())
            })
            .collect();
        let once = select(results, threshold, limit);
        let twice = select(once.clone(), threshold, limit);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reasons_never_duplicate(
        beverage in beverage_strategy(),
        profile in profile_strategy(),
    ) {
        let result = BeverageMatcher::new().score(&beverage, &profile, &MatchContext::default());
        let distinct: HashSet<&str> = result.reasons.iter().collect();
        prop_assert_eq!(distinct.len(), result.reasons.len());
    }

    #[test]
    fn pairing_is_deterministic_and_bounded(
        dishes in dishes_strategy(),
        beverages in proptest::collection::vec(beverage_strategy(), 0..8),
    ) {
        let resolver = PairingResolver::new();
        let first = resolver.resolve(&dishes, &beverages);
        let second = resolver.resolve(&dishes, &beverages);
        prop_assert_eq!(&first, &second);
        for matched in &first {
            prop_assert!(matched.confidence <= 100);
            let distinct: HashSet<&String> = matched.matched_pairings.iter().collect();
            prop_assert_eq!(distinct.len(), matched.matched_pairings.len());
        }
    }
}
