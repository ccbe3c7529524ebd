//! Scenario coverage for beverage match scoring.

use backbar_core::{
    Beverage, BeverageCategory, FlavorProfile, JournalEntry, PreferenceProfile, PriceRange, Rating,
};
use backbar_scorer::{BeverageMatcher, MatchContext};
use rstest::{fixture, rstest};

fn wine(style: &str, price: Option<u32>, flavor: FlavorProfile) -> Beverage {
    let mut beverage =
        Beverage::new(1, "Test Pour", BeverageCategory::Wine, style).with_flavor(flavor);
    beverage.price = price;
    beverage
}

fn house_flavor() -> FlavorProfile {
    FlavorProfile::new(3, 2, 3, 3).expect("valid profile")
}

#[fixture]
fn profile() -> PreferenceProfile {
    PreferenceProfile::new(house_flavor())
        .with_style("red")
        .with_price_range(PriceRange::new(30, 50).expect("valid band"))
}

#[rstest]
// Style 25 + price 15 + flavor 30.
#[case("red", Some(40), house_flavor(), 70)]
// No style bonus without a preferred style hit.
#[case("white", Some(40), house_flavor(), 45)]
// Below the band: 25 + 5 + 30.
#[case("red", Some(20), house_flavor(), 60)]
// Above the band contributes nothing: 25 + 0 + 30.
#[case("red", Some(60), house_flavor(), 55)]
// Missing price contributes nothing.
#[case("red", None, house_flavor(), 55)]
// Distance 4 costs 12 points of flavor: 25 + 15 + 18.
#[case("red", Some(40), FlavorProfile::new(4, 3, 4, 2).expect("valid profile"), 58)]
fn signal_grid(
    profile: PreferenceProfile,
    #[case] style: &str,
    #[case] price: Option<u32>,
    #[case] flavor: FlavorProfile,
    #[case] expected: u8,
) {
    let beverage = wine(style, price, flavor);
    let result = BeverageMatcher::new().score(&beverage, &profile, &MatchContext::default());
    assert_eq!(result.score, expected);
}

#[rstest]
fn perfect_match_voices_style_and_flavor(profile: PreferenceProfile) {
    let beverage = wine("red", Some(40), house_flavor());
    let result = BeverageMatcher::new().score(&beverage, &profile, &MatchContext::default());
    assert_eq!(
        result.reasons.as_slice(),
        [
            "Matches your preferred red style",
            "Matches your flavor preferences"
        ]
    );
}

#[rstest]
fn flavor_reason_needs_a_close_match(profile: PreferenceProfile) {
    // Distance 2 keeps the reason (term 24); distance 3 loses it (term 21).
    let near = wine("red", Some(40), FlavorProfile::new(4, 3, 3, 3).expect("valid profile"));
    let far = wine("red", Some(40), FlavorProfile::new(4, 3, 4, 3).expect("valid profile"));
    let matcher = BeverageMatcher::new();
    let near_result = matcher.score(&near, &profile, &MatchContext::default());
    let far_result = matcher.score(&far, &profile, &MatchContext::default());
    assert!(near_result.reasons.contains("Matches your flavor preferences"));
    assert!(!far_result.reasons.contains("Matches your flavor preferences"));
}

#[rstest]
fn positive_journal_entries_add_and_explain(profile: PreferenceProfile) {
    let beverage = wine("red", Some(40), house_flavor());
    let entry = JournalEntry::new(
        Some(1),
        "red",
        BeverageCategory::Wine,
        Rating::new(4).expect("valid rating"),
    );
    let context = MatchContext {
        journal_entry: Some(&entry),
        ..MatchContext::default()
    };
    let result = BeverageMatcher::new().score(&beverage, &profile, &context);
    assert_eq!(result.score, 85);
    assert!(result.reasons.contains("You rated this 4/5"));
}

#[rstest]
fn similarity_to_other_favorites_is_detected(profile: PreferenceProfile) {
    let beverage = wine("red", Some(40), house_flavor());
    let other = Beverage::new(2, "Cellar Red", BeverageCategory::Wine, "RED");
    let context = MatchContext {
        other_favorites: vec![&other],
        ..MatchContext::default()
    };
    let result = BeverageMatcher::new().score(&beverage, &profile, &context);
    assert_eq!(result.score, 80);
    assert!(result.reasons.contains("Similar to wines you love"));
}

#[rstest]
fn scoring_never_goes_below_zero() {
    let profile = PreferenceProfile::new(FlavorProfile::new(1, 5, 1, 5).expect("valid profile"))
        .avoiding_high_tannins();
    let beverage = wine(
        "red",
        None,
        FlavorProfile::new(5, 1, 5, 1).expect("valid profile"),
    );
    let entry = JournalEntry::new(
        Some(1),
        "red",
        BeverageCategory::Wine,
        Rating::new(1).expect("valid rating"),
    );
    let context = MatchContext {
        journal_entry: Some(&entry),
        ..MatchContext::default()
    };
    let result = BeverageMatcher::new().score(&beverage, &profile, &context);
    // Flavor 0, tannin penalty -20, journal -15: clamped to zero.
    assert_eq!(result.score, 0);
}
