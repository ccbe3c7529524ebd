//! Scenario coverage for implicit preference learning.

use backbar_core::{Beverage, BeverageCategory, FlavorProfile, JournalEntry, Rating};
use backbar_scorer::learn;
use rstest::rstest;

fn wine(id: u64, style: &str, price: u32, flavor: FlavorProfile) -> Beverage {
    Beverage::new(id, format!("Wine #{id}"), BeverageCategory::Wine, style)
        .with_price(price)
        .with_flavor(flavor)
}

fn rated(id: u64, style: &str, rating: u8) -> JournalEntry {
    JournalEntry::new(
        Some(id),
        style,
        BeverageCategory::Wine,
        Rating::new(rating).expect("valid rating"),
    )
}

#[rstest]
fn no_signal_yields_no_preferences() {
    let catalog = [wine(1, "red", 30, FlavorProfile::default())];
    let learned = learn(&[], &[], &catalog);
    assert!(learned.preferred_styles.is_empty());
    assert_eq!(learned.avg_flavor, None);
    assert_eq!(learned.avg_price, None);
}

#[rstest]
fn styles_rank_by_count_with_first_encounter_breaking_ties() {
    let catalog = [
        wine(1, "red", 30, FlavorProfile::default()),
        wine(2, "red", 35, FlavorProfile::default()),
        wine(3, "white", 20, FlavorProfile::default()),
        wine(4, "white", 25, FlavorProfile::default()),
        wine(5, "rosé", 18, FlavorProfile::default()),
        wine(6, "orange", 40, FlavorProfile::default()),
        wine(7, "orange", 45, FlavorProfile::default()),
    ];
    let journal = [rated(6, "orange", 5), rated(7, "orange", 4)];
    let learned = learn(&[1, 2, 3, 4, 5], &journal, &catalog);
    // red, white, and orange all count twice; favorites were seen first.
    assert_eq!(learned.preferred_styles, ["red", "white", "orange"]);
}

#[rstest]
fn flavor_attributes_average_with_half_up_rounding() {
    let catalog = [
        wine(1, "red", 30, FlavorProfile::new(3, 2, 3, 3).expect("valid profile")),
        wine(2, "red", 30, FlavorProfile::new(4, 3, 4, 4).expect("valid profile")),
    ];
    let learned = learn(&[1, 2], &[], &catalog);
    // Sums 7/5/7/7 over two beverages round half-up to 4/3/4/4.
    assert_eq!(
        learned.avg_flavor,
        Some(FlavorProfile::new(4, 3, 4, 4).expect("valid profile"))
    );
}

#[rstest]
fn beverages_without_tasting_data_do_not_dilute_the_average() {
    let mut bare = wine(2, "red", 30, FlavorProfile::default());
    bare.flavor = None;
    let catalog = [
        wine(1, "red", 30, FlavorProfile::new(5, 1, 5, 1).expect("valid profile")),
        bare,
    ];
    let learned = learn(&[1, 2], &[], &catalog);
    assert_eq!(
        learned.avg_flavor,
        Some(FlavorProfile::new(5, 1, 5, 1).expect("valid profile"))
    );
}

#[rstest]
fn only_positive_journal_entries_qualify() {
    let catalog = [
        wine(1, "red", 30, FlavorProfile::default()),
        wine(2, "white", 40, FlavorProfile::default()),
    ];
    let journal = [rated(1, "red", 4), rated(2, "white", 3), rated(2, "white", 2)];
    let learned = learn(&[], &journal, &catalog);
    assert_eq!(learned.preferred_styles, ["red"]);
    assert_eq!(learned.avg_price, Some(30));
}

#[rstest]
fn stale_and_anonymous_references_are_skipped() {
    let catalog = [wine(1, "red", 30, FlavorProfile::default())];
    let journal = [
        rated(404, "red", 5),
        JournalEntry::new(
            None,
            "cask ale",
            BeverageCategory::Beer,
            Rating::new(5).expect("valid rating"),
        ),
    ];
    let learned = learn(&[404], &journal, &catalog);
    assert!(learned.preferred_styles.is_empty());
    assert_eq!(learned.avg_price, None);
}
