//! Implicit preference learning from favorites and journal history.
//!
//! When the user has never saved explicit preferences, their behavior still
//! carries signal: what they favorited and what they rated highly. The
//! learner aggregates that signal into a [`PreferenceProfile`] on every
//! scoring call; nothing is cached or persisted here.

use backbar_core::{
    Beverage, BeverageId, FlavorAttribute, FlavorProfile, JournalEntry, MAX_PREFERRED_STYLES,
    PreferenceProfile, PriceRange,
};
use log::debug;

/// Aggregated behavioral signal derived from favorites and highly rated
/// journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LearnedPreferences {
    /// Styles by descending occurrence; first-encountered order breaks
    /// ties.
    pub preferred_styles: Vec<String>,
    /// Mean flavor across qualifying beverages with tasting data.
    pub avg_flavor: Option<FlavorProfile>,
    /// Mean price across qualifying beverages with a price.
    pub avg_price: Option<u32>,
}

impl LearnedPreferences {
    /// Whether no behavioral signal was available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferred_styles.is_empty() && self.avg_flavor.is_none() && self.avg_price.is_none()
    }

    /// Build a scoring profile, substituting defaults wherever signal is
    /// missing: the house flavor profile, no price band, no tannin
    /// aversion.
    #[must_use]
    pub fn to_profile(&self) -> PreferenceProfile {
        let mut profile = PreferenceProfile::new(self.avg_flavor.unwrap_or_default());
        for style in &self.preferred_styles {
            profile = profile.with_style(style.clone());
        }
        if let Some(anchor) = self.avg_price {
            if let Some(band) = price_band(anchor) {
                profile = profile.with_price_range(band);
            }
        }
        profile
    }
}

/// Where the scoring profile comes from: the user's explicit settings or
/// behavior-derived preferences.
#[derive(Debug, Clone)]
pub enum PreferenceSource<'a> {
    /// The user has saved explicit preferences.
    Explicit(&'a PreferenceProfile),
    /// No saved preferences; learn from favorites and journal.
    Learned {
        /// Favorited beverage ids, in list order.
        favorites: &'a [BeverageId],
        /// Journal snapshot, oldest first.
        journal: &'a [JournalEntry],
    },
}

impl PreferenceSource<'_> {
    /// Resolve to a concrete profile against `catalog`.
    #[must_use]
    pub fn resolve(&self, catalog: &[Beverage]) -> PreferenceProfile {
        match self {
            Self::Explicit(profile) => (*profile).clone(),
            Self::Learned { favorites, journal } => {
                learn(favorites, journal, catalog).to_profile()
            }
        }
    }
}

/// Derive preferences from the user's favorites and positively rated
/// journal entries.
///
/// Favorites are processed before journal entries so they win style-count
/// ties. References to beverages no longer in the catalog are stale data,
/// not errors; they are skipped. Zero qualifying beverages yield empty
/// styles and undefined averages: "no signal", also not an error.
#[must_use]
pub fn learn(
    favorites: &[BeverageId],
    journal: &[JournalEntry],
    catalog: &[Beverage],
) -> LearnedPreferences {
    let mut tally: Vec<(String, u32)> = Vec::new();
    let mut flavor_sums = [0_u32; 4];
    let mut flavor_count = 0_u32;
    let mut price_sum = 0_u64;
    let mut price_count = 0_u32;

    let from_favorites = favorites.iter().filter_map(|&id| {
        let found = resolve(catalog, id);
        if found.is_none() {
            debug!("favorite {id} is missing from the catalog; skipping");
        }
        found
    });
    let from_journal = journal
        .iter()
        .filter(|entry| entry.rating.is_positive())
        .filter_map(|entry| {
            let id = entry.beverage_id?;
            let found = resolve(catalog, id);
            if found.is_none() {
                debug!("journal entry references beverage {id} missing from the catalog; skipping");
            }
            found
        });

    for beverage in from_favorites.chain(from_journal) {
        bump_style(&mut tally, &beverage.style);
        if let Some(flavor) = beverage.flavor {
            for (slot, attribute) in flavor_sums.iter_mut().zip(FlavorAttribute::ALL) {
                *slot += u32::from(flavor.attribute(attribute));
            }
            flavor_count += 1;
        }
        if let Some(price) = beverage.price {
            price_sum += u64::from(price);
            price_count += 1;
        }
    }

    // Stable sort: equal counts keep first-encountered order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    let preferred_styles = tally
        .into_iter()
        .take(MAX_PREFERRED_STYLES)
        .map(|(style, _)| style)
        .collect();

    let avg_flavor = (flavor_count > 0).then(|| mean_flavor(flavor_sums, flavor_count)).flatten();
    let avg_price = (price_count > 0)
        .then(|| u32::try_from(round_half_up_u64(price_sum, u64::from(price_count))).ok())
        .flatten();

    LearnedPreferences {
        preferred_styles,
        avg_flavor,
        avg_price,
    }
}

fn resolve(catalog: &[Beverage], id: BeverageId) -> Option<&Beverage> {
    catalog.iter().find(|beverage| beverage.id == id)
}

fn bump_style(tally: &mut Vec<(String, u32)>, style: &str) {
    if let Some(entry) = tally
        .iter_mut()
        .find(|(seen, _)| seen.eq_ignore_ascii_case(style))
    {
        entry.1 += 1;
    } else {
        tally.push((style.to_owned(), 1));
    }
}

fn mean_flavor(sums: [u32; 4], count: u32) -> Option<FlavorProfile> {
    let [body, sweetness, tannins, acidity] = sums.map(|sum| attribute_mean(sum, count));
    // Means of on-scale values stay on the scale, so this never fails.
    FlavorProfile::new(body, sweetness, tannins, acidity).ok()
}

fn attribute_mean(sum: u32, count: u32) -> u8 {
    u8::try_from(round_half_up(sum, count)).unwrap_or(u8::MAX)
}

/// Round-half-up integer mean, avoiding floats entirely.
#[expect(
    clippy::integer_division,
    reason = "round-half-up averaging of whole-unit signals"
)]
fn round_half_up(sum: u32, count: u32) -> u32 {
    (2 * sum + count) / (2 * count)
}

#[expect(
    clippy::integer_division,
    reason = "round-half-up averaging of whole-unit signals"
)]
fn round_half_up_u64(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}

/// A symmetric price band around `anchor`, used when turning a learned
/// average price into a preference band.
#[expect(
    clippy::integer_division,
    reason = "band bounds are half the anchor in whole currency units"
)]
pub(crate) fn price_band(anchor: u32) -> Option<PriceRange> {
    let halfway = anchor / 2;
    PriceRange::new(halfway, anchor.saturating_add(halfway)).ok()
}
