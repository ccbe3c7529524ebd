//! Dish-to-beverage pairing: text overlap plus category flavor fit.
//!
//! Two independent passes feed one confidence figure. The text pass scores
//! direct overlap between selected dishes and a beverage's recommended
//! pairings; the category pass judges how well the beverage's flavor lands
//! in the ideal band of each dish category. A beverage with neither signal
//! is excluded outright rather than scored at zero.

use backbar_core::{Beverage, DishCategory, FlavorAttribute, Reasons, categories_for, taxonomy_row};

use crate::types::PairingWeights;

/// Strength of a single dish/pairing-string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMatch {
    /// Equality or containment either way.
    Exact,
    /// Shared vocabulary: a long-enough word in common, or both strings
    /// landing in the same dish category.
    Partial,
}

/// A beverage the resolver judged compatible with the dish selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingMatch {
    /// The beverage snapshot.
    pub beverage: Beverage,
    /// Merged 0–100 confidence.
    pub confidence: u8,
    /// Raw text-overlap score, used as the ranking tie-break.
    pub text_score: u32,
    /// Pairing strings that matched a selected dish, recorded once each.
    pub matched_pairings: Vec<String>,
    /// Qualitative flavor-fit observations, deduplicated in discovery
    /// order.
    pub flavor_reasons: Vec<String>,
}

/// Resolves dish selections against the catalog.
///
/// # Examples
/// ```
/// use backbar_core::{Beverage, BeverageCategory, FlavorProfile};
/// use backbar_scorer::PairingResolver;
///
/// let malbec = Beverage::new(1, "Mendoza Malbec", BeverageCategory::Wine, "red")
///     .with_flavor(FlavorProfile::new(4, 1, 4, 3).expect("valid profile"))
///     .with_pairings(["Steak", "Lamb"]);
/// let matches = PairingResolver::new().resolve(&["Grilled Steak".into()], &[malbec]);
/// assert_eq!(matches.len(), 1);
/// assert!(matches[0].confidence > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PairingResolver {
    weights: PairingWeights,
}

impl PairingResolver {
    /// A resolver with the production weight table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver with a custom weight table.
    #[must_use]
    pub const fn with_weights(weights: PairingWeights) -> Self {
        Self { weights }
    }

    /// Rank the catalog against the selected dishes.
    ///
    /// Results order by confidence, then raw text score, then catalog
    /// order. An empty dish selection yields an empty list, never an
    /// error.
    #[must_use]
    pub fn resolve(&self, dishes: &[String], catalog: &[Beverage]) -> Vec<PairingMatch> {
        let selected: Vec<&str> = dishes
            .iter()
            .map(String::as_str)
            .filter(|dish| !dish.trim().is_empty())
            .collect();
        if selected.is_empty() {
            return Vec::new();
        }
        let categories = distinct_categories(&selected);
        let mut matches: Vec<PairingMatch> = catalog
            .iter()
            .filter_map(|beverage| self.resolve_one(&selected, &categories, beverage))
            .collect();
        // Stable sort: catalog order breaks the remaining ties.
        matches.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then(b.text_score.cmp(&a.text_score))
        });
        matches
    }

    fn resolve_one(
        &self,
        dishes: &[&str],
        categories: &[DishCategory],
        beverage: &Beverage,
    ) -> Option<PairingMatch> {
        let (text_score, matched_pairings) = self.text_overlap(dishes, beverage);
        let (flavor_bonus_sum, flavor_reasons) = self.flavor_fit(categories, beverage);
        if text_score == 0 && flavor_reasons.is_empty() {
            return None;
        }
        let confidence = if text_score == 0 {
            self.flavor_only_confidence(flavor_reasons.len())
        } else {
            self.merged_confidence(
                text_score,
                dishes.len(),
                matched_pairings.len(),
                flavor_bonus_sum,
                categories.len(),
            )
        };
        Some(PairingMatch {
            beverage: beverage.clone(),
            confidence,
            text_score,
            matched_pairings,
            flavor_reasons: flavor_reasons.into_vec(),
        })
    }

    /// Accumulate raw text score over every dish × pairing combination.
    ///
    /// A single pairing string may satisfy several dishes and each
    /// satisfaction scores, but the string is recorded only once.
    fn text_overlap(&self, dishes: &[&str], beverage: &Beverage) -> (u32, Vec<String>) {
        let mut score = 0_u32;
        let mut matched: Vec<String> = Vec::new();
        for &dish in dishes {
            for pairing in &beverage.food_pairings {
                let Some(strength) = classify(dish, pairing) else {
                    continue;
                };
                score += match strength {
                    TextMatch::Exact => self.weights.exact_match,
                    TextMatch::Partial => self.weights.partial_match,
                };
                if !matched
                    .iter()
                    .any(|recorded| recorded.eq_ignore_ascii_case(pairing))
                {
                    matched.push(pairing.clone());
                }
            }
        }
        (score, matched)
    }

    /// Per-category flavor fit, weighted and accumulated.
    ///
    /// Each category contributes a 0/25/50/75/100 sub-score (one step per
    /// attribute inside the ideal band); qualitative reasons are voiced
    /// only for in-band values at an extreme of the scale.
    #[expect(
        clippy::float_arithmetic,
        reason = "category bonuses carry the configured fractional weight"
    )]
    fn flavor_fit(&self, categories: &[DishCategory], beverage: &Beverage) -> (f64, Reasons) {
        let flavor = beverage.flavor_or_default();
        let mut bonus_sum = 0.0_f64;
        let mut reasons = Reasons::new();
        for &category in categories {
            let row = taxonomy_row(category);
            let mut sub_score = 0_u32;
            for attribute in FlavorAttribute::ALL {
                let value = flavor.attribute(attribute);
                if !row.range(attribute).contains(value) {
                    continue;
                }
                sub_score += self.weights.attribute_step;
                if let Some(reason) = self.extreme_reason(attribute, value) {
                    reasons.push(reason);
                }
            }
            bonus_sum += f64::from(sub_score) * self.weights.flavor_weight;
        }
        (bonus_sum, reasons)
    }

    fn extreme_reason(&self, attribute: FlavorAttribute, value: u8) -> Option<&'static str> {
        if value >= self.weights.extreme_high {
            Some(match attribute {
                FlavorAttribute::Body => "Full body matches dish intensity",
                FlavorAttribute::Sweetness => "Sweetness rounds out the dish",
                FlavorAttribute::Tannins => "Firm tannins stand up to the dish",
                FlavorAttribute::Acidity => "Bright acidity cuts through richness",
            })
        } else if value <= self.weights.extreme_low {
            Some(match attribute {
                FlavorAttribute::Body => "Light body suits delicate dishes",
                FlavorAttribute::Sweetness => "Dry profile keeps the pairing clean",
                FlavorAttribute::Tannins => "Soft tannins won't overwhelm the plate",
                FlavorAttribute::Acidity => "Gentle acidity lets the dish lead",
            })
        } else {
            None
        }
    }

    /// Merge the text percentage, the multi-match bonus, and the averaged
    /// category bonus into one rounded, clamped confidence.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "confidence blends a percentage with averaged bonuses before rounding into 0..=100"
    )]
    fn merged_confidence(
        &self,
        text_score: u32,
        dish_count: usize,
        distinct_matched: usize,
        flavor_bonus_sum: f64,
        category_count: usize,
    ) -> u8 {
        let dish_count = u32::try_from(dish_count).unwrap_or(u32::MAX);
        let max_possible = dish_count.saturating_mul(self.weights.exact_match).max(1);
        let percentage =
            (f64::from(text_score) / f64::from(max_possible) * 100.0).min(100.0);

        let distinct = u32::try_from(distinct_matched).unwrap_or(u32::MAX);
        let multi_bonus = if distinct > 1 {
            distinct
                .saturating_mul(self.weights.multi_match_step)
                .min(self.weights.multi_match_cap)
        } else {
            0
        };

        let category_term = match u32::try_from(category_count) {
            Ok(count) if count > 0 => flavor_bonus_sum / f64::from(count),
            _ => 0.0,
        };

        let confidence = (percentage + f64::from(multi_bonus) + category_term).round();
        confidence.clamp(0.0, 100.0) as u8
    }

    /// Confidence for matches carried by flavor fit alone, capped below
    /// what direct textual evidence can reach.
    fn flavor_only_confidence(&self, reason_count: usize) -> u8 {
        let raw = u32::try_from(reason_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.weights.flavor_only_step)
            .min(self.weights.flavor_only_cap);
        u8::try_from(raw).unwrap_or(u8::MAX)
    }
}

/// Classify one dish/pairing comparison.
///
/// Exact beats partial: case-insensitive equality or containment either
/// way. Partial covers a shared word longer than two characters, and
/// vocabulary overlap through the dish taxonomy: a "Steak" dish and a
/// "Beef" pairing share no word but both land in red-meat.
fn classify(dish: &str, pairing: &str) -> Option<TextMatch> {
    let dish_lower = dish.trim().to_lowercase();
    let pairing_lower = pairing.trim().to_lowercase();
    if dish_lower.is_empty() || pairing_lower.is_empty() {
        return None;
    }
    if dish_lower == pairing_lower
        || dish_lower.contains(&pairing_lower)
        || pairing_lower.contains(&dish_lower)
    {
        return Some(TextMatch::Exact);
    }
    let word_overlap = words(&dish_lower)
        .iter()
        .any(|word| pairing_lower.contains(word))
        || words(&pairing_lower)
            .iter()
            .any(|word| dish_lower.contains(word));
    if word_overlap {
        return Some(TextMatch::Partial);
    }
    let dish_categories = categories_for(&dish_lower);
    let shared_category = categories_for(&pairing_lower)
        .iter()
        .any(|category| dish_categories.contains(category));
    shared_category.then_some(TextMatch::Partial)
}

fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() > 2)
        .collect()
}

/// Distinct categories across the dish selection, first-encountered order.
///
/// Two dishes landing in the same category count it once; the flavor bonus
/// is per category, not per dish.
fn distinct_categories(dishes: &[&str]) -> Vec<DishCategory> {
    let mut distinct = Vec::new();
    for &dish in dishes {
        for category in categories_for(dish) {
            if !distinct.contains(&category) {
                distinct.push(category);
            }
        }
    }
    distinct
}
