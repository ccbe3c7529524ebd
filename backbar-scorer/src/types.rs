//! Tunable scoring weights.
//!
//! Defaults encode the production scoring model. The values are
//! configuration, not load-bearing constants: tests pin the defaults, and
//! callers may supply their own tables.

#![forbid(unsafe_code)]

/// Point values for each beverage-match signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    /// Bonus when the style is among the preferred styles.
    pub style_match: i32,
    /// Bonus when the price sits inside the preferred band.
    pub price_in_range: i32,
    /// Bonus when the price undercuts the band.
    pub price_below_range: i32,
    /// Ceiling of the flavor-distance term.
    pub flavor_ceiling: i32,
    /// Points lost per unit of L1 flavor distance.
    pub flavor_slope: i32,
    /// Flavor-term value at which the flavor reason is voiced.
    pub flavor_reason_threshold: i32,
    /// Penalty for tannic beverages when the profile avoids them.
    pub high_tannin_penalty: i32,
    /// Tannin level at which the penalty applies.
    pub high_tannin_cutoff: u8,
    /// Bonus for an outright favorite.
    pub favorite: i32,
    /// Swing for a journal rating: positive ratings add it, negative
    /// ratings subtract it.
    pub journal_rating: i32,
    /// Bonus for staff-featured beverages.
    pub featured: i32,
    /// Bonus when another favorite shares the style.
    pub similar_favorite: i32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            style_match: 25,
            price_in_range: 15,
            price_below_range: 5,
            flavor_ceiling: 30,
            flavor_slope: 3,
            flavor_reason_threshold: 24,
            high_tannin_penalty: 20,
            high_tannin_cutoff: 4,
            favorite: 10,
            journal_rating: 15,
            featured: 5,
            similar_favorite: 10,
        }
    }
}

/// Point values and caps for dish-pairing confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairingWeights {
    /// Raw points for an exact dish/pairing hit.
    pub exact_match: u32,
    /// Raw points for a partial dish/pairing hit.
    pub partial_match: u32,
    /// Bonus per distinct matched pairing string, applied once more than
    /// one string has matched.
    pub multi_match_step: u32,
    /// Ceiling of the multi-match bonus.
    pub multi_match_cap: u32,
    /// Sub-score step per flavor attribute inside a category's ideal band.
    pub attribute_step: u32,
    /// Weight applied to each category sub-score before merging.
    pub flavor_weight: f64,
    /// Attribute value at or above which a qualitative reason is voiced.
    pub extreme_high: u8,
    /// Attribute value at or below which a qualitative reason is voiced.
    pub extreme_low: u8,
    /// Confidence per flavor reason when no text overlap exists.
    pub flavor_only_step: u32,
    /// Confidence ceiling for flavor-only matches, kept below what direct
    /// textual evidence can reach.
    pub flavor_only_cap: u32,
}

impl Default for PairingWeights {
    fn default() -> Self {
        Self {
            exact_match: 30,
            partial_match: 15,
            multi_match_step: 5,
            multi_match_cap: 15,
            attribute_step: 25,
            flavor_weight: 0.3,
            extreme_high: 4,
            extreme_low: 2,
            flavor_only_step: 20,
            flavor_only_cap: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_match_weights_pin_the_production_table() {
        let weights = MatchWeights::default();
        assert_eq!(weights.style_match, 25);
        assert_eq!(weights.flavor_ceiling, 30);
        assert_eq!(weights.high_tannin_penalty, 20);
    }

    #[test]
    fn default_pairing_weights_pin_the_production_table() {
        let weights = PairingWeights::default();
        assert_eq!(weights.exact_match, 30);
        assert_eq!(weights.partial_match, 15);
        assert_eq!(weights.flavor_only_cap, 60);
        assert!((weights.flavor_weight - 0.3).abs() < f64::EPSILON);
    }
}
