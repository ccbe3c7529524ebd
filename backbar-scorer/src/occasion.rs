//! Occasion filters: static keyword/category pre-filters ahead of scoring.
//!
//! An occasion narrows the catalog before the ordinary scoring path runs.
//! Like the dish taxonomy, the table is declarative configuration so it can
//! be tuned and tested on its own.

use backbar_core::{Beverage, BeverageCategory};

/// Occasions the catalog can be narrowed to before scoring.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use backbar_scorer::Occasion;
///
/// assert_eq!(Occasion::DinnerParty.as_str(), "dinner-party");
/// assert_eq!(Occasion::from_str("aperitif"), Ok(Occasion::Aperitif));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    /// Sparkling and celebratory pours.
    Celebration,
    /// Structured bottles for a seated dinner.
    DinnerParty,
    /// Easy-drinking choices for casual settings.
    Casual,
    /// Sweet pours for after dinner.
    Dessert,
    /// Light, dry openers before a meal.
    Aperitif,
}

impl Occasion {
    /// Return the occasion as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celebration => "celebration",
            Self::DinnerParty => "dinner-party",
            Self::Casual => "casual",
            Self::Dessert => "dessert",
            Self::Aperitif => "aperitif",
        }
    }

    /// The filter row for this occasion.
    #[must_use]
    pub const fn profile(self) -> &'static OccasionProfile {
        match self {
            Self::Celebration => &CELEBRATION,
            Self::DinnerParty => &DINNER_PARTY,
            Self::Casual => &CASUAL,
            Self::Dessert => &DESSERT,
            Self::Aperitif => &APERITIF,
        }
    }

    /// Whether `beverage` belongs to this occasion.
    ///
    /// A beverage passes when its category is admitted outright or any
    /// keyword appears in its style or name (case-insensitive).
    #[must_use]
    pub fn admits(self, beverage: &Beverage) -> bool {
        let row = self.profile();
        if row.categories.contains(&beverage.category) {
            return true;
        }
        let style = beverage.style.to_lowercase();
        let name = beverage.name.to_lowercase();
        row.keywords
            .iter()
            .any(|keyword| style.contains(keyword) || name.contains(keyword))
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Occasion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "celebration" => Ok(Self::Celebration),
            "dinner-party" => Ok(Self::DinnerParty),
            "casual" => Ok(Self::Casual),
            "dessert" => Ok(Self::Dessert),
            "aperitif" => Ok(Self::Aperitif),
            _ => Err(format!("unknown occasion '{s}'")),
        }
    }
}

/// One row of the occasion filter table.
#[derive(Debug, Clone, Copy)]
pub struct OccasionProfile {
    /// Occasion this row describes.
    pub occasion: Occasion,
    /// Lowercase keywords matched against style and name.
    pub keywords: &'static [&'static str],
    /// Categories admitted outright.
    pub categories: &'static [BeverageCategory],
}

const CELEBRATION: OccasionProfile = OccasionProfile {
    occasion: Occasion::Celebration,
    keywords: &["sparkling", "champagne", "prosecco", "cava", "brut", "spritz"],
    categories: &[BeverageCategory::Cocktail],
};

const DINNER_PARTY: OccasionProfile = OccasionProfile {
    occasion: Occasion::DinnerParty,
    keywords: &["red", "white", "reserve", "rioja", "barolo"],
    categories: &[BeverageCategory::Wine],
};

const CASUAL: OccasionProfile = OccasionProfile {
    occasion: Occasion::Casual,
    keywords: &["lager", "ale", "ipa", "pilsner", "cider", "soda", "spritz"],
    categories: &[BeverageCategory::Beer, BeverageCategory::NonAlcoholic],
};

const DESSERT: OccasionProfile = OccasionProfile {
    occasion: Occasion::Dessert,
    keywords: &[
        "port", "sherry", "moscato", "ice wine", "late harvest", "stout", "sauternes",
    ],
    categories: &[],
};

const APERITIF: OccasionProfile = OccasionProfile {
    occasion: Occasion::Aperitif,
    keywords: &["vermouth", "bitter", "fino", "dry", "blanc"],
    categories: &[],
};

/// The occasion filter table, one row per occasion.
pub const OCCASION_TABLE: &[OccasionProfile] = &[
    CELEBRATION,
    DINNER_PARTY,
    CASUAL,
    DESSERT,
    APERITIF,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wine_categories_pass_dinner_party_outright() {
        let wine = Beverage::new(1, "Etna Rosso", BeverageCategory::Wine, "red");
        assert!(Occasion::DinnerParty.admits(&wine));
    }

    #[rstest]
    fn keywords_match_name_and_style() {
        let stout = Beverage::new(2, "Imperial Stout", BeverageCategory::Beer, "stout");
        assert!(Occasion::Dessert.admits(&stout));
        let fino = Beverage::new(3, "Fino en Rama", BeverageCategory::Wine, "sherry");
        assert!(Occasion::Aperitif.admits(&fino));
    }

    #[rstest]
    fn unrelated_beverages_are_filtered() {
        let gin = Beverage::new(4, "London Gin", BeverageCategory::Spirit, "gin");
        assert!(!Occasion::Dessert.admits(&gin));
    }

    #[rstest]
    fn every_occasion_has_a_table_row() {
        for row in OCCASION_TABLE {
            assert_eq!(row.occasion.profile().occasion, row.occasion);
        }
        assert_eq!(OCCASION_TABLE.len(), 5);
    }
}
