//! Dish categories: the static taxonomy behind dish-to-beverage pairing.
//!
//! The taxonomy is configuration, not user data. Membership keywords map a
//! free-text dish name onto categories, and each category declares the
//! flavor band a beverage should land in to suit those dishes. Keeping the
//! table declarative lets it be versioned and tested independently of the
//! scoring that consumes it.

use crate::FlavorAttribute;

/// Broad dish families with known flavor affinities.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use backbar_core::DishCategory;
///
/// assert_eq!(DishCategory::PastaRice.as_str(), "pasta-rice");
/// assert_eq!(
///     DishCategory::from_str("red-meat"),
///     Ok(DishCategory::RedMeat)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DishCategory {
    /// Beef, lamb, game, and other rich red meats.
    RedMeat,
    /// Fish and shellfish.
    Seafood,
    /// Vegetable-forward plates.
    Vegetarian,
    /// Pasta, risotto, and grain dishes.
    PastaRice,
    /// Cheese boards and cheese-led dishes.
    Cheese,
    /// Sweets and after-dinner plates.
    Dessert,
}

impl DishCategory {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RedMeat => "red-meat",
            Self::Seafood => "seafood",
            Self::Vegetarian => "vegetarian",
            Self::PastaRice => "pasta-rice",
            Self::Cheese => "cheese",
            Self::Dessert => "dessert",
        }
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DishCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red-meat" => Ok(Self::RedMeat),
            "seafood" => Ok(Self::Seafood),
            "vegetarian" => Ok(Self::Vegetarian),
            "pasta-rice" => Ok(Self::PastaRice),
            "cheese" => Ok(Self::Cheese),
            "dessert" => Ok(Self::Dessert),
            _ => Err(format!("unknown dish category '{s}'")),
        }
    }
}

/// Inclusive attribute band a beverage should land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdealRange {
    /// Lowest suitable value.
    pub min: u8,
    /// Highest suitable value.
    pub max: u8,
}

impl IdealRange {
    /// Whether `value` falls inside the band.
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

const fn band(min: u8, max: u8) -> IdealRange {
    IdealRange { min, max }
}

/// One row of the pairing taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishCategoryProfile {
    /// Category this row describes.
    pub category: DishCategory,
    /// Lowercase keywords that place a dish in this category.
    pub keywords: &'static [&'static str],
    /// Ideal body band.
    pub body: IdealRange,
    /// Ideal sweetness band.
    pub sweetness: IdealRange,
    /// Ideal tannin band.
    pub tannins: IdealRange,
    /// Ideal acidity band.
    pub acidity: IdealRange,
}

impl DishCategoryProfile {
    /// The ideal band for one flavor attribute.
    #[must_use]
    pub const fn range(&self, attribute: FlavorAttribute) -> IdealRange {
        match attribute {
            FlavorAttribute::Body => self.body,
            FlavorAttribute::Sweetness => self.sweetness,
            FlavorAttribute::Tannins => self.tannins,
            FlavorAttribute::Acidity => self.acidity,
        }
    }
}

const RED_MEAT: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::RedMeat,
    keywords: &[
        "steak", "beef", "lamb", "venison", "burger", "ribs", "brisket", "pork", "duck",
    ],
    body: band(4, 5),
    sweetness: band(1, 2),
    tannins: band(3, 5),
    acidity: band(2, 4),
};

const SEAFOOD: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::Seafood,
    keywords: &[
        "fish", "salmon", "tuna", "shrimp", "prawn", "oyster", "mussel", "lobster", "crab",
        "scallop", "ceviche",
    ],
    body: band(1, 2),
    sweetness: band(1, 3),
    tannins: band(1, 2),
    acidity: band(3, 5),
};

const VEGETARIAN: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::Vegetarian,
    keywords: &[
        "salad", "vegetable", "veggie", "tofu", "mushroom", "eggplant", "falafel", "greens",
    ],
    body: band(2, 3),
    sweetness: band(1, 3),
    tannins: band(1, 3),
    acidity: band(3, 4),
};

const PASTA_RICE: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::PastaRice,
    keywords: &[
        "pasta", "spaghetti", "lasagna", "risotto", "rice", "noodle", "gnocchi",
    ],
    body: band(2, 4),
    sweetness: band(1, 3),
    tannins: band(2, 3),
    acidity: band(3, 5),
};

const CHEESE: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::Cheese,
    keywords: &[
        "cheese", "brie", "cheddar", "gouda", "parmesan", "fondue", "burrata",
    ],
    body: band(3, 5),
    sweetness: band(2, 4),
    tannins: band(2, 4),
    acidity: band(2, 4),
};

const DESSERT: DishCategoryProfile = DishCategoryProfile {
    category: DishCategory::Dessert,
    keywords: &[
        "dessert",
        "chocolate",
        "cake",
        "tart",
        "pudding",
        "ice cream",
        "panna cotta",
        "cheesecake",
    ],
    body: band(2, 4),
    sweetness: band(4, 5),
    tannins: band(1, 2),
    acidity: band(2, 4),
};

/// The pairing taxonomy, one row per category.
pub const DISH_TAXONOMY: &[DishCategoryProfile] = &[
    RED_MEAT, SEAFOOD, VEGETARIAN, PASTA_RICE, CHEESE, DESSERT,
];

/// The taxonomy row for `category`.
#[must_use]
pub const fn taxonomy_row(category: DishCategory) -> &'static DishCategoryProfile {
    match category {
        DishCategory::RedMeat => &RED_MEAT,
        DishCategory::Seafood => &SEAFOOD,
        DishCategory::Vegetarian => &VEGETARIAN,
        DishCategory::PastaRice => &PASTA_RICE,
        DishCategory::Cheese => &CHEESE,
        DishCategory::Dessert => &DESSERT,
    }
}

/// Categories whose keywords appear in `dish` (case-insensitive).
///
/// Unknown dishes map to no category; that is "no signal", not an error.
///
/// # Examples
/// ```
/// use backbar_core::{DishCategory, categories_for};
///
/// assert_eq!(categories_for("Grilled Steak"), [DishCategory::RedMeat]);
/// assert!(categories_for("Miso Soup").is_empty());
/// ```
#[must_use]
pub fn categories_for(dish: &str) -> Vec<DishCategory> {
    let lowered = dish.to_lowercase();
    DISH_TAXONOMY
        .iter()
        .filter(|row| row.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|row| row.category)
        .collect()
}
