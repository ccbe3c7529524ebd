//! Catalog beverages: read-only snapshots the engine scores but never
//! mutates.
//!
//! Snapshots deserialize directly from the hosted backend's camelCase JSON
//! payloads. Mutation (stock, pricing, favorites) is owned by the catalog
//! provider; the engine only reads.

use serde::{Deserialize, Serialize};

use crate::FlavorProfile;

/// Identifier for a beverage within the catalog snapshot.
pub type BeverageId = u64;

/// Broad beverage families carried by the catalog.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use backbar_core::BeverageCategory;
///
/// assert_eq!(BeverageCategory::NonAlcoholic.as_str(), "non-alcoholic");
/// assert_eq!(
///     BeverageCategory::from_str("wine"),
///     Ok(BeverageCategory::Wine)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeverageCategory {
    /// Still, sparkling, and fortified wines.
    Wine,
    /// Beers and ciders.
    Beer,
    /// Neat spirits.
    Spirit,
    /// Mixed drinks.
    Cocktail,
    /// Alcohol-free options.
    NonAlcoholic,
}

impl BeverageCategory {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wine => "wine",
            Self::Beer => "beer",
            Self::Spirit => "spirit",
            Self::Cocktail => "cocktail",
            Self::NonAlcoholic => "non-alcoholic",
        }
    }
}

impl std::fmt::Display for BeverageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BeverageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wine" => Ok(Self::Wine),
            "beer" => Ok(Self::Beer),
            "spirit" => Ok(Self::Spirit),
            "cocktail" => Ok(Self::Cocktail),
            "non-alcoholic" => Ok(Self::NonAlcoholic),
            _ => Err(format!("unknown beverage category '{s}'")),
        }
    }
}

fn default_available() -> bool {
    true
}

/// One catalog entry, as snapshotted from the backing store.
///
/// # Examples
/// ```
/// use backbar_core::{Beverage, BeverageCategory, FlavorProfile};
///
/// let malbec = Beverage::new(3, "Mendoza Malbec", BeverageCategory::Wine, "red")
///     .with_price(38)
///     .with_flavor(FlavorProfile::new(4, 2, 4, 3).expect("valid profile"))
///     .with_pairings(["Steak", "Empanadas"]);
/// assert!(malbec.available);
/// assert_eq!(malbec.food_pairings.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beverage {
    /// Unique identifier within the catalog.
    pub id: BeverageId,
    /// Display name.
    pub name: String,
    /// Broad family.
    pub category: BeverageCategory,
    /// Style within the category, e.g. "red" for wine or "ipa" for beer.
    pub style: String,
    /// List price in whole currency units, when known.
    #[serde(default)]
    pub price: Option<u32>,
    /// Dishes the venue recommends alongside this beverage.
    #[serde(default)]
    pub food_pairings: Vec<String>,
    /// Tasting attributes, when captured.
    #[serde(default)]
    pub flavor: Option<FlavorProfile>,
    /// Highlighted by staff.
    #[serde(default)]
    pub featured: bool,
    /// Currently pourable.
    #[serde(default = "default_available", alias = "inStock")]
    pub available: bool,
}

impl Beverage {
    /// Construct an available, unfeatured beverage with no optional data.
    #[must_use]
    pub fn new(
        id: BeverageId,
        name: impl Into<String>,
        category: BeverageCategory,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            style: style.into(),
            price: None,
            food_pairings: Vec::new(),
            flavor: None,
            featured: false,
            available: true,
        }
    }

    /// Set the list price while returning `self` for chaining.
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the tasting attributes while returning `self` for chaining.
    #[must_use]
    pub fn with_flavor(mut self, flavor: FlavorProfile) -> Self {
        self.flavor = Some(flavor);
        self
    }

    /// Set the recommended dishes while returning `self` for chaining.
    #[must_use]
    pub fn with_pairings<I, S>(mut self, pairings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.food_pairings = pairings.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the beverage as a staff highlight.
    #[must_use]
    pub fn with_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Mark the beverage as currently unavailable.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Tasting attributes, substituting the default profile when absent.
    #[must_use]
    pub fn flavor_or_default(&self) -> FlavorProfile {
        self.flavor.unwrap_or_default()
    }
}
