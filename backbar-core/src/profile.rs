//! Preference profiles: the comparison target the matcher scores against.
//!
//! A profile is either entered explicitly by the user or learned from their
//! favorites and journal. Learned profiles are recomputed on every scoring
//! call; nothing here is cached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FlavorProfile;

/// Maximum number of preferred styles a profile carries.
pub const MAX_PREFERRED_STYLES: usize = 3;

/// Errors returned by [`PriceRange::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceRangeError {
    /// The lower bound exceeded the upper bound.
    #[error("price range lower bound {min} exceeds upper bound {max}")]
    Inverted {
        /// Rejected lower bound.
        min: u32,
        /// Rejected upper bound.
        max: u32,
    },
}

/// Inclusive price band in whole currency units.
///
/// Bounds are unsigned, so a negative band is unrepresentable; an inverted
/// band is rejected at construction.
///
/// # Examples
/// ```
/// use backbar_core::PriceRange;
///
/// let band = PriceRange::new(20, 60).expect("valid band");
/// assert!(band.contains(20));
/// assert!(!band.contains(61));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Validate and construct a band.
    ///
    /// # Errors
    /// Returns [`PriceRangeError::Inverted`] when `min > max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, PriceRangeError> {
        if min > max {
            return Err(PriceRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Whether `price` falls inside the band.
    #[must_use]
    pub const fn contains(self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

/// The user's taste preferences, explicit or learned.
///
/// # Examples
/// ```
/// use backbar_core::{FlavorProfile, PreferenceProfile};
///
/// let profile = PreferenceProfile::new(FlavorProfile::default())
///     .with_style("red")
///     .with_style("stout");
/// assert!(profile.prefers_style("Red"));
/// assert_eq!(profile.preferred_styles().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    preferred_styles: Vec<String>,
    price_range: Option<PriceRange>,
    flavor: FlavorProfile,
    avoid_high_tannins: bool,
}

impl PreferenceProfile {
    /// Construct a profile around a flavor target, with no styles, no price
    /// band, and no tannin aversion.
    #[must_use]
    pub const fn new(flavor: FlavorProfile) -> Self {
        Self {
            preferred_styles: Vec::new(),
            price_range: None,
            flavor,
            avoid_high_tannins: false,
        }
    }

    /// Append a preferred style while returning `self` for chaining.
    ///
    /// The list is most-favored first and capped at
    /// [`MAX_PREFERRED_STYLES`]; duplicates (case-insensitive) and styles
    /// beyond the cap are ignored.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        let style = style.into();
        if self.preferred_styles.len() < MAX_PREFERRED_STYLES && !self.prefers_style(&style) {
            self.preferred_styles.push(style);
        }
        self
    }

    /// Set the price band while returning `self` for chaining.
    #[must_use]
    pub const fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Mark the profile as tannin-averse.
    #[must_use]
    pub const fn avoiding_high_tannins(mut self) -> Self {
        self.avoid_high_tannins = true;
        self
    }

    /// Preferred styles, most-favored first.
    #[must_use]
    pub fn preferred_styles(&self) -> &[String] {
        &self.preferred_styles
    }

    /// The price band, when one is set.
    #[must_use]
    pub const fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// The flavor target.
    #[must_use]
    pub const fn flavor(&self) -> FlavorProfile {
        self.flavor
    }

    /// Whether tannic beverages should be penalised.
    #[must_use]
    pub const fn avoid_high_tannins(&self) -> bool {
        self.avoid_high_tannins
    }

    /// Whether `style` is among the preferred styles (case-insensitive).
    #[must_use]
    pub fn prefers_style(&self, style: &str) -> bool {
        self.preferred_styles
            .iter()
            .any(|preferred| preferred.eq_ignore_ascii_case(style))
    }
}

impl Default for PreferenceProfile {
    /// A profile with the default flavor target and nothing else.
    fn default() -> Self {
        Self::new(FlavorProfile::default())
    }
}
