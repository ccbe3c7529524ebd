//! Flavor profiles: the shared four-axis vector all scoring operates over.
//!
//! Each attribute sits on a closed 1–5 scale. Values outside the scale are
//! programming errors and are rejected by the validating constructor rather
//! than clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound of the flavor scale.
pub const FLAVOR_MIN: u8 = 1;
/// Upper bound of the flavor scale.
pub const FLAVOR_MAX: u8 = 5;

/// The four axes of a [`FlavorProfile`].
///
/// # Examples
/// ```
/// use backbar_core::FlavorAttribute;
///
/// assert_eq!(FlavorAttribute::Tannins.as_str(), "tannins");
/// assert_eq!(FlavorAttribute::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorAttribute {
    /// Weight and mouthfeel.
    Body,
    /// Residual sweetness.
    Sweetness,
    /// Tannic grip.
    Tannins,
    /// Perceived acidity.
    Acidity,
}

impl FlavorAttribute {
    /// Every attribute in canonical order.
    pub const ALL: [Self; 4] = [Self::Body, Self::Sweetness, Self::Tannins, Self::Acidity];

    /// Return the attribute as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Sweetness => "sweetness",
            Self::Tannins => "tannins",
            Self::Acidity => "acidity",
        }
    }
}

impl std::fmt::Display for FlavorAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`FlavorProfile::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlavorProfileError {
    /// An attribute fell outside the closed 1–5 scale.
    #[error("{attribute} must be between {FLAVOR_MIN} and {FLAVOR_MAX}, got {value}")]
    OutOfRange {
        /// The offending attribute.
        attribute: FlavorAttribute,
        /// The rejected value.
        value: u8,
    },
}

/// A beverage's tasting attributes on the 1–5 scale.
///
/// The default profile stands in for beverages without tasting data.
///
/// # Examples
/// ```
/// use backbar_core::FlavorProfile;
///
/// let bold = FlavorProfile::new(5, 1, 4, 3).expect("valid profile");
/// let house = FlavorProfile::default();
/// assert_eq!(bold.body(), 5);
/// assert_eq!(bold.distance(house), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    body: u8,
    sweetness: u8,
    tannins: u8,
    acidity: u8,
}

impl FlavorProfile {
    /// Validate and construct a profile.
    ///
    /// # Errors
    /// Returns [`FlavorProfileError::OutOfRange`] when any attribute leaves
    /// the closed 1–5 scale.
    pub fn new(
        body: u8,
        sweetness: u8,
        tannins: u8,
        acidity: u8,
    ) -> Result<Self, FlavorProfileError> {
        let values = [
            (FlavorAttribute::Body, body),
            (FlavorAttribute::Sweetness, sweetness),
            (FlavorAttribute::Tannins, tannins),
            (FlavorAttribute::Acidity, acidity),
        ];
        for (attribute, value) in values {
            if !(FLAVOR_MIN..=FLAVOR_MAX).contains(&value) {
                return Err(FlavorProfileError::OutOfRange { attribute, value });
            }
        }
        Ok(Self {
            body,
            sweetness,
            tannins,
            acidity,
        })
    }

    /// Weight and mouthfeel.
    #[must_use]
    pub const fn body(self) -> u8 {
        self.body
    }

    /// Residual sweetness.
    #[must_use]
    pub const fn sweetness(self) -> u8 {
        self.sweetness
    }

    /// Tannic grip.
    #[must_use]
    pub const fn tannins(self) -> u8 {
        self.tannins
    }

    /// Perceived acidity.
    #[must_use]
    pub const fn acidity(self) -> u8 {
        self.acidity
    }

    /// The value of one attribute.
    ///
    /// # Examples
    /// ```
    /// use backbar_core::{FlavorAttribute, FlavorProfile};
    ///
    /// let profile = FlavorProfile::default();
    /// assert_eq!(profile.attribute(FlavorAttribute::Sweetness), 2);
    /// ```
    #[must_use]
    pub const fn attribute(self, attribute: FlavorAttribute) -> u8 {
        match attribute {
            FlavorAttribute::Body => self.body,
            FlavorAttribute::Sweetness => self.sweetness,
            FlavorAttribute::Tannins => self.tannins,
            FlavorAttribute::Acidity => self.acidity,
        }
    }

    /// L1 distance to `other`: the sum of absolute per-attribute
    /// differences, in `0..=16`.
    #[must_use]
    pub fn distance(self, other: Self) -> u8 {
        FlavorAttribute::ALL
            .iter()
            .map(|&attribute| self.attribute(attribute).abs_diff(other.attribute(attribute)))
            .sum()
    }
}

impl Default for FlavorProfile {
    /// The stand-in profile for beverages without tasting data.
    fn default() -> Self {
        Self {
            body: 3,
            sweetness: 2,
            tannins: 3,
            acidity: 3,
        }
    }
}
