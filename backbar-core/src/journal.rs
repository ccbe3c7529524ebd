//! Tasting journal entries and their 1–5 ratings.
//!
//! The journal is append-only and owned by its provider. Ratings of four
//! stars and above count as positive signal; two and below count against a
//! beverage; three is neutral.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BeverageCategory, BeverageId};

/// Errors returned by [`Rating::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The value fell outside the 1–5 scale.
    #[error("rating must be between 1 and 5, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// A 1–5 star rating.
///
/// # Examples
/// ```
/// use backbar_core::Rating;
///
/// let rating = Rating::new(4).expect("valid rating");
/// assert!(rating.is_positive());
/// assert!(!rating.is_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Validate and construct a rating.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for values outside `1..=5`.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value < 1 || value > 5 {
            return Err(RatingError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// The star count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this rating counts as positive signal (four stars and up).
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 >= 4
    }

    /// Whether this rating counts against the beverage (two stars and
    /// down).
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 <= 2
    }
}

/// One tasting journal row, as snapshotted from the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Catalog beverage this entry refers to, when still resolvable.
    #[serde(default)]
    pub beverage_id: Option<BeverageId>,
    /// Style noted at tasting time.
    pub style: String,
    /// Category noted at tasting time.
    pub category: BeverageCategory,
    /// Star rating.
    pub rating: Rating,
}

impl JournalEntry {
    /// Construct an entry.
    #[must_use]
    pub fn new(
        beverage_id: Option<BeverageId>,
        style: impl Into<String>,
        category: BeverageCategory,
        rating: Rating,
    ) -> Self {
        Self {
            beverage_id,
            style: style.into(),
            category,
            rating,
        }
    }
}
