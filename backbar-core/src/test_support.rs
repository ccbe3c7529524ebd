//! Test-only in-memory providers and snapshot builders used by unit and
//! behaviour tests.

use crate::{
    Beverage, BeverageCategory, BeverageId, CatalogProvider, FavoritesProvider, FlavorProfile,
    JournalEntry, JournalProvider, PreferenceProfile, PreferenceStore,
};

/// In-memory implementation of every provider seam.
///
/// Intended for tests and examples; applications back the provider traits
/// with their persistence layer instead.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    catalog: Vec<Beverage>,
    favorites: Vec<BeverageId>,
    journal: Vec<JournalEntry>,
    preferences: Option<PreferenceProfile>,
}

impl MemoryLibrary {
    /// An empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog while returning `self` for chaining.
    #[must_use]
    pub fn with_catalog<I>(mut self, beverages: I) -> Self
    where
        I: IntoIterator<Item = Beverage>,
    {
        self.catalog = beverages.into_iter().collect();
        self
    }

    /// Append a favorite while returning `self` for chaining.
    #[must_use]
    pub fn with_favorite(mut self, id: BeverageId) -> Self {
        self.favorites.push(id);
        self
    }

    /// Append a journal entry while returning `self` for chaining.
    #[must_use]
    pub fn with_entry(mut self, entry: JournalEntry) -> Self {
        self.journal.push(entry);
        self
    }

    /// Store explicit preferences while returning `self` for chaining.
    #[must_use]
    pub fn with_preferences(mut self, profile: PreferenceProfile) -> Self {
        self.preferences = Some(profile);
        self
    }
}

impl CatalogProvider for MemoryLibrary {
    fn beverages(&self) -> &[Beverage] {
        &self.catalog
    }
}

impl FavoritesProvider for MemoryLibrary {
    fn favorites(&self) -> &[BeverageId] {
        &self.favorites
    }
}

impl JournalProvider for MemoryLibrary {
    fn entries(&self) -> &[JournalEntry] {
        &self.journal
    }
}

impl PreferenceStore for MemoryLibrary {
    fn preferences(&self) -> Option<&PreferenceProfile> {
        self.preferences.as_ref()
    }
}

/// A wine snapshot with a price and the default flavor profile.
#[must_use]
pub fn sample_wine(id: BeverageId, style: &str, price: u32) -> Beverage {
    Beverage::new(id, format!("Wine #{id}"), BeverageCategory::Wine, style)
        .with_price(price)
        .with_flavor(FlavorProfile::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_serves_what_was_added() {
        let library = MemoryLibrary::new()
            .with_catalog([sample_wine(1, "red", 30)])
            .with_favorite(1);
        assert_eq!(library.beverages().len(), 1);
        assert_eq!(library.favorites(), [1]);
        assert!(library.entries().is_empty());
        assert!(library.preferences().is_none());
    }
}
