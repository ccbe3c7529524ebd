//! Snapshot provider seams owned by collaborators outside the engine.
//!
//! The engine consumes read-only snapshots; persistence and mutation stay
//! with the providers. Implementations refresh their snapshot on every
//! underlying data change and hand the engine one coherent view per call;
//! the engine caches nothing across calls.

use crate::{Beverage, BeverageId, JournalEntry, PreferenceProfile};

/// Read-only access to the beverage catalog.
pub trait CatalogProvider {
    /// The current catalog snapshot, in stable insertion order.
    fn beverages(&self) -> &[Beverage];
}

/// Read-only access to the user's favorites.
pub trait FavoritesProvider {
    /// Favorited beverage ids, oldest first. Adding and removing favorites
    /// is owned entirely by the provider.
    fn favorites(&self) -> &[BeverageId];
}

/// Read-only access to the tasting journal.
pub trait JournalProvider {
    /// Append-only journal entries, oldest first.
    fn entries(&self) -> &[JournalEntry];
}

/// Storage for an explicitly entered preference profile.
pub trait PreferenceStore {
    /// The stored profile; `None` means preferences should be learned from
    /// behavior instead.
    fn preferences(&self) -> Option<&PreferenceProfile>;
}
