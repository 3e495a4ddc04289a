use std::sync::Arc;

use crate::InventoryId;

/// Per-inventory monotonic counters.
///
/// This is the only shared mutable state the engine touches. Implementations
/// must make [`SequenceStore::reserve`] linearizable per inventory: concurrent
/// reservations for the same inventory never observe the same value, and a
/// reservation either happens completely or not at all.
///
/// An implementation backed by external storage (a transactional increment)
/// can stand in for the in-memory stores when several processes mint IDs for
/// the same inventories.
///
/// # Example
/// ```
/// use idfmt::{AtomicSequenceStore, InventoryId, SequenceStore};
///
/// let store = AtomicSequenceStore::new();
/// let inventory = InventoryId::new(1);
///
/// assert_eq!(store.current(inventory), None);
/// assert_eq!(store.reserve(inventory), 0);
/// assert_eq!(store.reserve(inventory), 1);
/// assert_eq!(store.current(inventory), Some(2));
/// ```
pub trait SequenceStore {
    /// Atomically reads and increments the counter for `inventory`, creating
    /// it at zero if absent. Returns the value before the increment.
    fn reserve(&self, inventory: InventoryId) -> u64;

    /// The value the next [`SequenceStore::reserve`] would return, or `None`
    /// if the inventory has no counter yet. Never creates a counter.
    fn current(&self, inventory: InventoryId) -> Option<u64>;

    /// Sets the counter for `inventory` so the next reservation returns
    /// `next`. Used to resume from persisted state.
    fn restore(&self, inventory: InventoryId, next: u64);

    /// Drops the counter for `inventory`, returning its last value.
    fn forget(&self, inventory: InventoryId) -> Option<u64>;
}

impl<S: SequenceStore + ?Sized> SequenceStore for &S {
    fn reserve(&self, inventory: InventoryId) -> u64 {
        (**self).reserve(inventory)
    }

    fn current(&self, inventory: InventoryId) -> Option<u64> {
        (**self).current(inventory)
    }

    fn restore(&self, inventory: InventoryId, next: u64) {
        (**self).restore(inventory, next);
    }

    fn forget(&self, inventory: InventoryId) -> Option<u64> {
        (**self).forget(inventory)
    }
}

impl<S: SequenceStore + ?Sized> SequenceStore for Arc<S> {
    fn reserve(&self, inventory: InventoryId) -> u64 {
        (**self).reserve(inventory)
    }

    fn current(&self, inventory: InventoryId) -> Option<u64> {
        (**self).current(inventory)
    }

    fn restore(&self, inventory: InventoryId, next: u64) {
        (**self).restore(inventory, next);
    }

    fn forget(&self, inventory: InventoryId) -> Option<u64> {
        (**self).forget(inventory)
    }
}
