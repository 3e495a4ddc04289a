use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::sync::{Mutex, lock};
use crate::{InventoryId, SequenceStore};

/// A sequence store guarding every counter with one mutex.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Fair access across threads (with `parking-lot`)
///
/// ## Recommended When
/// - Reservation rate is low and simplicity matters more than throughput
/// - Your target doesn't support 64-bit atomics
///
/// ## See Also
/// - [`AtomicSequenceStore`]
///
/// [`AtomicSequenceStore`]: crate::AtomicSequenceStore
#[derive(Debug, Default)]
pub struct LockSequenceStore {
    counters: Mutex<HashMap<InventoryId, u64>>,
}

impl LockSequenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SequenceStore for LockSequenceStore {
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn reserve(&self, inventory: InventoryId) -> u64 {
        let mut counters = lock(&self.counters);
        let counter = counters.entry(inventory).or_insert_with(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%inventory, "creating sequence counter");
            0
        });
        let reserved = *counter;
        *counter = reserved.wrapping_add(1);
        reserved
    }

    fn current(&self, inventory: InventoryId) -> Option<u64> {
        lock(&self.counters).get(&inventory).copied()
    }

    fn restore(&self, inventory: InventoryId, next: u64) {
        lock(&self.counters).insert(inventory, next);
    }

    fn forget(&self, inventory: InventoryId) -> Option<u64> {
        lock(&self.counters).remove(&inventory)
    }
}
