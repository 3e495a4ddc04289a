use core::fmt;

/// Identity of the inventory whose items are being numbered.
///
/// Sequence counters are keyed by this value and never compared across
/// inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct InventoryId(u64);

impl InventoryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for InventoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<InventoryId> for u64 {
    fn from(id: InventoryId) -> Self {
        id.0
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
