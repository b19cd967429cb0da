//! Slot demand table.
//!
//! Maps each hour slot to the number of booking requests it usually sees.
//! Slots without an explicit entry fall back to a default count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Slot;

/// Demand count used for slots missing from the table.
pub const DEFAULT_DEMAND: u32 = 3;

/// Fixed slot → demand count mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandTable {
    /// Explicit demand counts per slot.
    pub counts: BTreeMap<Slot, u32>,
    /// Count returned for slots without an explicit entry.
    pub default_count: u32,
}

impl DemandTable {
    /// Creates an empty table with the given default.
    pub fn new(default_count: u32) -> Self {
        Self {
            counts: BTreeMap::new(),
            default_count,
        }
    }

    /// The clinic's standard demand profile.
    ///
    /// Slot 16 is intentionally absent and resolves to the default.
    pub fn standard() -> Self {
        Self::new(DEFAULT_DEMAND)
            .with_count(9, 5)
            .with_count(10, 10)
            .with_count(11, 7)
            .with_count(12, 8)
            .with_count(13, 12)
            .with_count(14, 1)
            .with_count(15, 6)
    }

    /// Sets the demand count for a slot.
    pub fn with_count(mut self, slot: Slot, count: u32) -> Self {
        self.counts.insert(slot, count);
        self
    }

    /// Demand count for a slot (default when not listed).
    pub fn count_for(&self, slot: Slot) -> u32 {
        self.counts
            .get(&slot)
            .copied()
            .unwrap_or(self.default_count)
    }
}

impl Default for DemandTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_counts() {
        let d = DemandTable::standard();
        assert_eq!(d.count_for(9), 5);
        assert_eq!(d.count_for(10), 10);
        assert_eq!(d.count_for(11), 7);
        assert_eq!(d.count_for(12), 8);
        assert_eq!(d.count_for(13), 12);
        assert_eq!(d.count_for(14), 1);
        assert_eq!(d.count_for(15), 6);
    }

    #[test]
    fn test_default_for_unlisted_slot() {
        let d = DemandTable::standard();
        assert!(!d.counts.contains_key(&16));
        assert_eq!(d.count_for(16), DEFAULT_DEMAND);
    }

    #[test]
    fn test_custom_default() {
        let d = DemandTable::new(20).with_count(9, 1);
        assert_eq!(d.count_for(9), 1);
        assert_eq!(d.count_for(10), 20);
    }
}
