//! Demand tiers.
//!
//! A tier is a half-open demand interval `[min, max)` paired with a price
//! multiplier. Tiers are evaluated top-down and the first match wins, so a
//! demand count sitting exactly on a boundary belongs to the higher tier.
//!
//! # Standard tiers
//!
//! | Tier | Demand | Multiplier |
//! |------|--------|------------|
//! | low | `< 5` | 1.0 |
//! | moderate | `5..10` | 1.2 |
//! | high | `10..15` | 1.5 |
//! | peak | `>= 15` | 2.0 |

use serde::{Deserialize, Serialize};

/// A demand interval with its price multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandTier {
    /// Tier label (e.g., "moderate").
    pub label: String,
    /// Inclusive lower bound on demand count.
    pub min: u32,
    /// Exclusive upper bound. `None` = unbounded.
    pub max: Option<u32>,
    /// Multiplier applied to the base price.
    pub multiplier: f64,
}

impl DemandTier {
    /// Creates a bounded tier `[min, max)`.
    pub fn bounded(label: impl Into<String>, min: u32, max: u32, multiplier: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max: Some(max),
            multiplier,
        }
    }

    /// Creates an open-ended tier `[min, ∞)`.
    pub fn at_least(label: impl Into<String>, min: u32, multiplier: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max: None,
            multiplier,
        }
    }

    /// Whether the demand count falls in this tier.
    #[inline]
    pub fn matches(&self, demand: u32) -> bool {
        demand >= self.min && self.max.map_or(true, |max| demand < max)
    }
}

/// Ordered list of tiers. First match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    tiers: Vec<DemandTier>,
}

impl TierTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// The clinic's standard four tiers.
    pub fn standard() -> Self {
        Self::new()
            .with_tier(DemandTier::bounded("low", 0, 5, 1.0))
            .with_tier(DemandTier::bounded("moderate", 5, 10, 1.2))
            .with_tier(DemandTier::bounded("high", 10, 15, 1.5))
            .with_tier(DemandTier::at_least("peak", 15, 2.0))
    }

    /// Appends a tier (evaluated after all existing ones).
    pub fn with_tier(mut self, tier: DemandTier) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Finds the first tier matching the demand count.
    pub fn select(&self, demand: u32) -> Option<&DemandTier> {
        self.tiers.iter().find(|t| t.matches(demand))
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tier_selection() {
        let t = TierTable::standard();
        assert_eq!(t.select(0).unwrap().label, "low");
        assert_eq!(t.select(4).unwrap().label, "low");
        assert_eq!(t.select(5).unwrap().label, "moderate");
        assert_eq!(t.select(9).unwrap().label, "moderate");
        assert_eq!(t.select(10).unwrap().label, "high");
        assert_eq!(t.select(14).unwrap().label, "high");
        assert_eq!(t.select(15).unwrap().label, "peak");
        assert_eq!(t.select(1000).unwrap().label, "peak");
    }

    #[test]
    fn test_lower_bound_inclusive() {
        let tier = DemandTier::bounded("x", 10, 15, 1.5);
        assert!(tier.matches(10));
        assert!(!tier.matches(9));
        assert!(!tier.matches(15));
    }

    #[test]
    fn test_first_match_wins() {
        // Overlapping tiers: the earlier one takes precedence
        let t = TierTable::new()
            .with_tier(DemandTier::at_least("first", 0, 3.0))
            .with_tier(DemandTier::at_least("second", 0, 4.0));
        let tier = t.select(7).unwrap();
        assert_eq!(tier.label, "first");
        assert_eq!(tier.multiplier, 3.0);
    }

    #[test]
    fn test_no_match() {
        let t = TierTable::new().with_tier(DemandTier::bounded("narrow", 5, 6, 9.0));
        assert!(t.select(2).is_none());
        assert!(t.select(6).is_none());
        assert_eq!(t.select(5).unwrap().multiplier, 9.0);
    }
}
