//! Demand-based pricing.
//!
//! Prices an appointment from its service's base price and the demand
//! count of its slot:
//!
//! ```text
//! price = round_cents(base_price(service) × tier(demand(slot)).multiplier)
//! ```
//!
//! The engine is a pure function of `(service, slot)`. It holds no
//! schedule state and never mutates anything.
//!
//! # Usage
//!
//! ```
//! use vet_schedule::pricing::PricingEngine;
//! use vet_schedule::models::Service;
//!
//! let engine = PricingEngine::standard();
//! assert_eq!(engine.price(&Service::Consultation, 9).unwrap(), 60.0);
//! assert_eq!(engine.price(&Service::Consultation, 14).unwrap(), 50.0);
//! ```

mod tiers;

pub use tiers::{DemandTier, TierTable};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ClinicError, DomainError, Result};
use crate::models::{DemandTable, Service, Slot, STANDARD_SLOTS};

/// Itemised price for one (service, slot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Priced service.
    pub service: Service,
    /// Priced slot.
    pub slot: Slot,
    /// Service base price.
    pub base_price: f64,
    /// Demand count of the slot.
    pub demand: u32,
    /// Selected tier label ("base" when no tier matched).
    pub tier: String,
    /// Applied multiplier.
    pub multiplier: f64,
    /// Final price, rounded to cents.
    pub price: f64,
}

/// Pricing engine over fixed base prices, demand table and tiers.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    base_prices: BTreeMap<Service, f64>,
    demand: DemandTable,
    tiers: TierTable,
    slots: Vec<Slot>,
}

impl PricingEngine {
    /// Creates an engine for the given slot domain.
    pub fn new(
        base_prices: BTreeMap<Service, f64>,
        demand: DemandTable,
        slots: Vec<Slot>,
    ) -> Self {
        Self {
            base_prices,
            demand,
            tiers: TierTable::standard(),
            slots,
        }
    }

    /// Engine with the clinic's standard prices, demand and slots.
    pub fn standard() -> Self {
        let base_prices = [Service::Consultation, Service::Surgery]
            .into_iter()
            .filter_map(|s| s.default_base_price().map(|p| (s, p)))
            .collect();
        Self::new(base_prices, DemandTable::standard(), STANDARD_SLOTS.to_vec())
    }

    /// Replaces the tier table.
    pub fn with_tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = tiers;
        self
    }

    /// Base price of a service.
    pub fn base_price(&self, service: &Service) -> Result<f64> {
        self.base_prices
            .get(service)
            .copied()
            .ok_or_else(|| ClinicError::UnknownService {
                service: service.to_string(),
            })
    }

    /// Demand count of a configured slot.
    pub fn demand_for(&self, slot: Slot) -> Result<u32> {
        if !self.slots.contains(&slot) {
            return Err(DomainError::UnknownSlot(slot).into());
        }
        Ok(self.demand.count_for(slot))
    }

    /// Full price breakdown for a service at a slot.
    pub fn quote(&self, service: &Service, slot: Slot) -> Result<PriceQuote> {
        let base_price = self.base_price(service)?;
        let demand = self.demand_for(slot)?;
        let (tier, multiplier) = match self.tiers.select(demand) {
            Some(t) => (t.label.clone(), t.multiplier),
            None => ("base".to_string(), 1.0),
        };
        let price = round_cents(base_price * multiplier);

        tracing::debug!(%service, slot, demand, %tier, price, "priced slot");

        Ok(PriceQuote {
            service: service.clone(),
            slot,
            base_price,
            demand,
            tier,
            multiplier,
            price,
        })
    }

    /// Final price for a service at a slot.
    pub fn price(&self, service: &Service, slot: Slot) -> Result<f64> {
        self.quote(service, slot).map(|q| q.price)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rounds to two decimal places.
#[inline]
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
