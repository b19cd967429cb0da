//! First-fit clinic scheduler.
//!
//! # Algorithm
//!
//! 1. Reset the schedule store.
//! 2. For each pass (consultations, then surgeries), try every configured
//!    slot the pass window admits, in slot order.
//! 3. For each slot, try the candidate vet/tech pair(s) of the selection
//!    policy; book a pair only if neither member is busy at that slot.
//!    An unavailable slot is skipped silently.
//! 4. Price every booked appointment.
//!
//! Under [`SelectionPolicy::FirstPair`] the same pair is tried for every
//! slot and is unavailable once either member holds any assignment, so
//! the standard day books exactly one appointment (slot 9, sri + brooke,
//! consultation) and skips the other seven slots.
//! [`SelectionPolicy::Exhaustive`] checks availability per slot only.
//!
//! # Complexity
//! O(p * s * v * t * a) where p=passes, s=slots, v=vets, t=techs,
//! a=assignments (availability scan).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{SelectionPolicy, ServicePass};
use crate::config::ClinicConfig;
use crate::error::{DomainError, Result};
use crate::models::{Appointment, Resource, Schedule, Service, Slot};
use crate::pricing::PricingEngine;
use crate::report::Report;

/// Result of a full scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Appointments in the order they were booked.
    pub booked: Vec<Appointment>,
    /// Slot attempts that booked nothing.
    pub skipped: usize,
    /// Priced report of the final schedule.
    pub report: Report,
}

/// Single-day clinic scheduler.
///
/// Owns the schedule store; nothing else mutates it.
///
/// # Example
///
/// ```
/// use vet_schedule::scheduler::ClinicScheduler;
///
/// let mut scheduler = ClinicScheduler::standard();
/// let outcome = scheduler.run().unwrap();
/// assert_eq!(outcome.booked.len(), 1);
/// assert_eq!(outcome.report.priced[0].price(), 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClinicScheduler {
    vets: Vec<Resource>,
    techs: Vec<Resource>,
    slots: Vec<Slot>,
    passes: Vec<ServicePass>,
    services: BTreeSet<Service>,
    policy: SelectionPolicy,
    pricing: PricingEngine,
    schedule: Schedule,
}

impl ClinicScheduler {
    /// Builds a scheduler from a validated configuration.
    pub fn from_config(config: &ClinicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Scheduler over the clinic's standard facts.
    pub fn standard() -> Self {
        Self::build(&ClinicConfig::default())
    }

    fn build(config: &ClinicConfig) -> Self {
        let mut slots = config.slots.clone();
        slots.sort_unstable();

        Self {
            vets: config.vet_resources(),
            techs: config.tech_resources(),
            slots,
            passes: config.passes.clone(),
            services: config.base_prices.keys().cloned().collect(),
            policy: config.policy,
            pricing: config.pricing_engine(),
            schedule: Schedule::new(),
        }
    }

    /// Sets the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current schedule store.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Pricing engine used for the report.
    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// All vets followed by all techs.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.vets.iter().chain(self.techs.iter())
    }

    /// Configured slots in ascending order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Active selection policy.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Clears the schedule store.
    pub fn reset(&mut self) {
        self.schedule.clear();
        tracing::debug!("schedule store cleared");
    }

    /// Runs reset, every pass, and the pricing pass.
    pub fn run(&mut self) -> Result<RunOutcome> {
        self.reset();

        let mut booked = Vec::new();
        let mut skipped = 0;

        for pass in self.passes.clone() {
            let window: Vec<Slot> = self
                .slots
                .iter()
                .copied()
                .filter(|&slot| pass.admits(slot))
                .collect();
            tracing::debug!(
                service = %pass.service,
                slots = window.len(),
                "starting pass"
            );

            for slot in window {
                let made = self.assign(slot, &pass.service)?;
                if made.is_empty() {
                    skipped += 1;
                }
                booked.extend(made);
            }
        }

        let report = Report::build(booked.clone(), &self.schedule, &self.pricing)?;
        tracing::info!(
            appointments = booked.len(),
            skipped,
            policy = %self.policy,
            "scheduling run complete"
        );

        Ok(RunOutcome {
            booked,
            skipped,
            report,
        })
    }

    /// Tries to book a slot for a service under the selection policy.
    ///
    /// Returns the appointments booked (empty when the slot was skipped).
    /// Under [`SelectionPolicy::FirstPair`] the slot is skipped as soon as
    /// the first vet or first tech is booked anywhere in the store.
    ///
    /// # Errors
    /// [`DomainError`] for a slot or service outside the clinic's domains.
    pub fn assign(&mut self, slot: Slot, service: &Service) -> Result<Vec<Appointment>> {
        self.check_slot(slot)?;
        self.check_service(service)?;

        let candidates: Vec<(Resource, Resource)> = match self.policy {
            SelectionPolicy::FirstPair => match (self.vets.first(), self.techs.first()) {
                (Some(vet), Some(tech))
                    if !self.schedule.is_committed(&vet.name)
                        && !self.schedule.is_committed(&tech.name) =>
                {
                    vec![(vet.clone(), tech.clone())]
                }
                _ => Vec::new(),
            },
            SelectionPolicy::Exhaustive => self
                .vets
                .iter()
                .flat_map(|v| self.techs.iter().map(move |t| (v.clone(), t.clone())))
                .collect(),
        };

        let mut booked = Vec::new();
        for (vet, tech) in &candidates {
            if let Some(appt) = self.try_book(slot, vet, tech, service) {
                booked.push(appt);
            }
        }

        if booked.is_empty() {
            tracing::debug!(slot, %service, "slot skipped, no free pair");
        }
        Ok(booked)
    }

    /// Tries to book a specific vet and tech at a slot.
    ///
    /// Returns `Ok(None)` when either is already busy at that slot.
    ///
    /// # Errors
    /// [`DomainError`] for an unknown slot, service, vet, or tech.
    pub fn assign_pair(
        &mut self,
        slot: Slot,
        vet: &str,
        tech: &str,
        service: &Service,
    ) -> Result<Option<Appointment>> {
        self.check_slot(slot)?;
        self.check_service(service)?;
        let vet = self
            .vets
            .iter()
            .find(|r| r.name == vet)
            .cloned()
            .ok_or_else(|| DomainError::UnknownVet(vet.to_string()))?;
        let tech = self
            .techs
            .iter()
            .find(|r| r.name == tech)
            .cloned()
            .ok_or_else(|| DomainError::UnknownTech(tech.to_string()))?;

        Ok(self.try_book(slot, &vet, &tech, service))
    }

    fn try_book(
        &mut self,
        slot: Slot,
        vet: &Resource,
        tech: &Resource,
        service: &Service,
    ) -> Option<Appointment> {
        if !self.schedule.book(vet, tech, slot, service.clone()) {
            return None;
        }
        tracing::info!(slot, vet = %vet, tech = %tech, %service, "appointment scheduled");
        Some(Appointment {
            slot,
            vet: vet.name.clone(),
            tech: tech.name.clone(),
            service: service.clone(),
        })
    }

    fn check_slot(&self, slot: Slot) -> Result<()> {
        if self.slots.contains(&slot) {
            Ok(())
        } else {
            Err(DomainError::UnknownSlot(slot).into())
        }
    }

    fn check_service(&self, service: &Service) -> Result<()> {
        if self.services.contains(service) {
            Ok(())
        } else {
            Err(DomainError::UnknownService(service.to_string()).into())
        }
    }
}

impl Default for ClinicScheduler {
    fn default() -> Self {
        Self::standard()
    }
}
