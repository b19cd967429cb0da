//! Input validation for clinic configurations.
//!
//! Checks structural integrity of a [`ClinicConfig`] before scheduling.
//! Detects:
//! - Duplicate names and slots
//! - Staff listed as both vet and tech
//! - Empty rosters or slot sets
//! - Demand entries for unconfigured slots
//! - Unusable base prices and pass definitions
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use crate::config::ClinicConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two resources or slots share the same identifier.
    DuplicateId,
    /// A name appears in both the vet and tech rosters.
    RoleConflict,
    /// No vets or no techs configured.
    EmptyRoster,
    /// No slots configured.
    EmptySlots,
    /// A demand entry references a slot that is not configured.
    UnknownDemandSlot,
    /// A base price is zero, negative, or not finite.
    InvalidBasePrice,
    /// A pass books a service that has no base price.
    UnpricedPass,
    /// A pass window can never admit a slot.
    EmptyPassWindow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a clinic configuration.
///
/// Checks:
/// 1. At least one vet, one tech, and one slot
/// 2. No duplicate vet, tech, or slot entries
/// 3. No name is both a vet and a tech
/// 4. Every demand entry refers to a configured slot
/// 5. Every base price is finite and positive
/// 6. Every pass service has a base price and a non-empty window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &ClinicConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.vets.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "No vets configured",
        ));
    }
    if config.techs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "No techs configured",
        ));
    }
    if config.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlots,
            "No slots configured",
        ));
    }

    // Roster names
    let mut vet_names = HashSet::new();
    for vet in &config.vets {
        if !vet_names.insert(vet.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate vet: {vet}"),
            ));
        }
    }
    let mut tech_names = HashSet::new();
    for tech in &config.techs {
        if !tech_names.insert(tech.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate tech: {tech}"),
            ));
        }
    }
    let mut conflicts: Vec<&str> = vet_names.intersection(&tech_names).copied().collect();
    conflicts.sort_unstable();
    for name in conflicts {
        errors.push(ValidationError::new(
            ValidationErrorKind::RoleConflict,
            format!("'{name}' is listed as both vet and tech"),
        ));
    }

    // Slots and demand
    let mut slots = HashSet::new();
    for slot in &config.slots {
        if !slots.insert(*slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot: {slot}"),
            ));
        }
    }
    for slot in config.demand.keys() {
        if !slots.contains(slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDemandSlot,
                format!("Demand given for unconfigured slot {slot}"),
            ));
        }
    }

    // Prices and passes
    for (service, price) in &config.base_prices {
        if !price.is_finite() || *price <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBasePrice,
                format!("Base price for '{service}' must be positive, got {price}"),
            ));
        }
    }
    for pass in &config.passes {
        if !config.base_prices.contains_key(&pass.service) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnpricedPass,
                format!("Pass for '{}' has no base price", pass.service),
            ));
        }
        if pass.is_empty_window() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPassWindow,
                format!("Pass for '{}' admits no slot", pass.service),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
