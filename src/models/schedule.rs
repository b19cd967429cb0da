//! Schedule store model.
//!
//! The schedule is the set of all current assignments. Each booked
//! appointment contributes two assignments (one for the vet, one for the
//! tech) that share slot and service.
//!
//! # Invariant
//! A resource holds at most one assignment per slot. [`Schedule::book`]
//! refuses to record a pair that would break this; the assignment list is
//! private, so nothing else can append to it.

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceRole, Service, Slot};

/// A (resource, slot, service) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned resource name.
    pub resource: String,
    /// Capability of the assigned resource.
    pub role: ResourceRole,
    /// Hour slot.
    pub slot: Slot,
    /// Service being delivered.
    pub service: Service,
}

/// A booked appointment, reconstructed from its vet and tech assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Hour slot.
    pub slot: Slot,
    /// Veterinarian name.
    pub vet: String,
    /// Technician name.
    pub tech: String,
    /// Service being delivered.
    pub service: Service,
}

/// The schedule store: every assignment recorded in the current run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in booking order (vet first, then tech, per appointment).
    assignments: Vec<Assignment>,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(resource: &Resource, slot: Slot, service: Service) -> Self {
        Self {
            resource: resource.name.clone(),
            role: resource.role,
            slot,
            service,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every assignment. Idempotent.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Whether the resource already holds an assignment at the slot.
    pub fn is_booked(&self, resource: &str, slot: Slot) -> bool {
        self.assignments
            .iter()
            .any(|a| a.slot == slot && a.resource == resource)
    }

    /// Whether the resource holds any assignment, at any slot.
    pub fn is_committed(&self, resource: &str) -> bool {
        self.assignments.iter().any(|a| a.resource == resource)
    }

    /// Whether both resources are free at the slot.
    pub fn is_available(&self, vet: &Resource, tech: &Resource, slot: Slot) -> bool {
        !self.is_booked(&vet.name, slot) && !self.is_booked(&tech.name, slot)
    }

    /// Records a vet/tech pair at a slot.
    ///
    /// Returns `false` and leaves the schedule untouched if either
    /// resource is already booked at that slot.
    pub fn book(&mut self, vet: &Resource, tech: &Resource, slot: Slot, service: Service) -> bool {
        if !self.is_available(vet, tech, slot) {
            return false;
        }
        self.assignments
            .push(Assignment::new(vet, slot, service.clone()));
        self.assignments.push(Assignment::new(tech, slot, service));
        true
    }

    /// Returns all assignments held by a resource.
    pub fn assignments_for_resource(&self, resource: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.resource == resource)
            .collect()
    }

    /// Assignments in booking order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Pairs vet and tech assignments back into appointments.
    ///
    /// Relies on [`Schedule::book`] pushing the vet directly before the tech.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.assignments
            .chunks_exact(2)
            .filter_map(|pair| match pair {
                [vet, tech] if vet.role == ResourceRole::Vet && tech.role == ResourceRole::Tech => {
                    Some(Appointment {
                        slot: vet.slot,
                        vet: vet.resource.clone(),
                        tech: tech.resource.clone(),
                        service: vet.service.clone(),
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of booked appointments.
    pub fn appointment_count(&self) -> usize {
        self.assignments.len() / 2
    }

    /// Whether no assignment is recorded.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Whether no resource is booked twice at the same slot.
    pub fn has_no_double_booking(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.assignments
            .iter()
            .all(|a| seen.insert((a.resource.as_str(), a.slot)))
    }
}
