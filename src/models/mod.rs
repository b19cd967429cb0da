//! Clinic domain models.
//!
//! Provides the core data types for a single-day clinic schedule:
//! staff resources, services, hour slots, demand counts, and the
//! schedule store that records assignments.
//!
//! # Domain Mappings
//!
//! | vet-schedule | Meaning |
//! |--------------|---------|
//! | Resource | Vet or tech on shift |
//! | Slot | Hour label (9..16), not a wall-clock time |
//! | Service | Consultation, surgery, or configured custom service |
//! | Assignment | One resource booked at one slot for one service |
//! | Schedule | All assignments of the current run |

mod demand;
mod resource;
mod schedule;
mod service;

pub use demand::{DemandTable, DEFAULT_DEMAND};
pub use resource::{Resource, ResourceRole};
pub use schedule::{Appointment, Assignment, Schedule};
pub use service::Service;

/// Integer hour label identifying a scheduling unit.
pub type Slot = u32;

/// The clinic's standard slot set.
pub const STANDARD_SLOTS: [Slot; 8] = [9, 10, 11, 12, 13, 14, 15, 16];
