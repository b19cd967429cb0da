//! Scheduling passes and resource selection.

use serde::{Deserialize, Serialize};

use crate::models::{Service, Slot};

/// One scheduling pass: a service and the slot window it is tried in.
///
/// The window is `(after, until]`. Slots outside it are not attempted by
/// this pass. The standard clinic day runs a consultation pass over
/// `slot <= 30` and a surgery pass over `30 < slot <= 36`; with hour slots
/// 9..16 the surgery window admits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePass {
    /// Service booked by this pass.
    pub service: Service,
    /// Exclusive lower bound. `None` = unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Slot>,
    /// Inclusive upper bound.
    pub until: Slot,
}

impl ServicePass {
    /// Creates a pass over `(after, until]`.
    pub fn new(service: Service, after: Option<Slot>, until: Slot) -> Self {
        Self {
            service,
            after,
            until,
        }
    }

    /// Consultation pass: `slot <= 30`.
    pub fn consultation() -> Self {
        Self::new(Service::Consultation, None, 30)
    }

    /// Surgery pass: `30 < slot <= 36`.
    pub fn surgery() -> Self {
        Self::new(Service::Surgery, Some(30), 36)
    }

    /// The standard two-pass day: consultations, then surgeries.
    pub fn standard() -> Vec<Self> {
        vec![Self::consultation(), Self::surgery()]
    }

    /// Whether the slot falls inside this pass's window.
    #[inline]
    pub fn admits(&self, slot: Slot) -> bool {
        self.after.map_or(true, |after| slot > after) && slot <= self.until
    }

    /// Whether the window can admit any slot at all.
    pub fn is_empty_window(&self) -> bool {
        self.after.is_some_and(|after| after >= self.until)
    }
}

/// How a vet/tech pair is chosen for a slot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Only the first declared vet with the first declared tech is tried.
    /// Once either of them holds an assignment at any slot, every later
    /// slot is skipped.
    #[default]
    FirstPair,
    /// Every (vet, tech) combination is tried in declaration order and
    /// every pair free at the slot is booked. Only per-slot availability
    /// applies, so a resource can work many slots.
    Exhaustive,
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionPolicy::FirstPair => f.write_str("first-pair"),
            SelectionPolicy::Exhaustive => f.write_str("exhaustive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STANDARD_SLOTS;

    #[test]
    fn test_consultation_window_admits_all_standard_slots() {
        let pass = ServicePass::consultation();
        assert!(STANDARD_SLOTS.iter().all(|&s| pass.admits(s)));
        assert!(pass.admits(30));
        assert!(!pass.admits(31));
    }

    #[test]
    fn test_surgery_window_admits_no_standard_slot() {
        let pass = ServicePass::surgery();
        assert!(STANDARD_SLOTS.iter().all(|&s| !pass.admits(s)));
        assert!(!pass.admits(30));
        assert!(pass.admits(31));
        assert!(pass.admits(36));
        assert!(!pass.admits(37));
    }

    #[test]
    fn test_empty_window() {
        assert!(ServicePass::new(Service::Surgery, Some(12), 12).is_empty_window());
        assert!(!ServicePass::surgery().is_empty_window());
        assert!(!ServicePass::consultation().is_empty_window());
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&SelectionPolicy::FirstPair).unwrap();
        assert_eq!(json, "\"first-pair\"");
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::FirstPair);
        assert_eq!(SelectionPolicy::Exhaustive.to_string(), "exhaustive");
    }
}
