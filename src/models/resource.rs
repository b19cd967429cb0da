//! Resource model.
//!
//! Resources are the clinic staff that appointments are booked against.
//! Every resource carries exactly one capability tag: it is either a
//! veterinarian or a technician. An appointment always needs one of each.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named staff member that can be assigned to slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource name (e.g., "sri", "brooke").
    pub name: String,
    /// Capability tag.
    pub role: ResourceRole,
}

/// Capability tag of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceRole {
    /// Veterinarian.
    Vet,
    /// Veterinary technician.
    Tech,
}

impl Resource {
    /// Creates a new resource.
    pub fn new(name: impl Into<String>, role: ResourceRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Creates a veterinarian.
    pub fn vet(name: impl Into<String>) -> Self {
        Self::new(name, ResourceRole::Vet)
    }

    /// Creates a technician.
    pub fn tech(name: impl Into<String>) -> Self {
        Self::new(name, ResourceRole::Tech)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for ResourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRole::Vet => f.write_str("vet"),
            ResourceRole::Tech => f.write_str("tech"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_constructors() {
        let v = Resource::vet("sri");
        assert_eq!(v.name, "sri");
        assert_eq!(v.role, ResourceRole::Vet);

        let t = Resource::tech("brooke");
        assert_eq!(t.role, ResourceRole::Tech);
        assert_eq!(t.name, "brooke");
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::vet("krishan").to_string(), "krishan");
        assert_eq!(ResourceRole::Tech.to_string(), "tech");
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&ResourceRole::Vet).unwrap();
        assert_eq!(json, "\"vet\"");
        let back: ResourceRole = serde_json::from_str("\"tech\"").unwrap();
        assert_eq!(back, ResourceRole::Tech);
    }
}
