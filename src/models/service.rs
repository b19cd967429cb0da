//! Service model.
//!
//! A service is the kind of appointment being booked. The clinic ships
//! with consultations and surgeries; other services can be named in the
//! configuration, in which case they need their own base price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appointment service type.
///
/// Serialized as its lowercase name, so it can key TOML and JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Service {
    /// General consultation (base price 50).
    Consultation,
    /// Surgery (base price 200).
    Surgery,
    /// Any other service named in configuration.
    Custom(String),
}

impl Service {
    /// Lowercase service name as printed in reports.
    pub fn as_str(&self) -> &str {
        match self {
            Service::Consultation => "consultation",
            Service::Surgery => "surgery",
            Service::Custom(name) => name,
        }
    }

    /// Base price of the built-in services.
    ///
    /// Returns `None` for custom services; their price must come from
    /// configuration.
    pub fn default_base_price(&self) -> Option<f64> {
        match self {
            Service::Consultation => Some(50.0),
            Service::Surgery => Some(200.0),
            Service::Custom(_) => None,
        }
    }
}

impl From<String> for Service {
    fn from(name: String) -> Self {
        match name.as_str() {
            "consultation" => Service::Consultation,
            "surgery" => Service::Surgery,
            _ => Service::Custom(name),
        }
    }
}

impl From<&str> for Service {
    fn from(name: &str) -> Self {
        Service::from(name.to_string())
    }
}

impl From<Service> for String {
    fn from(service: Service) -> Self {
        match service {
            Service::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for Service {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Service::from(s))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(Service::Consultation.as_str(), "consultation");
        assert_eq!(Service::Surgery.to_string(), "surgery");
        assert_eq!(Service::Custom("dental".into()).as_str(), "dental");
    }

    #[test]
    fn test_service_from_name() {
        assert_eq!(Service::from("consultation"), Service::Consultation);
        assert_eq!(Service::from("surgery"), Service::Surgery);
        assert_eq!(Service::from("dental"), Service::Custom("dental".into()));
        assert_eq!("surgery".parse::<Service>().unwrap(), Service::Surgery);
    }

    #[test]
    fn test_default_base_prices() {
        assert_eq!(Service::Consultation.default_base_price(), Some(50.0));
        assert_eq!(Service::Surgery.default_base_price(), Some(200.0));
        assert_eq!(Service::Custom("dental".into()).default_base_price(), None);
    }

    #[test]
    fn test_service_serde_as_string() {
        let json = serde_json::to_string(&Service::Surgery).unwrap();
        assert_eq!(json, "\"surgery\"");
        let custom: Service = serde_json::from_str("\"grooming\"").unwrap();
        assert_eq!(custom, Service::Custom("grooming".into()));
    }
}
