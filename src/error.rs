//! Error types.

use thiserror::Error;

use crate::models::Slot;
use crate::validation::ValidationError;

/// An input outside the configured clinic domains.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("slot {0} is not a configured slot")]
    UnknownSlot(Slot),

    #[error("service '{0}' is not offered by the clinic")]
    UnknownService(String),

    #[error("'{0}' is not a configured vet")]
    UnknownVet(String),

    #[error("'{0}' is not a configured tech")]
    UnknownTech(String),
}

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("No base price configured for service '{service}'")]
    UnknownService { service: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid clinic configuration: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClinicError {
    /// Whether the error stems from an input outside the clinic's domains
    /// (unknown slot, resource, or unpriced service).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            ClinicError::Domain(_) | ClinicError::UnknownService { .. }
        )
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_domain_error_messages() {
        assert_eq!(
            DomainError::UnknownSlot(42).to_string(),
            "slot 42 is not a configured slot"
        );
        let e: ClinicError = DomainError::UnknownVet("bob".into()).into();
        assert_eq!(e.to_string(), "Domain error: 'bob' is not a configured vet");
        assert!(e.is_domain_error());
    }

    #[test]
    fn test_unknown_service_is_domain() {
        let e = ClinicError::UnknownService {
            service: "dental".into(),
        };
        assert!(e.is_domain_error());
        assert!(e.to_string().contains("dental"));

        let cfg = ClinicError::Config {
            message: "bad".into(),
        };
        assert!(!cfg.is_domain_error());
    }

    #[test]
    fn test_validation_summary() {
        let e = ClinicError::Validation(vec![
            ValidationError::new(ValidationErrorKind::EmptyRoster, "no vets"),
            ValidationError::new(ValidationErrorKind::EmptyRoster, "no techs"),
        ]);
        assert_eq!(
            e.to_string(),
            "Invalid clinic configuration: no vets; no techs"
        );
    }
}
