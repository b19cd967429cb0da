//! Clinic configuration.
//!
//! Every fact the scheduler works from (roster, prices, slots, demand,
//! passes, selection policy) lives in [`ClinicConfig`]. The default value is
//! the clinic's standard day; a TOML file can override any subset of fields:
//!
//! ```toml
//! vets = ["sri", "saurabh", "krishan"]
//! techs = ["brooke", "dave", "duncan"]
//! slots = [9, 10, 11, 12, 13, 14, 15, 16]
//! policy = "first-pair"
//!
//! [base_prices]
//! consultation = 50
//! surgery = 200
//!
//! [demand]
//! 9 = 5
//! 10 = 10
//! ```

pub mod cli;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ClinicError, Result};
use crate::models::{DemandTable, Resource, Service, Slot, DEFAULT_DEMAND, STANDARD_SLOTS};
use crate::pricing::PricingEngine;
use crate::scheduler::{SelectionPolicy, ServicePass};
use crate::validation::validate_config;

pub use cli::{CliConfig, OutputFormat};

/// Clinic facts for one scheduling run.
///
/// Fields absent from a TOML document keep their [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Vet names, in selection order.
    pub vets: Vec<String>,
    /// Tech names, in selection order.
    pub techs: Vec<String>,
    /// Base price per service.
    pub base_prices: BTreeMap<Service, f64>,
    /// Bookable slots. Sorted before the passes run.
    pub slots: Vec<Slot>,
    /// Explicit demand counts, keyed by slot.
    #[serde(with = "slot_keys")]
    pub demand: BTreeMap<Slot, u32>,
    /// Demand for configured slots without an explicit entry.
    pub default_demand: u32,
    /// Service passes, run in order.
    pub passes: Vec<ServicePass>,
    /// How vet/tech pairs are chosen per slot.
    pub policy: SelectionPolicy,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            vets: vec!["sri".into(), "saurabh".into(), "krishan".into()],
            techs: vec!["brooke".into(), "dave".into(), "duncan".into()],
            base_prices: BTreeMap::from([(Service::Consultation, 50.0), (Service::Surgery, 200.0)]),
            slots: STANDARD_SLOTS.to_vec(),
            demand: DemandTable::standard().counts,
            default_demand: DEFAULT_DEMAND,
            passes: ServicePass::standard(),
            policy: SelectionPolicy::FirstPair,
        }
    }
}

impl ClinicConfig {
    /// Reads, parses, and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded clinic config");
        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Runs every config check and reports all failures at once.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(ClinicError::Validation)
    }

    /// Replaces the selection policy, e.g. from a CLI override.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Vets in declaration order.
    pub fn vet_resources(&self) -> Vec<Resource> {
        self.vets.iter().map(Resource::vet).collect()
    }

    /// Techs in declaration order.
    pub fn tech_resources(&self) -> Vec<Resource> {
        self.techs.iter().map(Resource::tech).collect()
    }

    /// Demand counts with the configured default.
    pub fn demand_table(&self) -> DemandTable {
        DemandTable {
            counts: self.demand.clone(),
            default_count: self.default_demand,
        }
    }

    /// Pricing engine over the configured prices, demand, and slots,
    /// with the standard tiers.
    pub fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(
            self.base_prices.clone(),
            self.demand_table(),
            self.slots.clone(),
        )
    }
}

/// TOML table keys are always strings; slots are parsed from them.
mod slot_keys {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    use crate::models::Slot;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<Slot, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(map.iter().map(|(slot, count)| (slot.to_string(), count)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Slot, u32>, D::Error> {
        BTreeMap::<String, u32>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, count)| {
                key.trim()
                    .parse::<Slot>()
                    .map(|slot| (slot, count))
                    .map_err(|_| D::Error::custom(format!("invalid slot key '{key}'")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_standard_facts() {
        let c = ClinicConfig::default();
        assert_eq!(c.vets, vec!["sri", "saurabh", "krishan"]);
        assert_eq!(c.techs, vec!["brooke", "dave", "duncan"]);
        assert_eq!(c.base_prices[&Service::Consultation], 50.0);
        assert_eq!(c.base_prices[&Service::Surgery], 200.0);
        assert_eq!(c.slots, STANDARD_SLOTS.to_vec());
        assert_eq!(c.demand_table().count_for(16), 3);
        assert_eq!(c.passes.len(), 2);
        assert_eq!(c.policy, SelectionPolicy::FirstPair);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ClinicConfig::from_toml_str(
            r#"
policy = "exhaustive"
vets = ["ana", "ben"]
"#,
        )
        .unwrap();
        assert_eq!(config.vets, vec!["ana", "ben"]);
        assert_eq!(config.techs, ClinicConfig::default().techs);
        assert_eq!(config.policy, SelectionPolicy::Exhaustive);
    }

    #[test]
    fn test_parse_full_toml() {
        let config = ClinicConfig::from_toml_str(
            r#"
vets = ["sri"]
techs = ["brooke"]
slots = [9, 10]
default_demand = 4

[base_prices]
consultation = 55
surgery = 210.5
dental = 120

[demand]
9 = 11
10 = 2

[[passes]]
service = "dental"
until = 30
"#,
        )
        .unwrap();
        assert_eq!(config.base_prices[&Service::Custom("dental".into())], 120.0);
        assert_eq!(config.base_prices[&Service::Surgery], 210.5);
        assert_eq!(config.demand[&9], 11);
        assert_eq!(config.default_demand, 4);
        assert_eq!(config.passes, vec![ServicePass::new("dental".into(), None, 30)]);

        let engine = config.pricing_engine();
        assert_eq!(engine.price(&Service::Consultation, 9).unwrap(), 82.5);
    }

    #[test]
    fn test_invalid_slot_key() {
        let err = ClinicConfig::from_toml_str(
            r#"
[demand]
nine = 5
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClinicError::Toml(_)));
    }

    #[test]
    fn test_toml_rejected_by_validation() {
        let err = ClinicConfig::from_toml_str(
            r#"
vets = ["sri"]
techs = ["sri"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClinicError::Validation(_)));
    }

    #[test]
    fn test_demand_keys_serialize_as_strings() {
        let json = serde_json::to_value(ClinicConfig::default()).unwrap();
        assert_eq!(json["demand"]["9"], 5);
        assert_eq!(json["policy"], "first-pair");
    }

    #[test]
    fn test_missing_file() {
        let err = ClinicConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ClinicError::Io(_)));
    }
}
