//! Single-day veterinary clinic scheduler.
//!
//! Books one vet and one tech per hour slot for consultations and
//! surgeries, then prices each appointment by the demand its slot sees.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Resource`, `Service`, `Slot`, `DemandTable`,
//!   `Assignment`, `Schedule`
//! - **`pricing`**: Demand-tiered `PricingEngine`
//! - **`scheduler`**: First-fit `ClinicScheduler` and run KPIs
//! - **`report`**: Scheduled and priced report lines
//! - **`config`**: `ClinicConfig` (TOML) and CLI arguments
//! - **`validation`**: Configuration integrity checks
//!
//! # Example
//!
//! ```
//! use vet_schedule::ClinicScheduler;
//!
//! let mut scheduler = ClinicScheduler::standard();
//! let outcome = scheduler.run().unwrap();
//! assert_eq!(
//!     outcome.report.lines(),
//!     vec![
//!         "Scheduled appointment at 9 with sri and brooke for consultation.",
//!         "Price for appointment at 9 with sri for consultation: $60.00",
//!     ]
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::{ClinicConfig, CliConfig, OutputFormat};
pub use error::{ClinicError, DomainError, Result};
pub use pricing::PricingEngine;
pub use report::Report;
pub use scheduler::{ClinicScheduler, RunOutcome, ScheduleKpi, SelectionPolicy};
