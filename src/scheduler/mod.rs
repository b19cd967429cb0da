//! First-fit clinic scheduling and run KPIs.
//!
//! # Algorithm
//!
//! `ClinicScheduler` runs a fixed pipeline: reset, one pass per service
//! window, then a pricing pass. Each slot attempt is first-fit: a pair is
//! booked only if both members are free, otherwise the slot is skipped.
//! There is no backtracking and no retry.
//!
//! # KPI
//!
//! `ScheduleKpi` summarises a run: appointments, revenue, per-resource
//! utilization, and skipped attempts.

mod clinic;
mod kpi;
mod pass;

pub use clinic::{ClinicScheduler, RunOutcome};
pub use kpi::ScheduleKpi;
pub use pass::{SelectionPolicy, ServicePass};
