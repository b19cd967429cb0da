//! Run summary metrics (KPIs).
//!
//! Computes booking and revenue indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Appointments | Booked vet/tech pairs |
//! | Total Revenue | Sum of priced lines |
//! | Revenue by Service | Revenue grouped per service |
//! | Utilization | Booked slots / configured slots, per resource |
//! | Skipped | Slot attempts that booked nothing |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClinicScheduler, RunOutcome};
use crate::models::Service;

/// Run performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of booked appointments.
    pub appointments: usize,
    /// Sum of all appointment prices.
    pub total_revenue: f64,
    /// Revenue per service.
    pub revenue_by_service: BTreeMap<Service, f64>,
    /// Per-resource utilization (0.0..1.0).
    pub utilization_by_resource: BTreeMap<String, f64>,
    /// Average utilization across all resources.
    pub avg_utilization: f64,
    /// Slot attempts skipped for lack of a free pair.
    pub skipped: usize,
}

impl ScheduleKpi {
    /// Computes KPIs for the scheduler's latest run.
    ///
    /// # Arguments
    /// * `scheduler` - The scheduler that produced the outcome (resources, slots, store).
    /// * `outcome` - The run outcome.
    pub fn calculate(scheduler: &ClinicScheduler, outcome: &RunOutcome) -> Self {
        let mut revenue_by_service: BTreeMap<Service, f64> = BTreeMap::new();
        for line in &outcome.report.priced {
            *revenue_by_service
                .entry(line.appointment.service.clone())
                .or_insert(0.0) += line.price();
        }

        let slot_count = scheduler.slots().len();
        let schedule = scheduler.schedule();
        let utilization_by_resource: BTreeMap<String, f64> = scheduler
            .resources()
            .map(|r| {
                let booked = schedule.assignments_for_resource(&r.name).len();
                let load = if slot_count == 0 {
                    0.0
                } else {
                    booked as f64 / slot_count as f64
                };
                (r.name.clone(), load)
            })
            .collect();

        let avg_utilization = if utilization_by_resource.is_empty() {
            0.0
        } else {
            utilization_by_resource.values().sum::<f64>() / utilization_by_resource.len() as f64
        };

        Self {
            appointments: schedule.appointment_count(),
            total_revenue: outcome.report.total_revenue(),
            revenue_by_service,
            utilization_by_resource,
            avg_utilization,
            skipped: outcome.skipped,
        }
    }

    /// Human-readable summary lines.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Appointments booked: {}", self.appointments),
            format!("Slot attempts skipped: {}", self.skipped),
            format!("Total revenue: ${:.2}", self.total_revenue),
        ];
        for (service, revenue) in &self.revenue_by_service {
            lines.push(format!("Revenue from {service}: ${revenue:.2}"));
        }
        lines.push(format!(
            "Average utilization: {:.1}%",
            self.avg_utilization * 100.0
        ));
        lines
    }
}
