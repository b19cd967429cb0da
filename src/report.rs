//! Scheduling and pricing report.
//!
//! Renders the two line kinds the clinic prints after a run:
//!
//! ```text
//! Scheduled appointment at 9 with sri and brooke for consultation.
//! Price for appointment at 9 with sri for consultation: $60.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::{Appointment, Schedule};
use crate::pricing::{PriceQuote, PricingEngine};

/// One priced appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    /// The appointment being priced.
    pub appointment: Appointment,
    /// Its price breakdown.
    pub quote: PriceQuote,
}

/// Scheduling log lines followed by priced lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Appointments in booking order.
    pub scheduled: Vec<Appointment>,
    /// One priced line per appointment in the schedule store.
    pub priced: Vec<PricedLine>,
}

/// Display wrapper for a scheduling log line.
pub struct ScheduledLine<'a>(pub &'a Appointment);

impl PricedLine {
    /// Final price.
    pub fn price(&self) -> f64 {
        self.quote.price
    }
}

impl Report {
    /// Prices every appointment currently in the schedule store.
    ///
    /// # Errors
    /// Propagates pricing errors (unknown service or slot).
    pub fn build(
        scheduled: Vec<Appointment>,
        schedule: &Schedule,
        pricing: &PricingEngine,
    ) -> Result<Self> {
        let priced = schedule
            .appointments()
            .into_iter()
            .map(|appointment| {
                let quote = pricing.quote(&appointment.service, appointment.slot)?;
                Ok(PricedLine { appointment, quote })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { scheduled, priced })
    }

    /// Sum of all priced lines.
    pub fn total_revenue(&self) -> f64 {
        self.priced.iter().map(PricedLine::price).sum()
    }

    /// Text lines: scheduling events first, then priced lines.
    pub fn lines(&self) -> Vec<String> {
        self.scheduled
            .iter()
            .map(|a| ScheduledLine(a).to_string())
            .chain(self.priced.iter().map(ToString::to_string))
            .collect()
    }

    /// Text rendering, one line per event, newline-terminated.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ScheduledLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scheduled appointment at {} with {} and {} for {}.",
            self.0.slot, self.0.vet, self.0.tech, self.0.service
        )
    }
}

impl fmt::Display for PricedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Price for appointment at {} with {} for {}: ${:.2}",
            self.appointment.slot,
            self.appointment.vet,
            self.appointment.service,
            self.quote.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Resource, Service};

    fn single_booking() -> (Vec<Appointment>, Schedule) {
        let mut schedule = Schedule::new();
        schedule.book(
            &Resource::vet("sri"),
            &Resource::tech("brooke"),
            9,
            Service::Consultation,
        );
        (schedule.appointments(), schedule)
    }

    #[test]
    fn test_report_lines() {
        let (scheduled, schedule) = single_booking();
        let report = Report::build(scheduled, &schedule, &PricingEngine::standard()).unwrap();

        assert_eq!(
            report.lines(),
            vec![
                "Scheduled appointment at 9 with sri and brooke for consultation.".to_string(),
                "Price for appointment at 9 with sri for consultation: $60.00".to_string(),
            ]
        );
        assert_eq!(report.total_revenue(), 60.0);
    }

    #[test]
    fn test_render_text_newlines() {
        let (scheduled, schedule) = single_booking();
        let report = Report::build(scheduled, &schedule, &PricingEngine::standard()).unwrap();
        let text = report.render_text();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::build(Vec::new(), &Schedule::new(), &PricingEngine::standard())
            .unwrap();
        assert!(report.lines().is_empty());
        assert_eq!(report.render_text(), "");
        assert_eq!(report.total_revenue(), 0.0);
    }

    #[test]
    fn test_json_report() {
        let (scheduled, schedule) = single_booking();
        let report = Report::build(scheduled, &schedule, &PricingEngine::standard()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["scheduled"][0]["vet"], "sri");
        assert_eq!(json["priced"][0]["quote"]["tier"], "moderate");
        assert_eq!(json["priced"][0]["quote"]["price"], 60.0);
    }

    #[test]
    fn test_build_propagates_pricing_error() {
        let mut schedule = Schedule::new();
        schedule.book(
            &Resource::vet("sri"),
            &Resource::tech("brooke"),
            9,
            Service::Custom("dental".into()),
        );
        let result = Report::build(Vec::new(), &schedule, &PricingEngine::standard());
        assert!(result.is_err());
    }
}
