use crate::app::sample_data::{shift, FlightBuilder};
use crate::core::filter::filter_flights;
use crate::core::rules::RuleSet;
use crate::domain::model::Flight;
use crate::domain::ports::FlightRule;
use crate::utils::error::{FlightError, Result};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// One-based rule numbers, each applied on its own.
    pub rule_numbers: Vec<usize>,
    pub days_ahead: i64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            rule_numbers: vec![1, 2, 3],
            days_ahead: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub rule_number: usize,
    pub description: String,
    pub retained: Vec<Flight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub original: Vec<Flight>,
    pub outcomes: Vec<RuleOutcome>,
}

/// Builds the sample flights relative to `now` and filters them once per
/// selected rule.
pub fn run_demo(options: &DemoOptions, now: NaiveDateTime) -> Result<DemoReport> {
    let offset = Duration::try_days(options.days_ahead).ok_or_else(|| {
        FlightError::invalid_argument(format!("days_ahead {} is too large", options.days_ahead))
    })?;
    let base = shift(now, offset)?;
    let original = FlightBuilder::create_flights(base)?;
    tracing::info!("✈️ Built {} sample flights", original.len());

    let rules = RuleSet::standard();
    let mut outcomes = Vec::with_capacity(options.rule_numbers.len());

    for &number in &options.rule_numbers {
        let rule = rules.by_number(number)?;
        let retained = filter_flights(Some(original.as_slice()), Some(std::slice::from_ref(rule)))?;
        tracing::info!(
            "🔍 Rule {} ({}): {} of {} flights retained",
            number,
            rule.description(),
            retained.len(),
            original.len()
        );

        outcomes.push(RuleOutcome {
            rule_number: number,
            description: rule.description(),
            retained,
        });
    }

    Ok(DemoReport { original, outcomes })
}

fn render_list(flights: &[Flight]) -> String {
    let items: Vec<String> = flights.iter().map(|f| f.to_string()).collect();
    format!("[{}]", items.join(", "))
}

impl DemoReport {
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("Original flights: {}", render_list(&self.original))];
        for outcome in &self.outcomes {
            lines.push(format!(
                "Flights after applying rule {}: {}",
                outcome.rule_number,
                render_list(&outcome.retained)
            ));
        }
        lines.join("\n")
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
