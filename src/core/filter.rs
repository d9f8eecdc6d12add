//! Exclusion filter over a list of flights.
//!
//! A flight is dropped as soon as ANY rule matches it; everything else is
//! kept in the original order.

use crate::domain::model::Flight;
use crate::domain::ports::FlightRule;
use crate::utils::error::{FlightError, Result};

/// Applies an ordered list of rules to flights.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Local};
/// use flight_filter::{Flight, FlightFilter, Rule};
///
/// let now = Local::now().naive_local();
/// let past = Flight::from_timestamps(&[now - Duration::hours(3), now - Duration::hours(1)]).unwrap();
/// let future = Flight::from_timestamps(&[now + Duration::hours(1), now + Duration::hours(3)]).unwrap();
///
/// let filter = FlightFilter::new().with_rule(Rule::DepartureInPast);
/// let kept = filter.apply(&[past, future.clone()]);
/// assert_eq!(kept, vec![future]);
/// ```
#[derive(Debug, Clone)]
pub struct FlightFilter<R: FlightRule> {
    rules: Vec<R>,
}

impl<R: FlightRule> Default for FlightFilter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FlightRule> FlightFilter<R> {
    /// An empty filter keeps every flight.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn from_rules(rules: impl IntoIterator<Item = R>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn with_rule(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn add_rule(&mut self, rule: R) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule_descriptions(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Index of the first rule that excludes `flight`, if any.
    ///
    /// Rules after the first match are never evaluated.
    pub fn excluded_by(&self, flight: &Flight) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(flight))
    }

    pub fn is_excluded(&self, flight: &Flight) -> bool {
        self.excluded_by(flight).is_some()
    }

    /// Returns the flights matched by none of the rules, in input order.
    pub fn apply(&self, flights: &[Flight]) -> Vec<Flight> {
        let mut kept = Vec::with_capacity(flights.len());

        for flight in flights {
            match self.excluded_by(flight) {
                Some(index) => {
                    tracing::trace!(
                        "Excluding {} by rule #{} ({})",
                        flight,
                        index + 1,
                        self.rules[index].description()
                    );
                }
                None => kept.push(flight.clone()),
            }
        }

        tracing::debug!(
            "Filtered {} flights with {} rules: kept {}, excluded {}",
            flights.len(),
            self.rules.len(),
            kept.len(),
            flights.len() - kept.len()
        );
        kept
    }
}

/// Filters `flights` against `rules`, keeping flights matched by none of them.
///
/// Both arguments must be present; `None` fails with
/// [`FlightError::MissingArgument`]. An empty flight list yields an empty
/// result and an empty rule list passes every flight through.
pub fn filter_flights<R: FlightRule>(
    flights: Option<&[Flight]>,
    rules: Option<&[R]>,
) -> Result<Vec<Flight>> {
    let flights = flights.ok_or_else(|| FlightError::missing_argument("flights"))?;
    let rules = rules.ok_or_else(|| FlightError::missing_argument("rules"))?;

    Ok(FlightFilter::from_rules(rules).apply(flights))
}
