use crate::domain::model::Flight;
use crate::domain::ports::FlightRule;
use crate::utils::error::{FlightError, Result};
use chrono::{Local, NaiveDateTime};

/// 允許的最大地面停留時數（總和）
pub const MAX_GROUND_HOURS: i64 = 2;

/// The fixed set of exclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any segment departs strictly before "now".
    DepartureInPast,
    /// Any segment arrives strictly before it departs.
    ArrivalBeforeDeparture,
    /// Total ground time, truncated to whole hours, exceeds `max_hours`.
    ExcessiveGroundTime { max_hours: i64 },
}

impl Rule {
    /// Evaluates the rule against an explicit "now" instead of the wall clock.
    pub fn matches_at(&self, flight: &Flight, now: NaiveDateTime) -> bool {
        match self {
            Rule::DepartureInPast => flight
                .segments()
                .iter()
                .any(|segment| segment.departure_time() < now),
            Rule::ArrivalBeforeDeparture => flight
                .segments()
                .iter()
                .any(|segment| segment.arrival_time() < segment.departure_time()),
            // num_hours 向零截斷：2h59m 仍算 2 小時
            Rule::ExcessiveGroundTime { max_hours } => {
                flight.ground_time().num_hours() > *max_hours
            }
        }
    }
}

impl FlightRule for Rule {
    fn matches(&self, flight: &Flight) -> bool {
        self.matches_at(flight, Local::now().naive_local())
    }

    fn description(&self) -> String {
        match self {
            Rule::DepartureInPast => "departure in the past".to_string(),
            Rule::ArrivalBeforeDeparture => "arrival before departure".to_string(),
            Rule::ExcessiveGroundTime { max_hours } => {
                format!("ground time over {} hours", max_hours)
            }
        }
    }
}

/// Ordered list of rules with positional access.
///
/// The order of [`RuleSet::standard`] is stable: rule 1 is past departure,
/// rule 2 is inverted segment timing, rule 3 is excessive ground time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::DepartureInPast,
                Rule::ArrivalBeforeDeparture,
                Rule::ExcessiveGroundTime {
                    max_hours: MAX_GROUND_HOURS,
                },
            ],
        }
    }

    /// Zero-based access.
    pub fn get(&self, index: usize) -> Result<&Rule> {
        self.rules.get(index).ok_or(FlightError::RuleIndexOutOfRange {
            index,
            len: self.rules.len(),
        })
    }

    /// One-based access, matching the "rule 1/2/3" numbering.
    pub fn by_number(&self, number: usize) -> Result<&Rule> {
        match number.checked_sub(1) {
            Some(index) => self.get(index),
            None => Err(FlightError::RuleIndexOutOfRange {
                index: number,
                len: self.rules.len(),
            }),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
