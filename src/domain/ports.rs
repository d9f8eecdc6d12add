use crate::domain::model::Flight;

/// A validity check over a single flight.
///
/// `matches` returning `true` means the flight violates the rule and
/// should be excluded.
pub trait FlightRule {
    fn matches(&self, flight: &Flight) -> bool;

    /// Human readable description, used in logs.
    fn description(&self) -> String;
}

impl<T: FlightRule + ?Sized> FlightRule for &T {
    fn matches(&self, flight: &Flight) -> bool {
        (**self).matches(flight)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<T: FlightRule + ?Sized> FlightRule for Box<T> {
    fn matches(&self, flight: &Flight) -> bool {
        (**self).matches(flight)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
