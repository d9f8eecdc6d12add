pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{
    filter::{filter_flights, FlightFilter},
    rules::{Rule, RuleSet, MAX_GROUND_HOURS},
};
pub use crate::domain::{
    model::{Flight, Segment},
    ports::FlightRule,
};
pub use crate::utils::error::{FlightError, Result};
