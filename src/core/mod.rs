pub mod filter;
pub mod rules;

pub use crate::domain::model::{Flight, Segment};
pub use crate::domain::ports::FlightRule;
pub use crate::utils::error::Result;
