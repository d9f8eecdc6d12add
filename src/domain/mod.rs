// Domain layer: value types and ports. No I/O, no logging setup.

pub mod model;
pub mod ports;
