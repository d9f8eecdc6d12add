// Demonstration callers of the core filter API.

pub mod demo;
pub mod sample_data;
