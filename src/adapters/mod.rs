//! Adapters for the host: clock and system counters.

pub mod clock;
pub mod stats;
