pub mod log;
pub mod ports;
pub mod sample;

pub use log::{DEFAULT_STATS_WINDOW, StatsLog};
pub use ports::stats_source::{StatsError, StatsSource};
pub use sample::{StatsReading, StatsSample};
