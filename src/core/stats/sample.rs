use std::time::Duration;

/// One reading of the host's health counters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsReading {
    pub cpu_percent: Vec<f32>,
    pub mem_percent: f32,
    pub cpu_temp_celsius: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSample {
    pub taken_at: Duration,
    pub reading: StatsReading,
}
