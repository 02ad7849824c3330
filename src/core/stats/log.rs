//! Rolling window of host stats samples feeding the stats screen.

use crate::core::stats::sample::{StatsReading, StatsSample};
use std::collections::VecDeque;
use std::time::Duration;

pub const DEFAULT_STATS_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub struct StatsLog {
    window: Duration,
    samples: VecDeque<StatsSample>,
}

impl StatsLog {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            samples: VecDeque::new(),
        }
    }

    /// Appends a reading and drops everything that fell out of the window.
    pub fn push(&mut self, now: Duration, reading: StatsReading) {
        self.samples.push_back(StatsSample {
            taken_at: now,
            reading,
        });
        self.prune(now);
    }

    pub fn prune(&mut self, now: Duration) {
        while self
            .samples
            .front()
            .is_some_and(|sample| now.saturating_sub(sample.taken_at) >= self.window)
        {
            self.samples.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&StatsSample> {
        self.samples.back()
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Sample times in seconds relative to the newest sample (all `<= 0`).
    #[must_use]
    pub fn time_offsets(&self) -> Vec<f64> {
        let Some(newest) = self.latest().map(|sample| sample.taken_at) else {
            return Vec::new();
        };

        self.samples
            .iter()
            .map(|sample| -(newest.saturating_sub(sample.taken_at).as_secs_f64()))
            .collect()
    }

    #[must_use]
    pub fn mem_series(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|sample| sample.reading.mem_percent)
            .collect()
    }

    /// Missing temperature readings are skipped by the plot, so keep them as `None`.
    #[must_use]
    pub fn temp_series(&self) -> Vec<Option<f32>> {
        self.samples
            .iter()
            .map(|sample| sample.reading.cpu_temp_celsius)
            .collect()
    }

    /// CPU load transposed to one series per core.
    ///
    /// Cores missing from a sample (hotplug) read as zero load.
    #[must_use]
    pub fn cpu_series_by_core(&self) -> Vec<Vec<f32>> {
        let cores = self
            .samples
            .iter()
            .map(|sample| sample.reading.cpu_percent.len())
            .max()
            .unwrap_or(0);

        (0..cores)
            .map(|core| {
                self.samples
                    .iter()
                    .map(|sample| sample.reading.cpu_percent.get(core).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect()
    }
}

impl Default for StatsLog {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::StatsLog;
    use crate::core::stats::sample::StatsReading;
    use std::time::Duration;

    fn reading(cpu: &[f32], mem: f32, temp: Option<f32>) -> StatsReading {
        StatsReading {
            cpu_percent: cpu.to_vec(),
            mem_percent: mem,
            cpu_temp_celsius: temp,
        }
    }

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn keeps_samples_inside_window() {
        let mut log = StatsLog::new(secs(60));

        log.push(secs(0), reading(&[1.0], 10.0, None));
        log.push(secs(30), reading(&[2.0], 20.0, None));
        log.push(secs(59), reading(&[3.0], 30.0, None));

        assert_eq!(log.len(), 3);
    }

    #[test]
    fn drops_samples_older_than_window() {
        let mut log = StatsLog::new(secs(60));

        log.push(secs(0), reading(&[1.0], 10.0, None));
        log.push(secs(30), reading(&[2.0], 20.0, None));
        log.push(secs(60), reading(&[3.0], 30.0, None));

        assert_eq!(log.len(), 2);
        assert_eq!(log.mem_series(), vec![20.0, 30.0]);
    }

    #[test]
    fn time_offsets_are_relative_to_newest() {
        let mut log = StatsLog::new(secs(60));

        log.push(secs(10), reading(&[], 0.0, None));
        log.push(secs(15), reading(&[], 0.0, None));
        log.push(secs(20), reading(&[], 0.0, None));

        assert_eq!(log.time_offsets(), vec![-10.0, -5.0, 0.0]);
    }

    #[test]
    fn empty_log_has_no_offsets() {
        let log = StatsLog::default();

        assert!(log.is_empty());
        assert!(log.time_offsets().is_empty());
        assert!(log.cpu_series_by_core().is_empty());
    }

    #[test]
    fn cpu_series_are_transposed_per_core() {
        let mut log = StatsLog::new(secs(60));

        log.push(secs(0), reading(&[10.0, 20.0], 0.0, None));
        log.push(secs(1), reading(&[11.0, 21.0, 31.0], 0.0, None));

        assert_eq!(
            log.cpu_series_by_core(),
            vec![vec![10.0, 11.0], vec![20.0, 21.0], vec![0.0, 31.0]]
        );
    }

    #[test]
    fn temp_series_keeps_missing_readings() {
        let mut log = StatsLog::new(secs(60));

        log.push(secs(0), reading(&[], 0.0, Some(45.5)));
        log.push(secs(1), reading(&[], 0.0, None));

        assert_eq!(log.temp_series(), vec![Some(45.5), None]);
        assert_eq!(log.latest().map(|sample| sample.taken_at), Some(secs(1)));
    }
}
