//! Host stats from procfs and the thermal zone.
//!
//! CPU load is the busy share of jiffies between two consecutive samples, so
//! the first sample reports the average since boot.

use crate::core::stats::{StatsError, StatsReading, StatsSource};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuTimes {
    pub busy: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct ProcfsStats {
    stat_path: PathBuf,
    meminfo_path: PathBuf,
    thermal_path: PathBuf,
    previous: Vec<CpuTimes>,
}

impl ProcfsStats {
    #[must_use]
    pub fn new(
        stat_path: impl Into<PathBuf>,
        meminfo_path: impl Into<PathBuf>,
        thermal_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            stat_path: stat_path.into(),
            meminfo_path: meminfo_path.into(),
            thermal_path: thermal_path.into(),
            previous: Vec::new(),
        }
    }
}

fn read(path: &Path) -> Result<String, StatsError> {
    std::fs::read_to_string(path).map_err(|source| StatsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Per-core counters from the `cpuN` lines of `/proc/stat`.
pub fn parse_cpu_times(text: &str) -> Result<Vec<CpuTimes>, String> {
    let mut cores = Vec::new();

    for line in text.lines() {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        // "cpu" alone is the aggregate line
        if !label.starts_with("cpu") || label == "cpu" {
            continue;
        }

        let values = fields
            .map(|field| field.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("{}: {}", label, err))?;
        if values.len() < 4 {
            return Err(format!("{}: expected at least 4 counters, got {}", label, values.len()));
        }

        // user nice system idle iowait irq softirq steal; guest time is already in user
        let total: u64 = values.iter().take(8).sum();
        let idle = values[3] + values.get(4).copied().unwrap_or(0);
        cores.push(CpuTimes {
            busy: total.saturating_sub(idle),
            total,
        });
    }

    if cores.is_empty() {
        return Err("no per-core cpu lines".to_string());
    }

    Ok(cores)
}

/// Busy percentage per core between two counter snapshots.
///
/// Cores without a previous snapshot are measured from zero.
#[must_use]
pub fn cpu_percent(previous: &[CpuTimes], current: &[CpuTimes]) -> Vec<f32> {
    current
        .iter()
        .enumerate()
        .map(|(core, now)| {
            let before = previous.get(core).copied().unwrap_or_default();
            let total = now.total.saturating_sub(before.total);
            if total == 0 {
                return 0.0;
            }
            let busy = now.busy.saturating_sub(before.busy);
            (busy as f64 / total as f64 * 100.0) as f32
        })
        .collect()
}

/// Used memory as a percentage, from `MemTotal` and `MemAvailable`.
pub fn parse_mem_percent(text: &str) -> Result<f32, String> {
    let field = |name: &str| -> Result<u64, String> {
        text.lines()
            .find_map(|line| line.strip_prefix(name))
            .and_then(|rest| rest.trim_start_matches(':').split_whitespace().next())
            .ok_or_else(|| format!("missing {}", name))?
            .parse::<u64>()
            .map_err(|err| format!("{}: {}", name, err))
    };

    let total = field("MemTotal")?;
    let available = field("MemAvailable")?;
    if total == 0 {
        return Err("MemTotal is zero".to_string());
    }

    Ok((total.saturating_sub(available) as f64 / total as f64 * 100.0) as f32)
}

/// Thermal zone files report millidegrees Celsius.
#[must_use]
pub fn parse_millidegrees(text: &str) -> Option<f32> {
    text.trim()
        .parse::<i64>()
        .ok()
        .map(|milli| milli as f32 / 1000.0)
}

impl StatsSource for ProcfsStats {
    fn sample(&mut self) -> Result<StatsReading, StatsError> {
        let stat = read(&self.stat_path)?;
        let times = parse_cpu_times(&stat).map_err(|detail| StatsError::Parse {
            path: self.stat_path.clone(),
            detail,
        })?;

        let meminfo = read(&self.meminfo_path)?;
        let mem_percent = parse_mem_percent(&meminfo).map_err(|detail| StatsError::Parse {
            path: self.meminfo_path.clone(),
            detail,
        })?;

        // boards without a thermal zone still get cpu and memory plots
        let cpu_temp_celsius = match std::fs::read_to_string(&self.thermal_path) {
            Ok(text) => parse_millidegrees(&text),
            Err(err) => {
                debug!(path = %self.thermal_path.display(), error = %err, "no cpu temperature");
                None
            }
        };

        let cpu_percent = cpu_percent(&self.previous, &times);
        self.previous = times;

        Ok(StatsReading {
            cpu_percent,
            mem_percent,
            cpu_temp_celsius,
        })
    }
}
