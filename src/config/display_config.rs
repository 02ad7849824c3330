//! Settings record passed into the dispatcher at construction.
//!
//! Every field has a named default, so an empty settings file (or none at all)
//! describes a working display.

use crate::config::errors::ConfigError;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::mode::ModeRing;
use crate::core::viewport::limits::{
    DEFAULT_BOUNDS_BOTTOM_RIGHT, DEFAULT_BOUNDS_TOP_LEFT, DEFAULT_RADIUS_MAX, DEFAULT_RADIUS_MIN,
    DEFAULT_RATE_FACTOR,
};
use crate::core::viewport::state::{DEFAULT_CENTER, DEFAULT_PAN_VELOCITY_RATIO, DEFAULT_RADIUS};
use crate::core::viewport::{ViewportLimits, ViewportState};
use chrono::TimeDelta;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_SECS: f64 = 0.1;
pub const DEFAULT_ACTIVE_LOW: bool = false;
pub const DEFAULT_BUTTON_A_LINE: &str = "/sys/class/gpio/gpio23/value";
pub const DEFAULT_BUTTON_B_LINE: &str = "/sys/class/gpio/gpio24/value";

pub const DEFAULT_BUFFER_WIDTH: u32 = 2;
pub const DEFAULT_TICK_DELAY_SECS: f64 = 0.05;

pub const DEFAULT_FRACTAL_INTERVAL_SECS: f64 = 0.25;
pub const DEFAULT_STATS_INTERVAL_SECS: f64 = 1.0;
pub const DEFAULT_MARKET_INTERVAL_SECS: f64 = 15.0;
pub const DEFAULT_FILL_INTERVAL_SECS: f64 = 30.0;
pub const DEFAULT_STANDBY_INTERVAL_SECS: f64 = 30.0;
pub const DEFAULT_MIN_BUSY_SECS: f64 = 0.5;
pub const DEFAULT_STANDBY_MIN_BUSY_SECS: f64 = 0.0;

pub const DEFAULT_MAX_ITERATIONS: u32 = 128;

pub const DEFAULT_STATS_WINDOW_SECS: f64 = 60.0;
pub const DEFAULT_PROC_STAT: &str = "/proc/stat";
pub const DEFAULT_PROC_MEMINFO: &str = "/proc/meminfo";
pub const DEFAULT_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

pub const DEFAULT_MARKET_SYMBOLS: &[&str] = &["SPY", "QQQ"];
pub const DEFAULT_MARKET_FRESHNESS_SECS: i64 = 3600;
pub const DEFAULT_MARKET_SERIES_PATH: &str = "/var/lib/tft_display/market.json";

pub const DEFAULT_FILL_COLOUR: [u8; 3] = [0, 255, 0];

/// Screens that can be placed in the button-cycled mode ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Stats,
    Fractal,
    Market,
    Fill,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub input: InputConfig,
    pub modes: ModesConfig,
    pub intervals: IntervalsConfig,
    pub viewport: ViewportConfig,
    pub stats: StatsConfig,
    pub market: MarketConfig,
    pub fill: FillConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub debounce_secs: f64,
    pub active_low: bool,
    pub button_a: PathBuf,
    pub button_b: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModesConfig {
    /// Mode ring order; button A steps forward through it.
    pub order: Vec<HandlerKind>,
    pub buffer_width: u32,
    pub tick_delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntervalsConfig {
    pub fractal_secs: f64,
    pub stats_secs: f64,
    pub market_secs: f64,
    pub fill_secs: f64,
    pub standby_secs: f64,
    pub min_busy_secs: f64,
    pub standby_min_busy_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// `[left, top, right, bottom]` in the complex plane.
    pub bounds: [f64; 4],
    pub center: [f64; 2],
    pub radius: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub rate_factor: f64,
    pub pan_velocity_ratio: [f64; 2],
    pub max_iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    pub window_secs: f64,
    pub proc_stat: PathBuf,
    pub proc_meminfo: PathBuf,
    pub thermal_zone: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    pub symbols: Vec<String>,
    pub freshness_secs: i64,
    pub series_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillConfig {
    pub colour: [u8; 3],
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_secs: DEFAULT_DEBOUNCE_SECS,
            active_low: DEFAULT_ACTIVE_LOW,
            button_a: PathBuf::from(DEFAULT_BUTTON_A_LINE),
            button_b: PathBuf::from(DEFAULT_BUTTON_B_LINE),
        }
    }
}

impl Default for ModesConfig {
    fn default() -> Self {
        Self {
            order: vec![
                HandlerKind::Stats,
                HandlerKind::Fractal,
                HandlerKind::Market,
                HandlerKind::Fill,
            ],
            buffer_width: DEFAULT_BUFFER_WIDTH,
            tick_delay_secs: DEFAULT_TICK_DELAY_SECS,
        }
    }
}

impl Default for IntervalsConfig {
    fn default() -> Self {
        Self {
            fractal_secs: DEFAULT_FRACTAL_INTERVAL_SECS,
            stats_secs: DEFAULT_STATS_INTERVAL_SECS,
            market_secs: DEFAULT_MARKET_INTERVAL_SECS,
            fill_secs: DEFAULT_FILL_INTERVAL_SECS,
            standby_secs: DEFAULT_STANDBY_INTERVAL_SECS,
            min_busy_secs: DEFAULT_MIN_BUSY_SECS,
            standby_min_busy_secs: DEFAULT_STANDBY_MIN_BUSY_SECS,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            bounds: [
                DEFAULT_BOUNDS_TOP_LEFT.real,
                DEFAULT_BOUNDS_TOP_LEFT.imag,
                DEFAULT_BOUNDS_BOTTOM_RIGHT.real,
                DEFAULT_BOUNDS_BOTTOM_RIGHT.imag,
            ],
            center: [DEFAULT_CENTER.real, DEFAULT_CENTER.imag],
            radius: DEFAULT_RADIUS,
            radius_min: DEFAULT_RADIUS_MIN,
            radius_max: DEFAULT_RADIUS_MAX,
            rate_factor: DEFAULT_RATE_FACTOR,
            pan_velocity_ratio: [
                DEFAULT_PAN_VELOCITY_RATIO.real,
                DEFAULT_PAN_VELOCITY_RATIO.imag,
            ],
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_STATS_WINDOW_SECS,
            proc_stat: PathBuf::from(DEFAULT_PROC_STAT),
            proc_meminfo: PathBuf::from(DEFAULT_PROC_MEMINFO),
            thermal_zone: PathBuf::from(DEFAULT_THERMAL_ZONE),
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_MARKET_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            freshness_secs: DEFAULT_MARKET_FRESHNESS_SECS,
            series_path: PathBuf::from(DEFAULT_MARKET_SERIES_PATH),
        }
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            colour: DEFAULT_FILL_COLOUR,
        }
    }
}

/// Converts a settings value in seconds, rejecting negative and non-finite values.
pub fn secs(field: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|err| ConfigError::Invalid {
        field,
        reason: format!("{} is not a valid duration in seconds: {}", value, err),
    })
}

impl IntervalsConfig {
    /// Redraw interval for a screen, with the name of the setting it came from.
    #[must_use]
    pub fn for_kind(&self, kind: HandlerKind) -> (&'static str, f64) {
        match kind {
            HandlerKind::Stats => ("intervals.stats_secs", self.stats_secs),
            HandlerKind::Fractal => ("intervals.fractal_secs", self.fractal_secs),
            HandlerKind::Market => ("intervals.market_secs", self.market_secs),
            HandlerKind::Fill => ("intervals.fill_secs", self.fill_secs),
        }
    }

    pub fn interval(&self, kind: HandlerKind) -> Result<Duration, ConfigError> {
        let (field, value) = self.for_kind(kind);
        secs(field, value)
    }

    pub fn min_busy(&self) -> Result<Duration, ConfigError> {
        secs("intervals.min_busy_secs", self.min_busy_secs)
    }

    pub fn standby(&self) -> Result<Duration, ConfigError> {
        secs("intervals.standby_secs", self.standby_secs)
    }

    pub fn standby_min_busy(&self) -> Result<Duration, ConfigError> {
        secs("intervals.standby_min_busy_secs", self.standby_min_busy_secs)
    }
}

impl ViewportConfig {
    pub fn limits(&self) -> Result<ViewportLimits, ConfigError> {
        let [left, top, right, bottom] = self.bounds;
        let bounds = ComplexRect::new(Complex::new(left, top), Complex::new(right, bottom))?;

        Ok(ViewportLimits::new(
            bounds,
            self.radius_min,
            self.radius_max,
            self.rate_factor,
        )?)
    }

    /// Starting viewport, shrinking first.
    #[must_use]
    pub fn initial_state(&self, limits: &ViewportLimits) -> ViewportState {
        ViewportState {
            center: Complex::new(self.center[0], self.center[1]),
            radius: self.radius,
            radius_growth_rate: limits.shrink_rate(),
            pan_velocity_ratio: Complex::new(
                self.pan_velocity_ratio[0],
                self.pan_velocity_ratio[1],
            ),
        }
    }
}

impl MarketConfig {
    pub fn freshness(&self) -> Result<TimeDelta, ConfigError> {
        TimeDelta::try_seconds(self.freshness_secs)
            .filter(|freshness| *freshness >= TimeDelta::zero())
            .ok_or_else(|| ConfigError::Invalid {
                field: "market.freshness_secs",
                reason: format!(
                    "must be a non-negative number of seconds: {}",
                    self.freshness_secs
                ),
            })
    }
}

impl FillConfig {
    #[must_use]
    pub fn colour(&self) -> Colour {
        Colour::from(self.colour)
    }
}

impl DisplayConfig {
    /// Checks everything the loop relies on, so configuration problems stop
    /// the program before the first tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        secs("input.debounce_secs", self.input.debounce_secs)?;
        secs("modes.tick_delay_secs", self.modes.tick_delay_secs)?;
        ModeRing::new(self.modes.order.len(), self.modes.buffer_width)?;

        for kind in &self.modes.order {
            self.intervals.interval(*kind)?;
        }
        self.intervals.standby()?;
        self.intervals.min_busy()?;
        self.intervals.standby_min_busy()?;

        let limits = self.viewport.limits()?;
        let span = limits.bounds.width().min(limits.bounds.height());
        if 2.0 * limits.radius_max >= span {
            // a wider extent crosses opposite edges at once and the pan
            // reverses every tick
            return Err(ConfigError::Invalid {
                field: "viewport.radius_max",
                reason: format!(
                    "2 * {} must be smaller than the narrowest bounds side {}",
                    limits.radius_max, span
                ),
            });
        }
        if !self.viewport.initial_state(&limits).is_valid() {
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: "center, radius and pan ratio must be finite with radius > 0".to_string(),
            });
        }
        if self.viewport.max_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "viewport.max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }

        let window = secs("stats.window_secs", self.stats.window_secs)?;
        if window.is_zero() {
            return Err(ConfigError::Invalid {
                field: "stats.window_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.modes.order.contains(&HandlerKind::Market) && self.market.symbols.is_empty() {
            return Err(ConfigError::Invalid {
                field: "market.symbols",
                reason: "market screen needs at least one symbol".to_string(),
            });
        }
        self.market.freshness()?;

        Ok(())
    }
}
