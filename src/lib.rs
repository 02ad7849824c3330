pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::config::{
    CONFIG_ENV_VAR, ConfigError, DisplayConfig, HandlerKind, load_config, load_from_env,
};
pub use crate::controllers::data::{Frame, RenderRequest, StatsFrame};
pub use crate::controllers::dispatch::{
    Binding, Dispatcher, TickContext, TickOutcome, TickReport, build_dispatcher,
};
pub use crate::controllers::display::display_controller;
pub use crate::controllers::errors::{DispatchError, RenderError};
pub use crate::controllers::ports::{Clock, RenderPort};
pub use crate::core::mode::{Mode, ModeRing, ModeState};
pub use crate::core::viewport::{ViewportLimits, ViewportState, step_viewport};

pub use crate::adapters::clock::SystemClock;
pub use crate::adapters::stats::ProcfsStats;
pub use crate::input::gpio::SysfsButtons;
pub use crate::presenters::log::LogRenderer;
pub use crate::storage::JsonFileMarketProvider;
