use crate::adapters::clock::SystemClock;
use crate::adapters::stats::ProcfsStats;
use crate::config::DisplayConfig;
use crate::controllers::dispatch::build_dispatcher;
use crate::input::gpio::SysfsButtons;
use crate::presenters::log::LogRenderer;
use crate::storage::JsonFileMarketProvider;

/// Wires the real adapters to the dispatcher and runs the loop forever.
pub fn display_controller(config: &DisplayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let buttons = SysfsButtons::new(&config.input.button_a, &config.input.button_b);
    let stats = ProcfsStats::new(
        &config.stats.proc_stat,
        &config.stats.proc_meminfo,
        &config.stats.thermal_zone,
    );
    let market = JsonFileMarketProvider::new(&config.market.series_path);

    let mut dispatcher = build_dispatcher(config, buttons, LogRenderer::new(), stats, market)?;

    dispatcher.run(&SystemClock::new())
}
