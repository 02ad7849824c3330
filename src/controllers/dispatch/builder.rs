use crate::config::display_config::secs;
use crate::config::{ConfigError, DisplayConfig, HandlerKind};
use crate::controllers::dispatch::binding::Binding;
use crate::controllers::dispatch::dispatcher::Dispatcher;
use crate::controllers::dispatch::handlers::{
    ClearHandler, FillHandler, FractalHandler, MarketHandler, ModeHandler, StatsHandler,
};
use crate::controllers::errors::DispatchError;
use crate::controllers::ports::RenderPort;
use crate::core::input::{ButtonSource, DebouncedInput};
use crate::core::market::{MarketCache, MarketDataProvider};
use crate::core::stats::{StatsLog, StatsSource};
use tracing::info;

/// Builds the dispatcher described by `config`.
///
/// Every mode-ring entry gets its own handler; sources are cloned when a
/// screen appears more than once.
pub fn build_dispatcher<S, R, T, M>(
    config: &DisplayConfig,
    buttons: S,
    renderer: R,
    stats: T,
    market: M,
) -> Result<Dispatcher<S, R>, ConfigError>
where
    S: ButtonSource,
    R: RenderPort,
    T: StatsSource + Clone + 'static,
    M: MarketDataProvider + Clone + 'static,
{
    config.validate()?;

    let limits = config.viewport.limits()?;
    let stats_window = secs("stats.window_secs", config.stats.window_secs)?;
    let freshness = config.market.freshness()?;
    let min_busy = config.intervals.min_busy()?;

    let bindings = config
        .modes
        .order
        .iter()
        .map(|kind| -> Result<Binding, ConfigError> {
            let handler: Box<dyn ModeHandler> = match kind {
                HandlerKind::Stats => {
                    Box::new(StatsHandler::new(stats.clone(), StatsLog::new(stats_window)))
                }
                HandlerKind::Fractal => Box::new(FractalHandler::new(
                    config.viewport.initial_state(&limits),
                    limits,
                    config.viewport.max_iterations,
                )),
                HandlerKind::Market => Box::new(MarketHandler::new(
                    market.clone(),
                    MarketCache::new(freshness),
                    config.market.symbols.clone(),
                )),
                HandlerKind::Fill => Box::new(FillHandler::new(config.fill.colour())),
            };

            Ok(Binding::new(handler, config.intervals.interval(*kind)?, min_busy))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let standby = Binding::new(
        Box::new(ClearHandler),
        config.intervals.standby()?,
        config.intervals.standby_min_busy()?,
    );

    let input = DebouncedInput::new(
        buttons,
        secs("input.debounce_secs", config.input.debounce_secs)?,
        config.input.active_low,
    );
    let tick_delay = secs("modes.tick_delay_secs", config.modes.tick_delay_secs)?;

    let dispatcher = Dispatcher::new(
        input,
        bindings,
        standby,
        config.modes.buffer_width,
        renderer,
        tick_delay,
    )
    .map_err(|err| match err {
        DispatchError::ModeRing(err) => ConfigError::ModeRing(err),
    })?;

    info!(
        modes = ?config.modes.order,
        buffer_width = config.modes.buffer_width,
        "dispatcher built"
    );
    Ok(dispatcher)
}
