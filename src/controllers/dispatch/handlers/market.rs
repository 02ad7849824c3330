use crate::controllers::data::Frame;
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::dispatch::handlers::ModeHandler;
use crate::core::market::{MarketCache, MarketDataProvider};
use tracing::{debug, warn};

/// Market chart screen backed by a staleness-checked cache.
pub struct MarketHandler<P: MarketDataProvider> {
    provider: P,
    cache: MarketCache,
    symbols: Vec<String>,
}

impl<P: MarketDataProvider> MarketHandler<P> {
    #[must_use]
    pub fn new(provider: P, cache: MarketCache, symbols: Vec<String>) -> Self {
        Self {
            provider,
            cache,
            symbols,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &MarketCache {
        &self.cache
    }
}

impl<P: MarketDataProvider> ModeHandler for MarketHandler<P> {
    fn name(&self) -> &'static str {
        "market"
    }

    fn frame(&mut self, ctx: &TickContext) -> Option<Frame> {
        match self
            .cache
            .refresh(&mut self.provider, &self.symbols, ctx.wall)
        {
            Ok(0) => {}
            Ok(fetched) => debug!(fetched, "market cache refreshed"),
            Err(err) => warn!(error = %err, "market fetch failed, serving cached series"),
        }

        let series = self.cache.series_for(&self.symbols);
        if series.is_empty() {
            debug!("no market data to show, skipping frame");
            return None;
        }

        Some(Frame::Market { series })
    }
}

#[cfg(test)]
mod tests {
    use super::MarketHandler;
    use crate::controllers::data::Frame;
    use crate::controllers::dispatch::context::TickContext;
    use crate::controllers::dispatch::handlers::ModeHandler;
    use crate::core::market::{
        MarketCache, MarketDataProvider, MarketError, MarketSeries, PricePoint,
    };
    use chrono::{DateTime, Local, TimeZone};
    use std::time::Duration;

    struct FlakyProvider {
        succeed: bool,
        calls: usize,
    }

    impl MarketDataProvider for FlakyProvider {
        fn fetch(&mut self, symbols: &[String]) -> Result<Vec<MarketSeries>, MarketError> {
            self.calls += 1;
            if !self.succeed {
                return Err(MarketError::Unavailable {
                    reason: "no route".to_string(),
                });
            }
            Ok(symbols
                .iter()
                .map(|symbol| MarketSeries {
                    symbol: symbol.clone(),
                    points: vec![PricePoint {
                        timestamp: 1,
                        close: 10.0,
                    }],
                })
                .collect())
        }
    }

    fn wall(day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, day, 12, 0, 0)
            .single()
            .expect("test time should be unambiguous")
    }

    fn ctx(day: u32) -> TickContext {
        TickContext {
            now: Duration::ZERO,
            wall: wall(day),
        }
    }

    fn handler(succeed: bool) -> MarketHandler<FlakyProvider> {
        MarketHandler::new(
            FlakyProvider { succeed, calls: 0 },
            MarketCache::default(),
            vec!["SPY".to_string()],
        )
    }

    #[test]
    fn fetches_once_per_day() {
        let mut handler = handler(true);

        assert!(matches!(handler.frame(&ctx(4)), Some(Frame::Market { .. })));
        assert!(matches!(handler.frame(&ctx(4)), Some(Frame::Market { .. })));
        assert_eq!(handler.provider.calls, 1);

        let _ = handler.frame(&ctx(5));
        assert_eq!(handler.provider.calls, 2);
    }

    #[test]
    fn failure_without_cache_skips_frame() {
        let mut handler = handler(false);

        assert_eq!(handler.frame(&ctx(4)), None);
    }

    #[test]
    fn failure_with_stale_cache_still_draws() {
        let mut handler = handler(true);
        let _ = handler.frame(&ctx(4));
        handler.provider.succeed = false;

        let frame = handler.frame(&ctx(5));

        assert!(matches!(frame, Some(Frame::Market { ref series }) if series.len() == 1));
        assert!(handler.cache().get("SPY").is_some());
    }
}
