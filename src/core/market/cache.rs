//! Per-symbol market series cache.
//!
//! A cached series is fresh when it was fetched on the same local calendar
//! day, or within the freshness window (covers fetches just before midnight).
//! Symbols the provider does not know are remembered with the same freshness
//! rule, so they are not asked for again on every refresh.

use crate::core::market::ports::market_provider::{MarketDataProvider, MarketError};
use crate::core::market::series::MarketSeries;
use chrono::{DateTime, Local, TimeDelta};
use std::collections::HashMap;
use tracing::warn;

pub const DEFAULT_FRESHNESS_SECS: i64 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct CachedSeries {
    pub fetched_at: DateTime<Local>,
    pub series: MarketSeries,
}

#[must_use]
pub fn is_fresh(fetched_at: DateTime<Local>, now: DateTime<Local>, freshness: TimeDelta) -> bool {
    fetched_at.date_naive() == now.date_naive()
        || now.signed_duration_since(fetched_at) <= freshness
}

#[derive(Debug, Clone)]
pub struct MarketCache {
    freshness: TimeDelta,
    entries: HashMap<String, CachedSeries>,
    missing: HashMap<String, DateTime<Local>>,
}

impl MarketCache {
    #[must_use]
    pub fn new(freshness: TimeDelta) -> Self {
        Self {
            freshness,
            entries: HashMap::new(),
            missing: HashMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&CachedSeries> {
        self.entries.get(symbol)
    }

    /// Whether the last fetch that asked for `symbol` came back without it.
    #[must_use]
    pub fn is_missing(&self, symbol: &str) -> bool {
        self.missing.contains_key(symbol)
    }

    #[must_use]
    pub fn stale_symbols(&self, symbols: &[String], now: DateTime<Local>) -> Vec<String> {
        symbols
            .iter()
            .filter(|symbol| {
                let cached = self
                    .entries
                    .get(symbol.as_str())
                    .is_some_and(|cached| is_fresh(cached.fetched_at, now, self.freshness));
                let known_missing = self
                    .missing
                    .get(symbol.as_str())
                    .is_some_and(|checked_at| is_fresh(*checked_at, now, self.freshness));
                !cached && !known_missing
            })
            .cloned()
            .collect()
    }

    pub fn store(&mut self, series: Vec<MarketSeries>, now: DateTime<Local>) {
        for series in series {
            self.missing.remove(&series.symbol);
            self.entries.insert(
                series.symbol.clone(),
                CachedSeries {
                    fetched_at: now,
                    series,
                },
            );
        }
    }

    /// Fetches only the stale symbols. Returns how many series were stored.
    ///
    /// On error the existing (stale) entries are left untouched so callers can
    /// keep serving them.
    pub fn refresh<P: MarketDataProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        symbols: &[String],
        now: DateTime<Local>,
    ) -> Result<usize, MarketError> {
        let stale = self.stale_symbols(symbols, now);
        if stale.is_empty() {
            return Ok(0);
        }

        let fetched = provider.fetch(&stale)?;
        let count = fetched.len();

        for symbol in stale {
            if fetched.iter().any(|series| series.symbol == symbol) {
                continue;
            }
            if self.missing.insert(symbol.clone(), now).is_none() {
                warn!(symbol = %symbol, "market provider has no series for symbol");
            }
        }
        self.store(fetched, now);

        Ok(count)
    }

    /// Cached series for `symbols`, in request order, skipping unknown ones.
    #[must_use]
    pub fn series_for(&self, symbols: &[String]) -> Vec<MarketSeries> {
        symbols
            .iter()
            .filter_map(|symbol| self.entries.get(symbol.as_str()))
            .map(|cached| cached.series.clone())
            .collect()
    }
}

impl Default for MarketCache {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(DEFAULT_FRESHNESS_SECS))
    }
}
