pub mod cache;
pub mod ports;
pub mod series;

pub use cache::{CachedSeries, DEFAULT_FRESHNESS_SECS, MarketCache, is_fresh};
pub use ports::market_provider::{MarketDataProvider, MarketError};
pub use series::{MarketSeries, PricePoint};
