//! Market series persisted by an external fetcher as JSON:
//! `{"SPY": [[unix_ts, close], ...], ...}`.

use crate::core::market::{MarketDataProvider, MarketError, MarketSeries, PricePoint};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileMarketProvider {
    path: PathBuf,
}

impl JsonFileMarketProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parses the series file and keeps the requested symbols, oldest point first.
pub fn parse_series(
    text: &str,
    symbols: &[String],
) -> Result<Vec<MarketSeries>, serde_json::Error> {
    let mut by_symbol: HashMap<String, Vec<(i64, f64)>> = serde_json::from_str(text)?;

    Ok(symbols
        .iter()
        .filter_map(|symbol| {
            let Some(raw) = by_symbol.remove(symbol) else {
                debug!(symbol = %symbol, "symbol not in market file");
                return None;
            };

            let mut points: Vec<PricePoint> = raw
                .into_iter()
                .map(|(timestamp, close)| PricePoint { timestamp, close })
                .collect();
            points.sort_by_key(|point| point.timestamp);

            Some(MarketSeries {
                symbol: symbol.clone(),
                points,
            })
        })
        .collect())
}

impl MarketDataProvider for JsonFileMarketProvider {
    fn fetch(&mut self, symbols: &[String]) -> Result<Vec<MarketSeries>, MarketError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| MarketError::Io {
            path: self.path.clone(),
            source,
        })?;

        parse_series(&text, symbols).map_err(|err| MarketError::Parse {
            path: self.path.clone(),
            detail: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileMarketProvider, parse_series};
    use crate::core::market::{MarketDataProvider, MarketError, PricePoint};

    fn symbols(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn keeps_requested_symbols_in_order() {
        let text = r#"{"SPY": [[2, 501.5], [1, 500.0]], "QQQ": [[1, 420.0]], "DIA": []}"#;

        let series = parse_series(text, &symbols(&["QQQ", "SPY", "VTI"])).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].symbol, "QQQ");
        assert_eq!(
            series[1].points,
            vec![
                PricePoint {
                    timestamp: 1,
                    close: 500.0
                },
                PricePoint {
                    timestamp: 2,
                    close: 501.5
                },
            ]
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_series(r#"{"SPY": [[1]]}"#, &symbols(&["SPY"])).is_err());
        assert!(parse_series("not json", &symbols(&["SPY"])).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut provider = JsonFileMarketProvider::new("/nonexistent/market.json");

        assert!(matches!(
            provider.fetch(&symbols(&["SPY"])),
            Err(MarketError::Io { .. })
        ));
    }

    #[test]
    fn fetch_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "tft_display_market_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"SPY": [[1, 500.0]]}"#).expect("scratch file should be writable");
        let mut provider = JsonFileMarketProvider::new(&path);

        let series = provider.fetch(&symbols(&["SPY"]));
        let _ = std::fs::remove_file(&path);

        assert_eq!(series.unwrap()[0].latest_close(), Some(500.0));
    }
}
