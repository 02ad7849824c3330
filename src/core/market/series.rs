#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl MarketSeries {
    #[must_use]
    pub fn latest_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }

    /// Relative change from first to last close, in percent.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.points.first()?.close;
        let last = self.points.last()?.close;

        if first == 0.0 {
            return None;
        }

        Some((last - first) / first * 100.0)
    }
}
