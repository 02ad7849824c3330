use crate::core::market::series::MarketSeries;
use std::{error::Error, fmt, path::PathBuf};

#[derive(Debug)]
pub enum MarketError {
    Unavailable { reason: String },
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, detail: String },
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "market data unavailable: {}", reason),
            Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            Self::Parse { path, detail } => {
                write!(f, "failed to parse {}: {}", path.display(), detail)
            }
        }
    }
}

impl Error for MarketError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub trait MarketDataProvider {
    /// Returns series for whichever of `symbols` the provider knows about.
    fn fetch(&mut self, symbols: &[String]) -> Result<Vec<MarketSeries>, MarketError>;
}
