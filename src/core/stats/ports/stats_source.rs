use crate::core::stats::sample::StatsReading;
use std::{error::Error, fmt, path::PathBuf};

#[derive(Debug)]
pub enum StatsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, detail: String },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            Self::Parse { path, detail } => {
                write!(f, "failed to parse {}: {}", path.display(), detail)
            }
        }
    }
}

impl Error for StatsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

pub trait StatsSource {
    fn sample(&mut self) -> Result<StatsReading, StatsError>;
}
