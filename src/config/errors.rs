use crate::core::data::complex_rect::ComplexRectError;
use crate::core::mode::ModeRingError;
use crate::core::viewport::ViewportLimitsError;
use std::path::PathBuf;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid {
        field: &'static str,
        reason: String,
    },
    Bounds(ComplexRectError),
    Viewport(ViewportLimitsError),
    ModeRing(ModeRingError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read settings file {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid settings file {}: {}", path.display(), source)
            }
            Self::Invalid { field, reason } => write!(f, "invalid setting {}: {}", field, reason),
            Self::Bounds(err) => write!(f, "invalid viewport bounds: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport limits: {}", err),
            Self::ModeRing(err) => write!(f, "invalid mode table: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
            Self::Bounds(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::ModeRing(err) => Some(err),
        }
    }
}

impl From<ComplexRectError> for ConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::Bounds(err)
    }
}

impl From<ViewportLimitsError> for ConfigError {
    fn from(err: ViewportLimitsError) -> Self {
        Self::Viewport(err)
    }
}

impl From<ModeRingError> for ConfigError {
    fn from(err: ModeRingError) -> Self {
        Self::ModeRing(err)
    }
}
