use crate::core::mode::ModeRingError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    ModeRing(ModeRingError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeRing(err) => write!(f, "invalid mode table: {}", err),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModeRing(err) => Some(err),
        }
    }
}

impl From<ModeRingError> for DispatchError {
    fn from(err: ModeRingError) -> Self {
        Self::ModeRing(err)
    }
}
