use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRingError {
    NoModes,
    TooManyModes { mode_count: usize },
    BufferTooNarrow { buffer_width: u32, minimum: u32 },
}

impl fmt::Display for ModeRingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoModes => write!(f, "at least one display mode must be configured"),
            Self::TooManyModes { mode_count } => {
                write!(f, "{} display modes is more than the ring can address", mode_count)
            }
            Self::BufferTooNarrow {
                buffer_width,
                minimum,
            } => write!(
                f,
                "standby buffer width {} is below the minimum of {}",
                buffer_width, minimum
            ),
        }
    }
}

impl Error for ModeRingError {}
