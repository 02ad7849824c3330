use crate::core::input::buttons::RawLevels;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum InputError {
    Read { line: String, source: std::io::Error },
    InvalidLevel { line: String, value: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { line, source } => {
                write!(f, "failed to read button line {}: {}", line, source)
            }
            Self::InvalidLevel { line, value } => {
                write!(f, "button line {} reported unexpected level {:?}", line, value)
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::InvalidLevel { .. } => None,
        }
    }
}

pub trait ButtonSource {
    fn read_levels(&mut self) -> Result<RawLevels, InputError>;
}
