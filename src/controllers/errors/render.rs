use crate::core::mode::Mode;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub mode: Mode,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render failed in {}: {}", self.mode, self.message)
    }
}

impl Error for RenderError {}
