use crate::core::input::{ButtonSource, InputError, RawLevels};
use std::path::{Path, PathBuf};

/// Reads the two button lines from sysfs GPIO `value` files.
///
/// The lines must already be exported and configured as inputs.
#[derive(Debug, Clone)]
pub struct SysfsButtons {
    line_a: PathBuf,
    line_b: PathBuf,
}

impl SysfsButtons {
    #[must_use]
    pub fn new(line_a: impl Into<PathBuf>, line_b: impl Into<PathBuf>) -> Self {
        Self {
            line_a: line_a.into(),
            line_b: line_b.into(),
        }
    }
}

fn read_line(path: &Path) -> Result<bool, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        line: path.display().to_string(),
        source,
    })?;

    parse_level(raw.trim()).ok_or_else(|| InputError::InvalidLevel {
        line: path.display().to_string(),
        value: raw.trim().to_string(),
    })
}

fn parse_level(value: &str) -> Option<bool> {
    match value {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

impl ButtonSource for SysfsButtons {
    fn read_levels(&mut self) -> Result<RawLevels, InputError> {
        Ok(RawLevels {
            a_high: read_line(&self.line_a)?,
            b_high: read_line(&self.line_b)?,
        })
    }
}
