use chrono::{DateTime, Local};
use std::time::Duration;

/// Time as seen by one dispatch tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub now: Duration,
    pub wall: DateTime<Local>,
}
