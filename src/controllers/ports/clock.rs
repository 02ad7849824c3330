use chrono::{DateTime, Local};
use std::time::Duration;

pub trait Clock {
    /// Monotonic time since the clock was created.
    fn now(&self) -> Duration;

    /// Local wall-clock time, for calendar-based staleness checks.
    fn wall(&self) -> DateTime<Local>;

    fn sleep(&self, duration: Duration);
}
