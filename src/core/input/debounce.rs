//! Fixed-interval button sampling.
//!
//! The lines are only read once per `debounce_interval`; polls in between
//! report no event, so a held button repeats at most once per interval.

use crate::core::input::buttons::ButtonsSnapshot;
use crate::core::input::ports::button_source::ButtonSource;
use std::time::Duration;
use tracing::warn;

pub struct DebouncedInput<S: ButtonSource> {
    source: S,
    debounce_interval: Duration,
    active_low: bool,
    next_read: Duration,
}

impl<S: ButtonSource> DebouncedInput<S> {
    #[must_use]
    pub fn new(source: S, debounce_interval: Duration, active_low: bool) -> Self {
        Self {
            source,
            debounce_interval,
            active_low,
            next_read: Duration::ZERO,
        }
    }

    /// Samples the buttons if the debounce interval has elapsed.
    ///
    /// A failed read is logged and reported as no event; the next read is
    /// still pushed back so a broken line is not hammered every tick.
    pub fn poll(&mut self, now: Duration) -> Option<ButtonsSnapshot> {
        if now < self.next_read {
            return None;
        }

        self.next_read = now + self.debounce_interval;

        match self.source.read_levels() {
            Ok(levels) => Some(ButtonsSnapshot::from_levels(levels, self.active_low)),
            Err(err) => {
                warn!(error = %err, "button read failed, skipping poll");
                None
            }
        }
    }

    #[must_use]
    pub fn next_read(&self) -> Duration {
        self.next_read
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
