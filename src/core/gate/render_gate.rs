use crate::core::mode::Mode;
use std::time::Duration;

/// Per-handler redraw throttle.
///
/// Fires when the interval has elapsed or the mode differs from the one last
/// served, so switching screens never waits out the previous throttle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderGate {
    min_interval: Duration,
    next_allowed: Duration,
    last_mode_served: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Fired { mode_changed: bool },
    Throttled { remaining: Duration },
}

impl GateDecision {
    #[must_use]
    pub fn fired(&self) -> bool {
        matches!(self, Self::Fired { .. })
    }
}

impl RenderGate {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_allowed: Duration::ZERO,
            last_mode_served: None,
        }
    }

    pub fn should_fire(&mut self, mode: Mode, now: Duration) -> bool {
        self.evaluate(mode, now).fired()
    }

    /// Same as [`should_fire`](Self::should_fire) but reports why.
    ///
    /// The next deadline is re-based on `now`, not on the old deadline, so a
    /// long idle gap never turns into a burst of catch-up redraws.
    pub fn evaluate(&mut self, mode: Mode, now: Duration) -> GateDecision {
        let mode_changed = self.last_mode_served != Some(mode);

        if now < self.next_allowed && !mode_changed {
            return GateDecision::Throttled {
                remaining: self.next_allowed - now,
            };
        }

        self.next_allowed = now + self.min_interval;
        self.last_mode_served = Some(mode);

        GateDecision::Fired { mode_changed }
    }

    /// Forgets the last served mode so the next evaluation fires.
    ///
    /// Called when a screen is re-entered; the gate only ever sees its own mode.
    pub fn invalidate(&mut self) {
        self.last_mode_served = None;
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    #[must_use]
    pub fn next_allowed(&self) -> Duration {
        self.next_allowed
    }

    #[must_use]
    pub fn last_mode_served(&self) -> Option<Mode> {
        self.last_mode_served
    }
}
