//! Button-driven mode transitions.
//!
//! Transitions follow a signed integer encoding:
//! `Active(i)` is `i`, `Standby(p)` is `-buffer_width - p`. Every value at or
//! below `-buffer_width` is standby and is never wrapped; everything above is
//! reduced into `[0, mode_count)`.

use crate::core::input::ButtonsSnapshot;
use crate::core::mode::errors::ModeRingError;
use crate::core::mode::mode::{Mode, ModeState};

/// Smallest gap that keeps `Active(0)` minus one press out of the standby band.
pub const MIN_BUFFER_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRing {
    mode_count: usize,
    buffer_width: u32,
}

impl ModeRing {
    pub fn new(mode_count: usize, buffer_width: u32) -> Result<Self, ModeRingError> {
        if mode_count == 0 {
            return Err(ModeRingError::NoModes);
        }

        if i64::try_from(mode_count).is_err() {
            return Err(ModeRingError::TooManyModes { mode_count });
        }

        if buffer_width < MIN_BUFFER_WIDTH {
            return Err(ModeRingError::BufferTooNarrow {
                buffer_width,
                minimum: MIN_BUFFER_WIDTH,
            });
        }

        Ok(Self {
            mode_count,
            buffer_width,
        })
    }

    #[must_use]
    pub fn mode_count(&self) -> usize {
        self.mode_count
    }

    #[must_use]
    pub fn buffer_width(&self) -> u32 {
        self.buffer_width
    }

    /// Applies one poll's worth of button state.
    ///
    /// Priority: a combined press (or any press while in standby) mirrors the
    /// value across the standby boundary; otherwise A steps forward and B
    /// steps back.
    #[must_use]
    pub fn transition(&self, state: ModeState, buttons: ButtonsSnapshot) -> ModeState {
        let current = if buttons.both() || (buttons.any() && state.current.is_standby()) {
            self.mirror(state.current)
        } else if buttons.a {
            self.step(state.current, 1)
        } else if buttons.b {
            self.step(state.current, -1)
        } else {
            self.step(state.current, 0)
        };

        ModeState {
            current,
            previous: state.current,
        }
    }

    /// `-raw - buffer_width`, evaluated on the mode itself so that pages
    /// outside the `i64` range still land on the right screen.
    fn mirror(&self, mode: Mode) -> Mode {
        match mode {
            Mode::Active(index) => Mode::Standby(u64::try_from(index).unwrap_or(u64::MAX)),
            Mode::Standby(page) => {
                // mode_count fits in i64, checked in new()
                let count = self.mode_count as u64;
                Mode::Active((page % count) as usize)
            }
        }
    }

    fn step(&self, mode: Mode, delta: i64) -> Mode {
        match mode {
            Mode::Active(index) => {
                // reduced below mode_count, so it fits in i64
                let index = (index % self.mode_count) as i64;
                self.from_raw(index + delta)
            }
            Mode::Standby(_) => mode,
        }
    }

    /// Raw signed encoding of `mode`. Pages too deep for `i64` saturate to
    /// `i64::MIN`.
    #[must_use]
    pub fn to_raw(&self, mode: Mode) -> i64 {
        let buffer = i64::from(self.buffer_width);

        match mode {
            Mode::Active(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Mode::Standby(page) => {
                (-buffer).saturating_sub(i64::try_from(page).unwrap_or(i64::MAX))
            }
        }
    }

    #[must_use]
    pub fn from_raw(&self, raw: i64) -> Mode {
        let buffer = i64::from(self.buffer_width);

        if raw <= -buffer {
            // raw <= -buffer, so the difference is in [0, i64::MAX]
            Mode::Standby((-buffer - raw).unsigned_abs())
        } else {
            // mode_count fits in i64, checked in new()
            let count = self.mode_count as i64;
            Mode::Active(raw.rem_euclid(count) as usize)
        }
    }
}
