/// Raw electrical level of the two button lines, before polarity is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawLevels {
    pub a_high: bool,
    pub b_high: bool,
}

/// Logical pressed state of both buttons for one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonsSnapshot {
    pub a: bool,
    pub b: bool,
}

impl ButtonsSnapshot {
    #[must_use]
    pub fn from_levels(levels: RawLevels, active_low: bool) -> Self {
        Self {
            a: levels.a_high != active_low,
            b: levels.b_high != active_low,
        }
    }

    #[must_use]
    pub fn both(&self) -> bool {
        self.a && self.b
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.a || self.b
    }
}
