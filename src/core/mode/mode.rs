/// Which screen the controller is showing.
///
/// `Standby` is the display-off band. Its page records the active mode it was
/// entered from, so waking returns to the same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Active(usize),
    Standby(u64),
}

impl Mode {
    #[must_use]
    pub fn is_standby(&self) -> bool {
        matches!(self, Self::Standby(_))
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Active(0)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active(index) => write!(f, "active#{}", index),
            Self::Standby(page) => write!(f, "standby#{}", page),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeState {
    pub current: Mode,
    pub previous: Mode,
}

impl ModeState {
    #[must_use]
    pub fn starting_at(mode: Mode) -> Self {
        Self {
            current: mode,
            previous: mode,
        }
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.current != self.previous
    }
}
