use crate::controllers::dispatch::handlers::ModeHandler;
use crate::core::gate::RenderGate;
use std::time::Duration;

/// A mode's handler together with its own redraw throttle.
pub struct Binding {
    pub handler: Box<dyn ModeHandler>,
    pub gate: RenderGate,
    /// Fired ticks are padded to at least this long so short frames are not
    /// followed by an immediate button poll.
    pub min_busy: Duration,
}

impl Binding {
    #[must_use]
    pub fn new(handler: Box<dyn ModeHandler>, min_interval: Duration, min_busy: Duration) -> Self {
        Self {
            handler,
            gate: RenderGate::new(min_interval),
            min_busy,
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("handler", &self.handler.name())
            .field("gate", &self.gate)
            .field("min_busy", &self.min_busy)
            .finish()
    }
}
