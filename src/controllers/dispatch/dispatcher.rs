use crate::controllers::data::RenderRequest;
use crate::controllers::dispatch::binding::Binding;
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::errors::DispatchError;
use crate::controllers::ports::{Clock, RenderPort};
use crate::core::gate::GateDecision;
use crate::core::input::{ButtonSource, DebouncedInput};
use crate::core::mode::{Mode, ModeRing, ModeState};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Throttled,
    Skipped,
    Rendered,
    RenderFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub mode: ModeState,
    pub handler: &'static str,
    pub outcome: TickOutcome,
    /// Minimum time the fired handler should appear to take.
    pub min_busy: Duration,
}

impl TickReport {
    #[must_use]
    pub fn fired(&self) -> bool {
        self.outcome != TickOutcome::Throttled
    }
}

/// Single-threaded polling loop: input, mode, gate, render.
pub struct Dispatcher<S: ButtonSource, R: RenderPort> {
    input: DebouncedInput<S>,
    ring: ModeRing,
    mode: ModeState,
    bindings: Vec<Binding>,
    standby: Binding,
    renderer: R,
    tick_delay: Duration,
}

impl<S: ButtonSource, R: RenderPort> Dispatcher<S, R> {
    /// One binding per active mode, in button order, plus the standby screen.
    pub fn new(
        input: DebouncedInput<S>,
        bindings: Vec<Binding>,
        standby: Binding,
        buffer_width: u32,
        renderer: R,
        tick_delay: Duration,
    ) -> Result<Self, DispatchError> {
        let ring = ModeRing::new(bindings.len(), buffer_width)?;

        Ok(Self {
            input,
            ring,
            mode: ModeState::default(),
            bindings,
            standby,
            renderer,
            tick_delay,
        })
    }

    #[must_use]
    pub fn mode(&self) -> ModeState {
        self.mode
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn ring(&self) -> &ModeRing {
        &self.ring
    }

    #[must_use]
    pub fn tick_delay(&self) -> Duration {
        self.tick_delay
    }

    /// Polls the buttons and applies the transition. Returns whether the
    /// current mode changed.
    fn update_mode(&mut self, now: Duration) -> bool {
        let Some(buttons) = self.input.poll(now) else {
            return false;
        };

        let next = self.ring.transition(self.mode, buttons);
        self.mode = next;

        if next.changed() {
            info!(from = %next.previous, to = %next.current, "mode changed");
        }

        next.changed()
    }

    pub fn tick(&mut self, ctx: TickContext) -> TickReport {
        let entered = self.update_mode(ctx.now);
        let state = self.mode;
        let mode = state.current;

        let binding = match mode {
            // the ring keeps active indices below bindings.len()
            Mode::Active(index) => self.bindings.get_mut(index).unwrap_or(&mut self.standby),
            Mode::Standby(_) => &mut self.standby,
        };
        let handler = binding.handler.name();

        if entered {
            binding.gate.invalidate();
        }

        let outcome = match binding.gate.evaluate(mode, ctx.now) {
            GateDecision::Throttled { .. } => TickOutcome::Throttled,
            GateDecision::Fired { mode_changed } => {
                debug!(handler, %mode, mode_changed, "render gate fired");

                match binding.handler.frame(&ctx) {
                    None => TickOutcome::Skipped,
                    Some(frame) => {
                        let request = RenderRequest {
                            mode,
                            backlight: binding.handler.backlight(),
                            frame,
                        };

                        match self.renderer.render(&request) {
                            Ok(()) => TickOutcome::Rendered,
                            Err(err) => {
                                warn!(handler, error = %err, "render failed, skipping frame");
                                TickOutcome::RenderFailed
                            }
                        }
                    }
                }
            }
        };

        let min_busy = if outcome == TickOutcome::Throttled {
            Duration::ZERO
        } else {
            binding.min_busy
        };

        TickReport {
            mode: state,
            handler,
            outcome,
            min_busy,
        }
    }

    /// Runs one tick, then sleeps out the busy padding and the tick delay.
    pub fn step<C: Clock>(&mut self, clock: &C) -> TickReport {
        let started = clock.now();
        let report = self.tick(TickContext {
            now: started,
            wall: clock.wall(),
        });

        let spent = clock.now().saturating_sub(started);
        let pad = report.min_busy.saturating_sub(spent);
        if !pad.is_zero() {
            clock.sleep(pad);
        }

        clock.sleep(self.tick_delay);
        report
    }

    /// Runs until the process is terminated.
    pub fn run<C: Clock>(&mut self, clock: &C) -> ! {
        info!(
            modes = self.ring.mode_count(),
            buffer_width = self.ring.buffer_width(),
            tick_delay_ms = self.tick_delay.as_millis() as u64,
            "dispatch loop started"
        );

        loop {
            self.step(clock);
        }
    }
}
