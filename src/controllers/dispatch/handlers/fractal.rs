use crate::controllers::data::Frame;
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::dispatch::handlers::ModeHandler;
use crate::core::viewport::{ViewportLimits, ViewportState, ViewportWarning, step_viewport};
use tracing::{debug, warn};

/// Animated fractal zoom. Owns the viewport and advances it once per frame.
#[derive(Debug)]
pub struct FractalHandler {
    viewport: ViewportState,
    limits: ViewportLimits,
    max_iterations: u32,
}

impl FractalHandler {
    #[must_use]
    pub fn new(viewport: ViewportState, limits: ViewportLimits, max_iterations: u32) -> Self {
        Self {
            viewport,
            limits,
            max_iterations,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }
}

impl ModeHandler for FractalHandler {
    fn name(&self) -> &'static str {
        "fractal"
    }

    fn frame(&mut self, _ctx: &TickContext) -> Option<Frame> {
        let report = step_viewport(&mut self.viewport, &self.limits);

        match report.warning {
            Some(ViewportWarning::NonFiniteReset) => {
                warn!("viewport went non-finite, reset to bounds center");
            }
            Some(ViewportWarning::ExtentClamped) | None => {}
        }

        if report.bounced() || report.growth_reversed {
            debug!(
                flipped_real = report.flipped_real,
                flipped_imag = report.flipped_imag,
                growth_reversed = report.growth_reversed,
                radius = self.viewport.radius,
                "viewport reversed"
            );
        }

        Some(Frame::Fractal {
            extent: report.extent,
            max_iterations: self.max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FractalHandler;
    use crate::controllers::data::Frame;
    use crate::controllers::dispatch::context::TickContext;
    use crate::controllers::dispatch::handlers::ModeHandler;
    use crate::core::viewport::{ViewportLimits, ViewportState};
    use chrono::Local;
    use std::time::Duration;

    fn ctx() -> TickContext {
        TickContext {
            now: Duration::ZERO,
            wall: Local::now(),
        }
    }

    #[test]
    fn each_frame_advances_the_viewport() {
        let mut handler =
            FractalHandler::new(ViewportState::default(), ViewportLimits::default(), 100);
        let before = *handler.viewport();

        let frame = handler.frame(&ctx());

        assert!(matches!(
            frame,
            Some(Frame::Fractal {
                max_iterations: 100,
                ..
            })
        ));
        assert_ne!(handler.viewport().center, before.center);
        assert_ne!(handler.viewport().radius, before.radius);
    }

    #[test]
    fn frame_extent_stays_inside_bounds() {
        let limits = ViewportLimits::default();
        let mut handler = FractalHandler::new(ViewportState::centered_in(&limits), limits, 64);

        for _ in 0..500 {
            let Some(Frame::Fractal { extent, .. }) = handler.frame(&ctx()) else {
                panic!("fractal handler must always produce a fractal frame");
            };
            assert!(limits.bounds.contains_point(extent.top_left()));
            assert!(limits.bounds.contains_point(extent.bottom_right()));
        }
    }

    #[test]
    fn backlight_is_on() {
        let handler = FractalHandler::new(ViewportState::default(), ViewportLimits::default(), 1);

        assert!(handler.backlight());
    }
}
