use crate::controllers::data::{Frame, RenderRequest};
use crate::controllers::errors::RenderError;
use crate::controllers::ports::RenderPort;
use tracing::{debug, info};

/// Renderer that only describes each request through `tracing`.
///
/// Stands in for the panel driver on machines without a display attached.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    backlight: Option<bool>,
}

impl LogRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn backlight(&self) -> Option<bool> {
        self.backlight
    }
}

impl RenderPort for LogRenderer {
    fn render(&mut self, request: &RenderRequest) -> Result<(), RenderError> {
        if self.backlight != Some(request.backlight) {
            info!(on = request.backlight, "backlight");
            self.backlight = Some(request.backlight);
        }

        let kind = request.frame.kind_name();
        match &request.frame {
            Frame::Clear => debug!(mode = %request.mode, kind, "frame"),
            Frame::Fill { colour } => {
                debug!(mode = %request.mode, kind, rgb565 = colour.to_rgb565(), "frame")
            }
            Frame::Fractal {
                extent,
                max_iterations,
            } => debug!(
                mode = %request.mode,
                kind,
                left = extent.left(),
                top = extent.top(),
                width = extent.width(),
                height = extent.height(),
                max_iterations,
                "frame"
            ),
            Frame::SysStats(stats) => debug!(
                mode = %request.mode,
                kind,
                samples = stats.time_offsets.len(),
                cores = stats.cpu_percent_by_core.len(),
                "frame"
            ),
            Frame::Market { series } => {
                for entry in series {
                    debug!(
                        mode = %request.mode,
                        kind,
                        symbol = %entry.symbol,
                        close = entry.latest_close(),
                        change_percent = entry.change_percent(),
                        "frame"
                    );
                }
            }
        }

        self.frames += 1;
        Ok(())
    }
}
