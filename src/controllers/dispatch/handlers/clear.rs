use crate::controllers::data::Frame;
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::dispatch::handlers::ModeHandler;

/// Standby screen: blank and backlight off.
#[derive(Debug, Default)]
pub struct ClearHandler;

impl ModeHandler for ClearHandler {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn frame(&mut self, _ctx: &TickContext) -> Option<Frame> {
        Some(Frame::Clear)
    }

    fn backlight(&self) -> bool {
        false
    }
}
