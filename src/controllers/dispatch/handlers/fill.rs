use crate::controllers::data::Frame;
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::dispatch::handlers::ModeHandler;
use crate::core::data::colour::Colour;

/// Solid-colour test screen.
#[derive(Debug)]
pub struct FillHandler {
    colour: Colour,
}

impl FillHandler {
    #[must_use]
    pub fn new(colour: Colour) -> Self {
        Self { colour }
    }
}

impl ModeHandler for FillHandler {
    fn name(&self) -> &'static str {
        "fill"
    }

    fn frame(&mut self, _ctx: &TickContext) -> Option<Frame> {
        Some(Frame::Fill {
            colour: self.colour,
        })
    }
}
