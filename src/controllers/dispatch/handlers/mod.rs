//! Per-mode frame producers.
//!
//! A handler turns its own state into the next `Frame`. Returning `None`
//! skips the frame (nothing worth drawing yet); transient data failures are
//! logged and recovered inside the handler.

pub mod clear;
pub mod fill;
pub mod fractal;
pub mod market;
pub mod stats;

use crate::controllers::data::Frame;
use crate::controllers::dispatch::context::TickContext;

pub use clear::ClearHandler;
pub use fill::FillHandler;
pub use fractal::FractalHandler;
pub use market::MarketHandler;
pub use stats::StatsHandler;

pub trait ModeHandler {
    fn name(&self) -> &'static str;

    fn frame(&mut self, ctx: &TickContext) -> Option<Frame>;

    fn backlight(&self) -> bool {
        true
    }
}
