//! Port definitions for the dispatch loop.
//!
//! The loop only talks to the screen and the passage of time through these
//! traits; concrete adapters live in `adapters` and `presenters`.

pub mod clock;
pub mod renderer;

pub use clock::Clock;
pub use renderer::RenderPort;
