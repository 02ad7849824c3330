pub mod animator;
pub mod limits;
pub mod state;
pub mod status;

pub use animator::step_viewport;
pub use limits::{ViewportLimits, ViewportLimitsError};
pub use state::ViewportState;
pub use status::{ViewportStepReport, ViewportWarning};
