pub mod errors;
#[allow(clippy::module_inception)]
pub mod mode;
pub mod ring;

pub use errors::ModeRingError;
pub use mode::{Mode, ModeState};
pub use ring::{MIN_BUFFER_WIDTH, ModeRing};
