pub mod buttons;
pub mod debounce;
pub mod ports;

pub use buttons::{ButtonsSnapshot, RawLevels};
pub use debounce::DebouncedInput;
pub use ports::button_source::{ButtonSource, InputError};
