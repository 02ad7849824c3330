//! Display-agnostic control logic: input, modes, throttling and animation.

pub mod data;
pub mod gate;
pub mod input;
pub mod market;
pub mod mode;
pub mod stats;
pub mod viewport;
