//! Renderer port implementations.

pub mod log;
