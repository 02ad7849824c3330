pub mod data;
pub mod dispatch;
pub mod display;
pub mod errors;
pub mod ports;
