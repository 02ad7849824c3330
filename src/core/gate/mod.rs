pub mod render_gate;

pub use render_gate::{GateDecision, RenderGate};
