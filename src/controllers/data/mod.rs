pub mod render_request;

pub use render_request::{Frame, RenderRequest, StatsFrame};
