pub mod dispatch;
pub mod render;

pub use dispatch::DispatchError;
pub use render::RenderError;
