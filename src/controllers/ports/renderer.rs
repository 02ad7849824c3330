use crate::controllers::data::RenderRequest;
use crate::controllers::errors::RenderError;

/// Performs the actual pixel I/O for a request. Called at most once per tick.
pub trait RenderPort {
    fn render(&mut self, request: &RenderRequest) -> Result<(), RenderError>;
}
