//! The polling loop that ties input, mode, gates and handlers together.

pub mod binding;
pub mod builder;
pub mod context;
pub mod dispatcher;
pub mod handlers;

pub use binding::Binding;
pub use builder::build_dispatcher;
pub use context::TickContext;
pub use dispatcher::{Dispatcher, TickOutcome, TickReport};
