pub mod display_config;
pub mod errors;
pub mod loader;

pub use display_config::{DisplayConfig, HandlerKind};
pub use errors::ConfigError;
pub use loader::{CONFIG_ENV_VAR, load_config, load_from_env};
