use crate::config::display_config::DisplayConfig;
use crate::config::errors::ConfigError;
use std::path::Path;
use tracing::info;

/// Environment variable holding the optional settings file path.
pub const CONFIG_ENV_VAR: &str = "TFT_DISPLAY_CONFIG";

/// Reads, parses and validates a TOML settings file.
pub fn load_config(path: impl AsRef<Path>) -> Result<DisplayConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    info!(path = %path.display(), modes = config.modes.order.len(), "settings loaded");
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<DisplayConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Loads the file named by [`CONFIG_ENV_VAR`], or the defaults when it is unset.
pub fn load_from_env() -> Result<DisplayConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => load_config(path),
        None => {
            info!("{} not set, using default settings", CONFIG_ENV_VAR);
            let config = DisplayConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}
