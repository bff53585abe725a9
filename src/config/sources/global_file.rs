//! Global config file: $XDG_CONFIG_HOME/treehash/config.toml (optional)

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};

/// Add the global config file to builder when it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = xdg::global_config_path() else {
        return Ok(builder);
    };
    if !path.exists() {
        return Ok(builder);
    }
    tracing::debug!(path = %path.display(), "loading global config");
    Ok(builder.add_source(File::from(path).required(false)))
}
