//! Built-in defaults seeded into every builder.

use crate::types::DEFAULT_CHUNK_SIZE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder carrying the built-in defaults (lowest precedence).
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("hash.algorithm", "sha256")?
        .set_default("hash.chunk_size", DEFAULT_CHUNK_SIZE as u64)
}
