//! Configuration for hashing and logging.
//!
//! Sources are layered with the `config` crate: built-in defaults, then the
//! global file (`$XDG_CONFIG_HOME/treehash/config.toml`) or an explicit
//! `--config` file, then `TREEHASH__SECTION__KEY` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::HashAlgorithm;
use crate::types::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

/// Hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Hash function for leaves and internal nodes (default: sha256)
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Leaf chunk size in bytes (default: 1 MiB)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            chunk_size: default_chunk_size(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeHashConfig {
    #[serde(default)]
    pub hash: HashConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TreeHashConfig {
    /// Reject values no hashing run can use.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.hash.chunk_size == 0 {
            return Err(ApiError::ConfigError(
                "hash.chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
