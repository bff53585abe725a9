//! Leaf and internal-node hashing.
//!
//! Every supported function produces a 256-bit digest. Selection is a plain
//! enum match; SHA-256 is the Glacier reference and the default.

use crate::error::ApiError;
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;

/// Hash function used for leaves, internal nodes, and the linear hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Digest of a single chunk.
    pub fn digest(&self, bytes: &[u8]) -> Digest {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(bytes).into(),
            HashAlgorithm::Blake3 => *blake3::hash(bytes).as_bytes(),
        }
    }

    /// Digest of `left || right`.
    pub fn digest_pair(&self, left: &Digest, right: &Digest) -> Digest {
        match self {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(left);
                hasher.update(right);
                hasher.finalize().into()
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                hasher.update(left);
                hasher.update(right);
                *hasher.finalize().as_bytes()
            }
        }
    }

    /// Start a streaming hash over the whole input.
    pub fn linear_hasher(&self) -> LinearHasher {
        match self {
            HashAlgorithm::Sha256 => LinearHasher::Sha256(Sha256::new()),
            HashAlgorithm::Blake3 => LinearHasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(ApiError::ConfigError(format!(
                "Unknown hash algorithm: {} (must be 'sha256' or 'blake3')",
                other
            ))),
        }
    }
}

/// Flat digest of the whole input, fed chunk by chunk
pub enum LinearHasher {
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl LinearHasher {
    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            LinearHasher::Sha256(h) => h.update(bytes),
            LinearHasher::Blake3(h) => {
                h.update(bytes);
            }
        }
    }

    pub fn finalize(self) -> Digest {
        match self {
            LinearHasher::Sha256(h) => h.finalize().into(),
            LinearHasher::Blake3(h) => *h.finalize().as_bytes(),
        }
    }
}
