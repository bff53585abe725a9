//! Tree hash driver: chunk, hash leaves, reduce.

use crate::error::{ApiError, ReadError};
use crate::tree::chunker::ChunkReader;
use crate::tree::hasher::HashAlgorithm;
use crate::tree::reducer;
use crate::types::{format_digest, Digest, DEFAULT_CHUNK_SIZE};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Options for a single hashing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    pub algorithm: HashAlgorithm,
    pub chunk_size: usize,
    /// Keep every reduction level in the report
    pub keep_levels: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            keep_levels: false,
        }
    }
}

/// Result of hashing one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeHashReport {
    pub path: String,
    pub bytes: u64,
    pub chunks: usize,
    pub algorithm: HashAlgorithm,
    pub chunk_size: usize,
    pub tree_hash: String,
    pub linear_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Vec<String>>>,
}

/// Digests computed from a stream, before they are rendered into a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDigest {
    pub bytes: u64,
    pub chunks: usize,
    pub root: Digest,
    pub linear: Digest,
    pub levels: Option<Vec<Vec<Digest>>>,
}

/// Hash everything `reader` produces.
pub fn hash_stream<R: Read>(reader: R, options: &HashOptions) -> Result<TreeDigest, ApiError> {
    let chunks = ChunkReader::new(reader, options.chunk_size).ok_or_else(|| {
        ApiError::ConfigError("Chunk size must be greater than zero".to_string())
    })?;

    let algorithm = options.algorithm;
    let mut linear = algorithm.linear_hasher();
    let mut leaves = Vec::new();
    let mut bytes = 0u64;

    for chunk in chunks {
        let chunk = chunk.map_err(ReadError::IoError)?;
        linear.update(&chunk);
        bytes += chunk.len() as u64;
        leaves.push(algorithm.digest(&chunk));
    }

    let chunk_count = leaves.len();
    let (root, levels) = if options.keep_levels {
        let levels = reducer::reduce_levels(leaves, algorithm)?;
        let root = levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(ApiError::EmptyTree)?;
        (root, Some(levels))
    } else {
        (reducer::reduce(leaves, algorithm)?, None)
    };

    debug!(
        algorithm = algorithm.name(),
        bytes,
        chunks = chunk_count,
        "computed tree hash"
    );

    Ok(TreeDigest {
        bytes,
        chunks: chunk_count,
        root,
        linear: linear.finalize(),
        levels,
    })
}

/// Hash `reader` and label the report with `label`.
pub fn hash_reader<R: Read>(
    reader: R,
    label: &str,
    options: &HashOptions,
) -> Result<TreeHashReport, ApiError> {
    let digest = hash_stream(reader, options)?;
    Ok(TreeHashReport {
        path: label.to_string(),
        bytes: digest.bytes,
        chunks: digest.chunks,
        algorithm: options.algorithm,
        chunk_size: options.chunk_size,
        tree_hash: format_digest(&digest.root),
        linear_hash: format_digest(&digest.linear),
        levels: digest.levels.map(|levels| {
            levels
                .iter()
                .map(|level| level.iter().map(format_digest).collect())
                .collect()
        }),
    })
}

/// Open and hash the file at `path`. I/O failures carry the path.
pub fn hash_file(path: &Path, options: &HashOptions) -> Result<TreeHashReport, ApiError> {
    let label = path.display().to_string();
    if path.is_dir() {
        return Err(ReadError::InvalidPath(format!("{} is a directory", label)).into());
    }

    let with_path = |source: std::io::Error| ReadError::PathIo {
        path: label.clone(),
        source,
    };

    let file = File::open(path).map_err(with_path)?;
    match hash_reader(file, &label, options) {
        Err(ApiError::ReadError(ReadError::IoError(source))) => Err(with_path(source).into()),
        other => other,
    }
}
