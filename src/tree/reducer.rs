//! Pairwise reduction of a digest list down to the root digest.

use crate::error::ApiError;
use crate::tree::hasher::HashAlgorithm;
use crate::types::Digest;

/// Run one reduction pass.
///
/// Adjacent pairs are hashed together; an odd trailing digest is carried into
/// the next level unchanged.
pub fn reduce_level(level: &[Digest], algorithm: HashAlgorithm) -> Vec<Digest> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => algorithm.digest_pair(left, right),
            [single] => *single,
            _ => unreachable!("chunks(2) yields one or two digests"),
        })
        .collect()
}

/// Reduce `leaves` to the root digest.
pub fn reduce(leaves: Vec<Digest>, algorithm: HashAlgorithm) -> Result<Digest, ApiError> {
    if leaves.is_empty() {
        return Err(ApiError::EmptyTree);
    }

    let mut level = leaves;
    while level.len() > 1 {
        level = reduce_level(&level, algorithm);
    }
    Ok(level[0])
}

/// Reduce `leaves` and keep every level, leaves first and root last.
pub fn reduce_levels(
    leaves: Vec<Digest>,
    algorithm: HashAlgorithm,
) -> Result<Vec<Vec<Digest>>, ApiError> {
    if leaves.is_empty() {
        return Err(ApiError::EmptyTree);
    }

    let mut levels = vec![leaves];
    while let Some(last) = levels.last().filter(|l| l.len() > 1) {
        let next = reduce_level(last, algorithm);
        tracing::trace!(depth = levels.len(), width = next.len(), "reduced level");
        levels.push(next);
    }
    Ok(levels)
}
