//! Core types for tree hashing.

use crate::error::ApiError;

/// Digest: 256-bit hash of a chunk or of a concatenated digest pair
pub type Digest = [u8; 32];

/// Default chunk size: 1 MiB, as used by Glacier tree hashes
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Render a digest as lowercase hex.
pub fn format_digest(digest: &Digest) -> String {
    hex::encode(digest)
}

/// Parse a 64-character hex digest. A leading `0x` is accepted.
pub fn parse_digest(s: &str) -> Result<Digest, ApiError> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);

    let bytes =
        hex::decode(s).map_err(|e| ApiError::InvalidDigest(format!("Invalid hex string: {}", e)))?;

    if bytes.len() != 32 {
        return Err(ApiError::InvalidDigest(format!(
            "Digest must be 32 bytes, got {} bytes",
            bytes.len()
        )));
    }

    let mut digest = [0u8; 32];
    digest.copy_from_slice(&bytes);
    Ok(digest)
}
