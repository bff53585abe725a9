//! Merkle tree hash over fixed-size chunks of an input.

pub mod builder;
pub mod chunker;
pub mod hasher;
pub mod reducer;

pub use builder::{hash_file, hash_reader, hash_stream, HashOptions, TreeDigest, TreeHashReport};
pub use chunker::ChunkReader;
pub use hasher::{HashAlgorithm, LinearHasher};
