//! Treehash: Glacier-style Merkle tree hashing
//!
//! Splits an input into fixed-size chunks, hashes each chunk, and reduces
//! the digest list pairwise until a single root digest remains. An unpaired
//! trailing digest is carried up a level unchanged.

pub mod config;
pub mod error;
pub mod logging;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::{ApiError, ReadError};
pub use tree::{hash_file, hash_reader, HashAlgorithm, HashOptions, TreeHashReport};
pub use types::{Digest, DEFAULT_CHUNK_SIZE};
