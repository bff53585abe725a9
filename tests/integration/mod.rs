//! Integration tests for the tree hash library and CLI

mod config_loading;
mod tree_hash_vectors;
