//! Tooling & Integration Layer
//!
//! Command-line surface of the tree hash: argument parsing, the execution
//! context, and output formatting.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, HashRequest, OutputFormat};
