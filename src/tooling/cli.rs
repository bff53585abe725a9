//! CLI Tooling
//!
//! Command-line interface for computing Glacier-style tree hashes.

use crate::config::{ConfigLoader, TreeHashConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tooling::format::{
    format_check_text, format_levels_text, format_report_json, format_report_text,
};
use crate::tree::{hash_file, HashAlgorithm, HashOptions};
use crate::types::{format_digest, parse_digest};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// aws-tree-hash - Merkle tree hash of a file over 1 MiB chunks
#[derive(Parser, Debug)]
#[command(name = "aws-tree-hash")]
#[command(version)]
#[command(about = "Compute the Glacier-style tree hash of a file")]
pub struct Cli {
    /// File to hash
    pub file: PathBuf,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show every reduction level
    #[arg(long)]
    pub levels: bool,

    /// Verify the tree hash against an expected hex digest
    #[arg(long, value_name = "HEX")]
    pub check: Option<String>,

    /// Hash function: sha256 or blake3 (overrides configuration)
    #[arg(long, value_name = "ALGORITHM", value_parser = parse_algorithm)]
    pub algorithm: Option<HashAlgorithm>,

    /// Leaf chunk size in bytes (overrides configuration)
    #[arg(long, value_name = "BYTES", value_parser = parse_chunk_size)]
    pub chunk_size: Option<usize>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_algorithm(s: &str) -> Result<HashAlgorithm, String> {
    s.parse::<HashAlgorithm>().map_err(|e| e.to_string())
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|e| format!("invalid chunk size {:?}: {}", s, e))?;
    if size == 0 {
        return Err("chunk size must be greater than zero".to_string());
    }
    Ok(size)
}

impl Cli {
    /// The hashing request described by the parsed arguments.
    pub fn request(&self) -> HashRequest {
        HashRequest {
            file: self.file.clone(),
            format: self.format,
            levels: self.levels,
            check: self.check.clone(),
            algorithm: self.algorithm,
            chunk_size: self.chunk_size,
        }
    }

    /// Fold logging flags over the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// One hashing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRequest {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub levels: bool,
    pub check: Option<String>,
    pub algorithm: Option<HashAlgorithm>,
    pub chunk_size: Option<usize>,
}

impl HashRequest {
    /// Request with reference defaults for `file`.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            format: OutputFormat::Text,
            levels: false,
            check: None,
            algorithm: None,
            chunk_size: None,
        }
    }
}

/// CLI context holding the loaded configuration
pub struct CliContext {
    config: TreeHashConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Create a context from an already-built configuration.
    pub fn with_config(config: TreeHashConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TreeHashConfig {
        &self.config
    }

    /// Resolve hashing options: request flags first, then configuration.
    pub fn hash_options(&self, request: &HashRequest) -> HashOptions {
        HashOptions {
            algorithm: request.algorithm.unwrap_or(self.config.hash.algorithm),
            chunk_size: request.chunk_size.unwrap_or(self.config.hash.chunk_size),
            keep_levels: request.levels,
        }
    }

    /// Execute a hashing request and return the text for standard output.
    pub fn execute(&self, request: &HashRequest) -> Result<String, ApiError> {
        let expected = request.check.as_deref().map(parse_digest).transpose()?;
        let options = self.hash_options(request);

        info!(
            path = %request.file.display(),
            algorithm = options.algorithm.name(),
            chunk_size = options.chunk_size,
            "hashing file"
        );
        let report = hash_file(&request.file, &options)?;

        let verified = match expected {
            Some(expected) => {
                let expected_hex = format_digest(&expected);
                if expected_hex != report.tree_hash {
                    debug!(path = %report.path, "tree hash mismatch");
                    return Err(ApiError::ChecksumMismatch {
                        path: report.path.clone(),
                        expected: expected_hex,
                        actual: report.tree_hash.clone(),
                    });
                }
                Some(true)
            }
            None => None,
        };

        match request.format {
            OutputFormat::Json => format_report_json(&report, verified),
            OutputFormat::Text if verified.is_some() => Ok(format_check_text(&report)),
            OutputFormat::Text if request.levels => Ok(format_levels_text(&report)),
            OutputFormat::Text => Ok(format_report_text(&report)),
        }
    }
}
