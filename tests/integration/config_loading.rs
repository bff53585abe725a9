use std::fs;

use tempfile::TempDir;
use treehash::config::ConfigLoader;
use treehash::tooling::{CliContext, HashRequest, OutputFormat};
use treehash::{ApiError, HashAlgorithm};

#[test]
fn config_file_sets_hash_and_logging() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[hash]
algorithm = "blake3"
chunk_size = 4

[logging]
level = "debug"
output = "file"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    assert_eq!(config.hash.algorithm, HashAlgorithm::Blake3);
    assert_eq!(config.hash.chunk_size, 4);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.output, "file");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn partial_config_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[logging]\nformat = \"json\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    assert_eq!(config.hash.algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.hash.chunk_size, 1_048_576);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn zero_chunk_size_in_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[hash]\nchunk_size = 0\n").unwrap();

    let result = CliContext::new(Some(config_path));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let result = CliContext::new(Some(temp.path().join("absent.toml")));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn json_report_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[hash]\nchunk_size = 2\n").unwrap();
    let data_path = temp.path().join("data.bin");
    fs::write(&data_path, b"abcde").unwrap();

    let cli = CliContext::new(Some(config_path)).unwrap();
    let output = cli
        .execute(&HashRequest {
            format: OutputFormat::Json,
            levels: true,
            ..HashRequest::new(&data_path)
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["bytes"].as_u64(), Some(5));
    assert_eq!(parsed["chunks"].as_u64(), Some(3));
    assert_eq!(parsed["chunk_size"].as_u64(), Some(2));
    assert_eq!(parsed["algorithm"].as_str(), Some("sha256"));
    assert_eq!(parsed["tree_hash"].as_str().map(str::len), Some(64));
    assert_eq!(parsed["linear_hash"].as_str().map(str::len), Some(64));
    let levels = parsed["levels"].as_array().expect("levels array should exist");
    let widths: Vec<usize> = levels
        .iter()
        .map(|l| l.as_array().unwrap().len())
        .collect();
    assert_eq!(widths, vec![3, 2, 1]);
    assert_eq!(levels[2][0], parsed["tree_hash"]);
}
