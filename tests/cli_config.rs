//! Integration tests for config file loading and `config init`.

use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;

use termgraph::cli::{init_config, load_config, resolve_options, Args, RunError};
use termgraph::config::{Config, ConfigError, DEFAULT_CONFIG};
use termgraph::plot::FunctionPreset;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[graph]\nwidth = 80\nfunction = \"cubic\"\n");

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.graph.width, Some(80));

    let args = Args::parse_from(["termgraph", "--config", path.to_str().unwrap()]);
    let opts = resolve_options(&args, &config).unwrap();
    assert_eq!(opts.width, 80);
    assert_eq!(opts.function, FunctionPreset::Cubic);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_malformed_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[graph\nwidth = ");
    let err = Config::load_from_explicit(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_init_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("termgraph").join("config.toml");

    init_config(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, DEFAULT_CONFIG);

    // The written file loads back as the defaults
    let config = Config::load_from_explicit(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[display]\ncolor = false\n");

    let err = init_config(&path).unwrap_err();
    assert!(matches!(err, RunError::ConfigExists(_)));

    // Existing file untouched
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[display]\ncolor = false\n");
}
