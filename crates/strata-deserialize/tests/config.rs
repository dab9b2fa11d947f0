//! Decoder configuration files

use std::io::Write;
use strata_deserialize::{ConfigError, DecoderConfig};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_decoder_table() {
    let file = config_file(
        r#"
[decoder]
max_depth = 2048
check_symbol_kinds = false
"#,
    );
    let config = DecoderConfig::load(file.path()).unwrap();
    assert_eq!(config.max_depth, 2048);
    assert!(!config.check_symbol_kinds);
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = config_file("check_symbol_kinds = false\n");
    let config = DecoderConfig::load(file.path()).unwrap();
    assert_eq!(config.max_depth, DecoderConfig::default().max_depth);
    assert!(!config.check_symbol_kinds);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DecoderConfig::load(&dir.path().join("strata.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_invalid_depth() {
    let file = config_file("[decoder]\nmax_depth = 0\n");
    assert!(matches!(
        DecoderConfig::load(file.path()),
        Err(ConfigError::Validation(_))
    ));
}
