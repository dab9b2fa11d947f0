//! Decoder configuration
//!
//! Loaded from TOML. Settings may sit at the top level of the file or under a
//! `[decoder]` table:
//!
//! ```toml
//! [decoder]
//! max_depth = 4096
//! check_symbol_kinds = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum nesting of expressions, statements and declarations (default: 65535)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Reject symbols whose descriptor or cached kind does not fit the use site (default: true)
    #[serde(default = "default_check_symbol_kinds")]
    pub check_symbol_kinds: bool,
}

fn default_max_depth() -> usize {
    65535
}

fn default_check_symbol_kinds() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            check_symbol_kinds: default_check_symbol_kinds(),
        }
    }
}

impl DecoderConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut value: toml::Value = toml::from_str(content)?;
        if let Some(decoder) = value.as_table_mut().and_then(|table| table.remove("decoder")) {
            value = decoder;
        }
        let config: DecoderConfig = value.try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_symbol_kind_checks(mut self, check: bool) -> Self {
        self.check_symbol_kinds = check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::from_toml_str("").unwrap();
        assert_eq!(config, DecoderConfig::default());
        assert_eq!(config.max_depth, 65535);
        assert!(config.check_symbol_kinds);
    }

    #[test]
    fn test_top_level_settings() {
        let config = DecoderConfig::from_toml_str("max_depth = 128").unwrap();
        assert_eq!(config.max_depth, 128);
        assert!(config.check_symbol_kinds);
    }

    #[test]
    fn test_decoder_table() {
        let toml = r#"
[decoder]
max_depth = 32
check_symbol_kinds = false
"#;
        let config = DecoderConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.max_depth, 32);
        assert!(!config.check_symbol_kinds);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = DecoderConfig::from_toml_str("max_depth = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_toml() {
        let result = DecoderConfig::from_toml_str("max_depth = \"deep\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
