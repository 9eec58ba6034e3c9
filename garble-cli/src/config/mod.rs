//! Configuration file support
//!
//! A TOML file can supply defaults for values not given on the command
//! line, such as the comprehension level and the garble markers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Default comprehension level when none is given on the command line
    pub comprehension: f32,

    /// Marker inserted before an unintelligible word
    pub open_marker: String,

    /// Marker inserted after an unintelligible word
    pub close_marker: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            comprehension: 1.0,
            open_marker: "[".to_string(),
            close_marker: "]".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.processing.comprehension, 1.0);
        assert_eq!(config.processing.open_marker, "[");
        assert_eq!(config.processing.close_marker, "]");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [processing]
            comprehension = 0.35
            "#,
        )
        .unwrap();

        assert_eq!(config.processing.comprehension, 0.35);
        // Unspecified fields fall back to defaults
        assert_eq!(config.processing.open_marker, "[");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [processing]
            comprehension = 0.0
            open_marker = "<"
            close_marker = ">"

            [output]
            pretty_json = false
            "#,
        )
        .unwrap();

        assert_eq!(config.processing.comprehension, 0.0);
        assert_eq!(config.processing.open_marker, "<");
        assert_eq!(config.processing.close_marker, ">");
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = CliConfig::load(Path::new("/nonexistent/garble.toml"));
        assert!(result.is_err());
    }
}
