//! Configuration API for speech processing

use crate::api::Error;
use crate::domain::assembler::DEFAULT_MARKERS;

/// Default configuration constants
pub mod defaults {
    /// Comprehension level when none is configured (full understanding)
    pub const COMPREHENSION: f32 = 1.0;
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) comprehension: f32,
    pub(crate) open_marker: String,
    pub(crate) close_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comprehension: defaults::COMPREHENSION,
            open_marker: DEFAULT_MARKERS.0.to_string(),
            close_marker: DEFAULT_MARKERS.1.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured comprehension level
    pub fn comprehension(&self) -> f32 {
        self.comprehension
    }

    /// The configured marker pair
    pub fn markers(&self) -> (&str, &str) {
        (&self.open_marker, &self.close_marker)
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.open_marker.is_empty() || self.close_marker.is_empty() {
            return Err(Error::Configuration("markers must be non-empty".into()));
        }
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    comprehension: Option<f32>,
    markers: Option<(String, String)>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comprehension level
    ///
    /// The value is accepted unclamped; anything at or above 1.0 leaves
    /// text untouched, anything at or below 0.0 garbles every word.
    pub fn comprehension(mut self, level: f32) -> Self {
        self.comprehension = Some(level);
        self
    }

    /// Set the markers wrapped around unintelligible words
    pub fn markers(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.markers = Some((open.into(), close.into()));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(level) = self.comprehension {
            config.comprehension = level;
        }

        if let Some((open, close)) = self.markers {
            config.open_marker = open;
            config.close_marker = close;
        }

        config.validate()?;
        Ok(config)
    }
}
