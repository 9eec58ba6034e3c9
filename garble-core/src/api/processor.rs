//! Main speech processor implementation

use std::time::Instant;

use crate::api::{Config, Error, Input, Output};
use crate::domain::assembler::assemble;

/// Speech processor applying a configured comprehension level
///
/// The processor holds no mutable state; a single instance may be
/// shared across threads and used concurrently.
pub struct SpeechProcessor {
    config: Config,
}

impl SpeechProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a processor for a specific comprehension level
    pub fn with_comprehension(level: f32) -> Self {
        let config = Config::builder()
            .comprehension(level)
            .build()
            .expect("Comprehension-only config should always be valid");
        Self { config }
    }

    /// Process input and return the rendered message with metadata
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let text = input.into_text()?;
        let rendered = assemble(&text, self.config.comprehension, self.config.markers());

        let duration = start.elapsed();
        Ok(Output::from_rendered(rendered, &text, duration))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for SpeechProcessor {
    fn default() -> Self {
        Self::new()
    }
}
