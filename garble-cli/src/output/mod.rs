//! Output formatting module

use anyhow::Result;
use garble_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single rendered message
    fn format_message(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
