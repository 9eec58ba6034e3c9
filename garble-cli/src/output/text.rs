//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use garble_core::Output;
use std::io::Write;

/// Text formatter - writes the rendered message as-is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_message(&mut self, _source: &str, output: &Output) -> Result<()> {
        self.writer.write_all(output.text.as_bytes())?;
        if !output.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
