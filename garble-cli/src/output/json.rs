//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use garble_core::Output;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs messages as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    messages: Vec<MessageData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageData {
    /// Where the message came from (file path or "<stdin>")
    pub source: String,
    /// The rendered message text
    pub text: String,
    /// Number of word spans in the input
    pub words_total: usize,
    /// Number of words rendered unintelligible
    pub words_garbled: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            messages: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_message(&mut self, source: &str, output: &Output) -> Result<()> {
        self.messages.push(MessageData {
            source: source.to_string(),
            text: output.text.clone(),
            words_total: output.metadata.stats.words_total,
            words_garbled: output.metadata.stats.words_garbled,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.messages)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.messages)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
