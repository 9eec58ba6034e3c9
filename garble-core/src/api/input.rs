//! Message sources
//!
//! Chat messages usually arrive as in-memory strings; the file and
//! reader sources exist for batch tooling like the CLI. Whatever the
//! source, the message must decode as UTF-8 before it can be rendered.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// A message to render, from one of several sources
pub enum Input {
    /// A message already held in memory
    Text(String),
    /// A message loaded from a file
    File(PathBuf),
    /// A message pulled from an arbitrary reader
    Reader(Box<dyn Read + Send + Sync>),
}

impl Input {
    /// Message from an in-memory string
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Message from a file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Message from a reader (stdin, a socket, ...)
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Load the message text, validating UTF-8 along the way
    pub(crate) fn into_text(self) -> Result<String, Error> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read {}: {}", path.display(), e))
                })?;
                decode(bytes)
            }
            Input::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read message source: {}", e))
                })?;
                decode(bytes)
            }
        }
    }
}

fn decode(bytes: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("Message is not valid UTF-8: {}", e)))
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Input::Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "Input::File({})", path.display()),
            Input::Reader(_) => write!(f, "Input::Reader"),
        }
    }
}
