//! Public API for garble-core
//!
//! This module provides a clean interface around the domain layer for
//! callers that want configuration, input abstraction, and output
//! metadata rather than the bare string transform.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{GarbledWord, Output, ProcessingMetadata, ProcessingStats};
pub use processor::SpeechProcessor;
