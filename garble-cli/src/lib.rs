//! Garble CLI library
//!
//! This library provides the command-line interface for rendering text
//! at a partial comprehension level, as heard by a listener with
//! limited skill in the speaker's language.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
