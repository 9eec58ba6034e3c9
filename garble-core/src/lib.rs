//! Deterministic partial-comprehension garbling of in-game speech
//!
//! Given a message and a listener's comprehension level in the
//! speaker's language, this crate returns the same message with every
//! word the listener cannot understand wrapped in square brackets.
//! The decision per word is a pure function of the word's text and
//! position, so a given message always renders the same way for a
//! given comprehension level, with no random source and no shared
//! state.
//!
//! # Architecture
//!
//! - **Domain layer**: span tokenization, per-word scoring, assembly —
//!   pure logic with no I/O.
//! - **API layer**: configuration, input abstraction, and output
//!   metadata for callers such as the CLI.
//!
//! # Example
//!
//! ```rust
//! use garble_core::garble;
//!
//! // Full comprehension leaves the text untouched
//! assert_eq!(garble("Hello friend", 1.0), "Hello friend");
//!
//! // No comprehension brackets every word, preserving punctuation
//! assert_eq!(garble("Hello, world!", 0.0), "[Hello], [world]!");
//! ```

pub mod api;
pub mod domain;

pub use api::{
    Config, ConfigBuilder, Error, GarbledWord, Input, Output, ProcessingMetadata, ProcessingStats,
    Result, SpeechProcessor,
};
pub use domain::{garble, tokenize, Intelligibility, Span, SpanKind};
